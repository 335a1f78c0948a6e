//! Assertion helpers for pixel buffers.

use ditherlab::{Palette, PixelBuffer};
use pretty_assertions::assert_eq;

/// Assert a buffer has the expected dimensions.
pub fn assert_dimensions(buffer: &PixelBuffer, width: u32, height: u32) {
    assert_eq!(
        (buffer.width(), buffer.height()),
        (width, height),
        "Expected a {width}x{height} buffer"
    );
}

/// Assert every pixel is achromatic and its intensity is a palette level.
pub fn assert_in_palette(buffer: &PixelBuffer, palette: &Palette) {
    for (i, pixel) in buffer.data().chunks(4).enumerate() {
        assert!(
            pixel[0] == pixel[1] && pixel[1] == pixel[2],
            "Pixel {i} is not gray: {:?}",
            &pixel[..3]
        );
        assert!(
            palette.levels().contains(&pixel[0]),
            "Pixel {i} intensity {} not in palette {:?}",
            pixel[0],
            palette.levels()
        );
    }
}

/// Assert every pixel carries the expected alpha value.
pub fn assert_alpha(buffer: &PixelBuffer, expected: u8) {
    for (i, alpha) in buffer.data().iter().skip(3).step_by(4).enumerate() {
        assert_eq!(*alpha, expected, "Pixel {i} alpha changed");
    }
}
