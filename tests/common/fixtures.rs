//! Pixel buffer fixtures shared by the integration tests.

use ditherlab::PixelBuffer;

/// Uniform mid-gray square, the canonical dithering fixture.
pub fn mid_gray(size: u32) -> PixelBuffer {
    PixelBuffer::filled(size, size, [128, 128, 128, 255]).unwrap()
}

/// Horizontal dark-to-light gradient.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    let span = width.saturating_sub(1).max(1);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / span) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

/// A buffer that fails the size invariant, as if it arrived over a
/// serialized boundary with truncated data.
pub fn truncated_buffer() -> PixelBuffer {
    serde_json::from_str(r#"{"width":4,"height":4,"data":[0,0,0]}"#).unwrap()
}

/// Gray values (R channel) of every pixel in row-major order.
pub fn gray_values(buffer: &PixelBuffer) -> Vec<u8> {
    buffer.data().iter().step_by(4).copied().collect()
}
