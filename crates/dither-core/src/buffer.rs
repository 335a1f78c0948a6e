//! RGBA pixel buffer shared by every pipeline stage.
//!
//! [`PixelBuffer`] is the unit of exchange across the crate: adjustments,
//! scaling, and dithering all consume and produce this type. Pixels are
//! stored as interleaved `[R, G, B, A]` bytes in row-major order.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// An owned RGBA image.
///
/// Holds exactly `width * height * 4` bytes. The constructor enforces this,
/// so a `PixelBuffer` obtained through [`PixelBuffer::new`] is always
/// internally consistent. Buffers arriving over a serialized boundary should
/// be re-checked with [`validate()`](PixelBuffer::validate) before use.
///
/// # Example
///
/// ```
/// use dither_core::PixelBuffer;
///
/// let buffer = PixelBuffer::filled(2, 2, [128, 128, 128, 255]).unwrap();
/// assert_eq!(buffer.width(), 2);
/// assert_eq!(buffer.data().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Interleaved RGBA bytes, row-major.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Create a buffer from raw RGBA bytes.
    ///
    /// Returns [`PipelineError::EmptyImage`] for zero-sized dimensions and
    /// [`PipelineError::BufferSizeMismatch`] when `data` does not hold
    /// `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(PipelineError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Construct without the length check, for stages that derive `data`
    /// from the dimensions they pass.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height * 4`.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * Self::CHANNELS,
            "data length ({}) must match {width}x{height}x4",
            data.len(),
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a buffer filled with a single RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, PipelineError> {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * Self::CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self::new(width, height, data)
    }

    /// Re-check the size invariant.
    ///
    /// `new` already guarantees it; this exists for buffers that entered
    /// through deserialization, where the fields are populated directly.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize * Self::CHANNELS;
        if self.data.len() != expected {
            return Err(PipelineError::BufferSizeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the raw RGBA bytes as a slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGBA bytes as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the raw bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of the pixel at `(x, y)`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the coordinate lies inside the image.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height,
        );
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }
}

/// Round to the nearest integer and clamp into the 8-bit range.
///
/// The single clamping rule used by every stage that writes channel bytes.
#[inline]
pub(crate) fn clamp_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Rec. 601 luma of an RGB triple, unrounded.
///
/// Every stage that needs a gray value derives it from this single
/// definition: `0.299 R + 0.587 G + 0.114 B`.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// [`luma`] rounded to an 8-bit gray value.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    luma(r, g, b).round() as u8
}
