//! Nearest-neighbor resolution scaling.
//!
//! Dithering can run on a reduced working resolution for chunkier output.
//! [`downsample`] shrinks a buffer by an integer factor before dithering and
//! [`upsample`] stretches the result back to native size, replicating each
//! working pixel into a block. Both directions pick source pixels with the
//! same index mapping `src = dst * src_dim / dst_dim`, truncated, so a
//! down/up round trip at factor `s` yields exact `s`-pixel blocks.

use crate::buffer::PixelBuffer;

/// Map a destination index to its source index.
#[inline]
fn source_index(dst: u32, src_dim: u32, dst_dim: u32) -> u32 {
    (dst as u64 * src_dim as u64 / dst_dim as u64) as u32
}

/// Copy pixels from `source` into a `width x height` buffer using
/// nearest-neighbor sampling.
fn resample(source: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * PixelBuffer::CHANNELS);
    let src = source.data();
    for y in 0..height {
        let sy = source_index(y, source.height(), height);
        for x in 0..width {
            let sx = source_index(x, source.width(), width);
            let idx = source.index(sx, sy);
            data.extend_from_slice(&src[idx..idx + PixelBuffer::CHANNELS]);
        }
    }
    PixelBuffer::from_raw(width, height, data)
}

/// Shrink a buffer by an integer factor.
///
/// Target dimensions are `floor(dim / scale)`, at least 1, so a factor
/// larger than the image collapses to a single pixel. A factor of 1 (or
/// less) returns an unmodified copy.
pub fn downsample(source: &PixelBuffer, scale: u32) -> PixelBuffer {
    if scale <= 1 {
        return source.clone();
    }
    let width = (source.width() / scale).max(1);
    let height = (source.height() / scale).max(1);
    resample(source, width, height)
}

/// Stretch a buffer to the given dimensions.
///
/// Used to bring a dithered working buffer back to native resolution.
/// Returns an unmodified copy when the dimensions already match.
pub fn upsample(source: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    if source.width() == width && source.height() == height {
        return source.clone();
    }
    resample(source, width, height)
}
