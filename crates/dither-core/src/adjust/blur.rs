//! Edge-clipped box blur.

use crate::adjust::options::MAX_BLUR_RADIUS;
use crate::buffer::{clamp_u8, PixelBuffer};

/// Blur the color channels with a square box kernel.
///
/// The radius is the blur strength capped at [`MAX_BLUR_RADIUS`]. Each
/// output channel is the unweighted mean of the in-bounds neighborhood, so
/// border pixels average over a smaller window instead of sampling outside
/// the image. Alpha bytes are left as they are.
pub(crate) fn apply_box_blur(buffer: &mut PixelBuffer, strength: i32) {
    let radius = strength.min(MAX_BLUR_RADIUS);
    if radius <= 0 {
        return;
    }

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let source = buffer.data().to_vec();
    let data = buffer.data_mut();

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0u32; 3];
            let mut count = 0u32;
            for dy in -radius..=radius {
                let ny = y + dy;
                if ny < 0 || ny >= height {
                    continue;
                }
                for dx in -radius..=radius {
                    let nx = x + dx;
                    if nx < 0 || nx >= width {
                        continue;
                    }
                    let idx = (ny * width + nx) as usize * PixelBuffer::CHANNELS;
                    sum[0] += source[idx] as u32;
                    sum[1] += source[idx + 1] as u32;
                    sum[2] += source[idx + 2] as u32;
                    count += 1;
                }
            }
            let idx = (y * width + x) as usize * PixelBuffer::CHANNELS;
            for channel in 0..3 {
                data[idx + channel] = clamp_u8(sum[channel] as f32 / count as f32);
            }
        }
    }
}
