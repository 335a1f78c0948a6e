//! Tonal adjustment transforms over RGBA buffers.
//!
//! [`apply_adjustments`] runs the pre-dither corrections in a fixed order:
//!
//! 1. **Contrast** - scale channels around the 128 midpoint
//! 2. **Highlights** - lift bright regions, weighted by squared luma
//! 3. **Midtones** - gain centered on mid-gray with a Gaussian falloff
//! 4. **Blur** - edge-clipped box blur (see [`super::blur`])
//! 5. **Luminance** - flat brightness offset
//! 6. **Invert** - complement all color channels
//!
//! Each transform only runs when its parameter is non-neutral, and each
//! writes its channels through the shared round-then-clamp rule, so
//! intermediate values re-enter the 0-255 byte domain between transforms.
//! Alpha bytes pass through untouched everywhere.

use crate::adjust::blur::apply_box_blur;
use crate::adjust::options::{AdjustmentParams, NEUTRAL_CONTRAST};
use crate::buffer::{clamp_u8, luma, PixelBuffer};

/// Apply all non-neutral adjustments to a copy of `source`.
///
/// The source buffer is never mutated; callers that cache adjusted output
/// can hold on to the returned buffer independently.
pub fn apply_adjustments(source: &PixelBuffer, params: &AdjustmentParams) -> PixelBuffer {
    let mut out = source.clone();
    if params.contrast != NEUTRAL_CONTRAST {
        apply_contrast(&mut out, params.contrast);
    }
    if params.highlights != 0 {
        apply_highlights(&mut out, params.highlights);
    }
    if params.midtones != 0 {
        apply_midtones(&mut out, params.midtones);
    }
    if params.blur > 0 {
        apply_box_blur(&mut out, params.blur);
    }
    if params.luminance != 0 {
        apply_luminance(&mut out, params.luminance);
    }
    if params.invert {
        apply_invert(&mut out);
    }
    out
}

/// Scale every color channel around the 128 midpoint.
///
/// `value` of 100 is identity, 0 collapses to flat gray, 200 doubles the
/// distance from mid.
fn apply_contrast(buffer: &mut PixelBuffer, value: i32) {
    let factor = value as f32 / 100.0;
    for pixel in buffer.data_mut().chunks_exact_mut(PixelBuffer::CHANNELS) {
        for channel in &mut pixel[..3] {
            *channel = clamp_u8((*channel as f32 - 128.0) * factor + 128.0);
        }
    }
}

/// Lift or drop bright regions.
///
/// The push toward white scales with the squared normalized luma of the
/// pixel, so shadows are left nearly untouched.
fn apply_highlights(buffer: &mut PixelBuffer, value: i32) {
    let factor = 1.0 + value as f32 / 100.0;
    for pixel in buffer.data_mut().chunks_exact_mut(PixelBuffer::CHANNELS) {
        let l = luma(pixel[0], pixel[1], pixel[2]);
        let strength = (l / 255.0) * (l / 255.0);
        for channel in &mut pixel[..3] {
            let c = *channel as f32;
            *channel = clamp_u8(c + (255.0 - c) * (factor - 1.0) * strength);
        }
    }
}

/// Gain centered on mid-gray.
///
/// The weight is a Gaussian over luma distance from 128 with width 64, so
/// deep shadows and bright highlights are barely affected.
fn apply_midtones(buffer: &mut PixelBuffer, value: i32) {
    let factor = 1.0 + value as f32 / 100.0;
    for pixel in buffer.data_mut().chunks_exact_mut(PixelBuffer::CHANNELS) {
        let l = luma(pixel[0], pixel[1], pixel[2]);
        let t = (l - 128.0) / 64.0;
        let weight = (-t * t).exp();
        for channel in &mut pixel[..3] {
            *channel = clamp_u8(*channel as f32 * (1.0 + (factor - 1.0) * weight));
        }
    }
}

/// Add a flat brightness offset of `round(value * 1.28)` to every channel.
fn apply_luminance(buffer: &mut PixelBuffer, value: i32) {
    let offset = (value as f32 * 1.28).round() as i32;
    for pixel in buffer.data_mut().chunks_exact_mut(PixelBuffer::CHANNELS) {
        for channel in &mut pixel[..3] {
            *channel = (*channel as i32 + offset).clamp(0, 255) as u8;
        }
    }
}

/// Complement every color channel.
fn apply_invert(buffer: &mut PixelBuffer) {
    for pixel in buffer.data_mut().chunks_exact_mut(PixelBuffer::CHANNELS) {
        for channel in &mut pixel[..3] {
            *channel = 255 - *channel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single_pixel(rgba: [u8; 4]) -> PixelBuffer {
        PixelBuffer::new(1, 1, rgba.to_vec()).unwrap()
    }

    // ===== apply_adjustments =====

    #[test]
    fn test_neutral_params_leave_buffer_unchanged() {
        let source = single_pixel([12, 34, 56, 78]);
        let out = apply_adjustments(&source, &AdjustmentParams::default());
        assert_eq!(out, source);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = single_pixel([100, 100, 100, 255]);
        let _ = apply_adjustments(&source, &AdjustmentParams::new().invert(true));
        assert_eq!(source.data(), &[100, 100, 100, 255]);
    }

    #[test]
    fn test_alpha_passes_through_all_transforms() {
        let source = single_pixel([50, 100, 150, 42]);
        let params = AdjustmentParams::new()
            .contrast(150)
            .highlights(40)
            .midtones(-30)
            .blur(2)
            .luminance(20)
            .invert(true);
        let out = apply_adjustments(&source, &params);
        assert_eq!(out.data()[3], 42);
    }

    #[test]
    fn test_contrast_runs_before_luminance() {
        let source = single_pixel([100, 100, 100, 255]);
        let params = AdjustmentParams::new().contrast(200).luminance(50);
        let out = apply_adjustments(&source, &params);
        // Contrast first: (100-128)*2+128 = 72, then offset +64 = 136.
        // The reverse order would give (164-128)*2+128 = 200.
        assert_eq!(out.data()[0], 136);
    }

    // ===== contrast =====

    #[test]
    fn test_contrast_identity_at_100() {
        let mut buffer = single_pixel([37, 128, 220, 255]);
        apply_contrast(&mut buffer, 100);
        assert_eq!(buffer.data(), &[37, 128, 220, 255]);
    }

    #[test]
    fn test_contrast_zero_collapses_to_mid_gray() {
        let mut buffer = single_pixel([0, 128, 255, 255]);
        apply_contrast(&mut buffer, 0);
        assert_eq!(buffer.data(), &[128, 128, 128, 255]);
    }

    #[test]
    fn test_contrast_200_doubles_and_clamps() {
        let mut buffer = single_pixel([100, 128, 200, 255]);
        apply_contrast(&mut buffer, 200);
        // (100-128)*2+128 = 72, (128-128)*2+128 = 128, (200-128)*2+128 = 272 -> 255.
        assert_eq!(buffer.data(), &[72, 128, 255, 255]);
    }

    // ===== highlights =====

    #[test]
    fn test_highlights_leave_black_untouched() {
        let mut buffer = single_pixel([0, 0, 0, 255]);
        apply_highlights(&mut buffer, 100);
        assert_eq!(buffer.data(), &[0, 0, 0, 255]);
    }

    #[test]
    fn test_highlights_lift_bright_pixels() {
        let mut buffer = single_pixel([200, 200, 200, 255]);
        apply_highlights(&mut buffer, 50);
        // L = 200, strength = (200/255)^2 = 0.6151, lift = 55*0.5*0.6151 = 16.9.
        assert_eq!(buffer.data()[0], 217);
    }

    #[test]
    fn test_negative_highlights_darken() {
        let mut buffer = single_pixel([200, 200, 200, 255]);
        apply_highlights(&mut buffer, -50);
        let value = buffer.data()[0];
        assert!(value < 200, "expected darkening, got {value}");
    }

    // ===== midtones =====

    #[test]
    fn test_midtones_peak_at_mid_gray() {
        let mut mid = single_pixel([128, 128, 128, 255]);
        let mut dark = single_pixel([10, 10, 10, 255]);
        apply_midtones(&mut mid, 50);
        apply_midtones(&mut dark, 50);
        // Full weight at L=128: 128 * 1.5 = 192.
        assert_eq!(mid.data()[0], 192);
        // Far from mid-gray the weight is negligible.
        assert_eq!(dark.data()[0], 10);
    }

    #[test]
    fn test_negative_midtones_compress() {
        let mut buffer = single_pixel([128, 128, 128, 255]);
        apply_midtones(&mut buffer, -50);
        assert_eq!(buffer.data()[0], 64);
    }

    // ===== luminance =====

    #[test]
    fn test_luminance_offset_scaling() {
        let mut buffer = single_pixel([100, 100, 100, 255]);
        // round(50 * 1.28) = 64.
        apply_luminance(&mut buffer, 50);
        assert_eq!(buffer.data(), &[164, 164, 164, 255]);
    }

    #[test]
    fn test_luminance_clamps_at_bounds() {
        let mut bright = single_pixel([250, 250, 250, 255]);
        apply_luminance(&mut bright, 100);
        assert_eq!(bright.data()[0], 255);

        let mut dark = single_pixel([5, 5, 5, 255]);
        apply_luminance(&mut dark, -100);
        assert_eq!(dark.data()[0], 0);
    }

    // ===== invert =====

    #[test]
    fn test_invert_complements_channels() {
        let mut buffer = single_pixel([0, 100, 255, 200]);
        apply_invert(&mut buffer);
        assert_eq!(buffer.data(), &[255, 155, 0, 200]);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let original = single_pixel([12, 99, 201, 255]);
        let mut buffer = original.clone();
        apply_invert(&mut buffer);
        apply_invert(&mut buffer);
        assert_eq!(buffer, original);
    }
}
