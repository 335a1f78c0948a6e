//! Bayer ordered dithering algorithm.
//!
//! Ordered dithering compares each pixel's gray level against a tiled
//! threshold matrix instead of diffusing error. The output depends only on
//! the pixel value and its coordinates, so edges stay crisp and repeated
//! runs over the same region are bit-identical by construction.

use crate::buffer::{luma_u8, PixelBuffer};
use crate::palette::{Palette, PaletteKind};

use super::{Dither, DitherParams, MatrixSize};

/// 2x2 Bayer threshold matrix.
pub const BAYER_2: [[u8; 2]; 2] = [[0, 2], [3, 1]];

/// 4x4 Bayer threshold matrix, the classic pattern.
pub const BAYER_4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// 8x8 Bayer threshold matrix.
pub const BAYER_8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Normalized threshold for a pixel coordinate.
///
/// The matrix tiles across the image; cell values divide by the cell count,
/// giving thresholds in `[0, 1)`.
#[inline]
fn threshold(size: MatrixSize, x: usize, y: usize) -> f32 {
    let cell = match size {
        MatrixSize::Two => BAYER_2[y % 2][x % 2],
        MatrixSize::Four => BAYER_4[y % 4][x % 4],
        MatrixSize::Eight => BAYER_8[y % 8][x % 8],
    };
    cell as f32 / size.cells() as f32
}

/// Bayer ordered dithering.
///
/// For the black/white palette a pixel goes white when its normalized gray
/// exceeds the local threshold. For grayscale the gray value is split into
/// a base level and a fractional remainder, and the remainder is compared
/// against the threshold to decide whether to bump to the next level.
///
/// Unlike the error diffusion strategies this reads
/// [`matrix_size`](DitherParams::matrix_size) from the parameters.
pub struct Bayer;

impl Dither for Bayer {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, params: &DitherParams) {
        let size = params.matrix_size;
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;
        let step = palette.step();
        let last_level = palette.len() - 1;
        let data = buffer.data_mut();

        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) * PixelBuffer::CHANNELS;
                let gray = luma_u8(data[idx], data[idx + 1], data[idx + 2]);
                let t = threshold(size, x, y);

                let quantized = match palette.kind() {
                    PaletteKind::Bw => {
                        if gray as f32 / 255.0 > t {
                            255
                        } else {
                            0
                        }
                    }
                    PaletteKind::Grayscale => {
                        let gray = gray as f32;
                        let mut level = (gray / step).floor() as usize;
                        let fractional = (gray % step) / step;
                        if fractional > t {
                            level = (level + 1).min(last_level);
                        }
                        palette.level(level)
                    }
                };

                data[idx] = quantized;
                data[idx + 1] = quantized;
                data[idx + 2] = quantized;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bw_palette() -> Palette {
        Palette::for_kind(PaletteKind::Bw)
    }

    fn gray_values(buffer: &PixelBuffer) -> Vec<u8> {
        buffer.data().iter().step_by(4).copied().collect()
    }

    #[test]
    fn test_matrix_values() {
        assert_eq!(BAYER_2, [[0, 2], [3, 1]]);
        assert_eq!(BAYER_4[1], [12, 4, 14, 6]);
        assert_eq!(BAYER_8[7], [63, 31, 55, 23, 61, 29, 53, 21]);
    }

    #[test]
    fn test_matrices_contain_every_cell_value_once() {
        let mut seen = [false; 64];
        for row in BAYER_8 {
            for cell in row {
                assert!(!seen[cell as usize], "duplicate cell {cell}");
                seen[cell as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_thresholds_normalized_below_one() {
        for size in [MatrixSize::Two, MatrixSize::Four, MatrixSize::Eight] {
            let n = size.n() as usize;
            for y in 0..n {
                for x in 0..n {
                    let t = threshold(size, x, y);
                    assert!((0.0..1.0).contains(&t), "threshold {t} out of range");
                }
            }
        }
    }

    #[test]
    fn test_mid_gray_produces_fixed_4x4_pattern() {
        // Gray 128 normalizes to 0.502, which beats thresholds m/16 for
        // m <= 8. The output pattern is the matrix itself, binarized.
        let mut buffer = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
        Bayer.dither(&mut buffer, &bw_palette(), &DitherParams::default());
        let expected: Vec<u8> = BAYER_4
            .iter()
            .flatten()
            .map(|&m| if m <= 8 { 255 } else { 0 })
            .collect();
        assert_eq!(gray_values(&buffer), expected);
    }

    #[test]
    fn test_pattern_tiles_past_matrix_bounds() {
        // An 8x8 run of the 4x4 matrix repeats its pattern in both axes.
        let mut buffer = PixelBuffer::filled(8, 8, [128, 128, 128, 255]).unwrap();
        Bayer.dither(&mut buffer, &bw_palette(), &DitherParams::default());
        let values = gray_values(&buffer);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(values[y * 8 + x], values[(y % 4) * 8 + (x % 4)]);
            }
        }
    }

    #[test]
    fn test_matrix_size_changes_output() {
        let source = PixelBuffer::filled(8, 8, [128, 128, 128, 255]).unwrap();

        let mut small = source.clone();
        Bayer.dither(
            &mut small,
            &bw_palette(),
            &DitherParams::new().matrix_size(MatrixSize::Two),
        );

        let mut large = source;
        Bayer.dither(
            &mut large,
            &bw_palette(),
            &DitherParams::new().matrix_size(MatrixSize::Eight),
        );

        assert_ne!(small, large);
    }

    #[test]
    fn test_pure_tones_unchanged_in_bw() {
        let mut black = PixelBuffer::filled(4, 4, [0, 0, 0, 255]).unwrap();
        Bayer.dither(&mut black, &bw_palette(), &DitherParams::default());
        assert!(gray_values(&black).iter().all(|&v| v == 0));

        let mut white = PixelBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap();
        Bayer.dither(&mut white, &bw_palette(), &DitherParams::default());
        assert!(gray_values(&white).iter().all(|&v| v == 255));
    }

    #[test]
    fn test_grayscale_bumps_levels_by_threshold() {
        let palette = Palette::for_kind(PaletteKind::Grayscale);
        // Gray 55: level = floor(55/36.43) = 1, fractional = 0.51.
        // At (0,0) the 4x4 threshold is 0, so the level bumps to 2 (73).
        // At (0,1) the threshold is 12/16 = 0.75, so it stays at 1 (36).
        let mut buffer = PixelBuffer::filled(1, 2, [55, 55, 55, 255]).unwrap();
        Bayer.dither(&mut buffer, &palette, &DitherParams::default());
        assert_eq!(gray_values(&buffer), vec![73, 36]);
    }

    #[test]
    fn test_grayscale_output_in_palette() {
        let palette = Palette::for_kind(PaletteKind::Grayscale);
        let mut buffer = PixelBuffer::filled(8, 8, [147, 147, 147, 255]).unwrap();
        Bayer.dither(
            &mut buffer,
            &palette,
            &DitherParams::new().matrix_size(MatrixSize::Eight),
        );
        for value in gray_values(&buffer) {
            assert!(palette.levels().contains(&value), "{value} not in palette");
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let mut buffer = PixelBuffer::filled(4, 4, [90, 90, 90, 33]).unwrap();
        Bayer.dither(&mut buffer, &bw_palette(), &DitherParams::default());
        for alpha in buffer.data().iter().skip(3).step_by(4) {
            assert_eq!(*alpha, 33);
        }
    }
}
