//! Error diffusion kernel definitions.
//!
//! This module defines the diffusion kernels for the error diffusion
//! strategies. Each kernel specifies how quantization error is distributed
//! to neighboring pixels.

/// An error diffusion kernel.
///
/// The kernel defines how quantization error is distributed to neighboring
/// pixels that haven't been processed yet. Each entry specifies an offset
/// (dx, dy) and a weight for that neighbor.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// and Sierra propagate 100% of error (sum equals divisor), but Atkinson
/// intentionally propagates only 75% for a lighter, higher-contrast look.
///
/// # Entry Order
///
/// Diffused shares are written straight into the neighbor's channel bytes,
/// rounding and clamping on every write. Entry order is therefore part of
/// the algorithm: reordering entries can change output bytes near black
/// and white.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (always positive = below current row)
    /// - `weight`: fraction of error to diffuse (as numerator, divisor is separate)
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    ///
    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
/// The most widely known error diffusion algorithm.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
/// The "lost" quarter of the error gives flat regions a cleaner, less
/// noisy rendition at the cost of some shadow and highlight detail.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Sierra (full/Sierra-3) dithering kernel.
///
/// Distributes error to 10 neighbors over 3 rows with 100% propagation
/// (32/32). Spreads error wider than Floyd-Steinberg, producing smoother
/// gradients.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagation_100_percent() {
        let sum: u8 = FLOYD_STEINBERG.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 16, "Floyd-Steinberg weights should sum to 16");
        assert_eq!(
            FLOYD_STEINBERG.divisor, 16,
            "Floyd-Steinberg divisor should be 16"
        );
    }

    #[test]
    fn test_atkinson_propagation_75_percent() {
        let sum: u8 = ATKINSON.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 6, "Atkinson should have 6 weight units");
        assert_eq!(ATKINSON.divisor, 8, "Atkinson divisor should be 8");
        // 6/8 = 75% propagation
        assert!(
            (sum as f32 / ATKINSON.divisor as f32 - 0.75).abs() < f32::EPSILON,
            "Atkinson should propagate 75% of error"
        );
    }

    #[test]
    fn test_sierra_propagation_100_percent() {
        let sum: u8 = SIERRA.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 32, "Sierra weights should sum to 32");
        assert_eq!(SIERRA.divisor, 32, "Sierra divisor should be 32");
    }

    #[test]
    fn test_kernel_entry_count() {
        assert_eq!(
            FLOYD_STEINBERG.entries.len(),
            4,
            "Floyd-Steinberg should have 4 entries"
        );
        assert_eq!(ATKINSON.entries.len(), 6, "Atkinson should have 6 entries");
        assert_eq!(SIERRA.entries.len(), 10, "Sierra should have 10 entries");
    }

    #[test]
    fn test_entries_only_reach_forward() {
        for kernel in [FLOYD_STEINBERG, ATKINSON, SIERRA] {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy >= 0, "kernel must not reach into previous rows");
                assert!(
                    dy > 0 || dx > 0,
                    "kernel must not touch already-processed pixels"
                );
            }
        }
    }
}
