//! Error types for pipeline operations.

use thiserror::Error;

/// Errors produced while validating or transforming pixel buffers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Buffer length does not match the declared dimensions.
    #[error("Buffer length {actual} does not match {width}x{height}x4 = {expected}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Zero-sized images cannot be processed.
    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_mismatch_message() {
        let err = PipelineError::BufferSizeMismatch {
            width: 4,
            height: 4,
            expected: 64,
            actual: 60,
        };
        assert_eq!(
            err.to_string(),
            "Buffer length 60 does not match 4x4x4 = 64"
        );
    }

    #[test]
    fn test_empty_image_message() {
        let err = PipelineError::EmptyImage {
            width: 0,
            height: 100,
        };
        assert_eq!(
            err.to_string(),
            "Image dimensions must be non-zero (got 0x100)"
        );
    }
}
