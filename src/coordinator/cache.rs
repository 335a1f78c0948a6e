//! Adjusted-buffer cache.
//!
//! Tonal adjustment is the expensive half of a run, and interactive use
//! changes the dither settings far more often than the tone settings. The
//! coordinator therefore keeps the last adjusted buffer around: switching
//! algorithm, scale, or palette re-dithers from the cached buffer instead
//! of re-running the adjustment stage.

use std::sync::Arc;

use tokio::sync::RwLock;

use dither_core::{AdjustmentParams, PixelBuffer};

/// One cached adjustment result.
#[derive(Clone)]
struct CacheEntry {
    image_id: u64,
    adjustments: AdjustmentParams,
    buffer: PixelBuffer,
}

/// Cache for the adjusted buffer, keyed by image identity and parameters.
///
/// Invalidation happens on every image or adjustment change, so at most
/// one entry is ever live; the cache is a single keyed slot rather than a
/// map. Neutral adjustments never populate it -- the raw buffer feeds the
/// dither stage directly in that case.
#[derive(Clone, Default)]
pub struct AdjustedCache {
    slot: Arc<RwLock<Option<CacheEntry>>>,
}

impl AdjustedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached buffer if it was adjusted from the same image
    /// with the same parameters.
    pub async fn get(
        &self,
        image_id: u64,
        adjustments: &AdjustmentParams,
    ) -> Option<PixelBuffer> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|entry| entry.image_id == image_id && entry.adjustments == *adjustments)
            .map(|entry| entry.buffer.clone())
    }

    /// Store an adjustment result, replacing whatever was cached.
    pub async fn store(
        &self,
        image_id: u64,
        adjustments: AdjustmentParams,
        buffer: PixelBuffer,
    ) {
        let mut slot = self.slot.write().await;
        *slot = Some(CacheEntry {
            image_id,
            adjustments,
            buffer,
        });
    }

    /// Drop the cached buffer.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }

    /// Whether an entry is currently cached.
    pub async fn is_populated(&self) -> bool {
        self.slot.read().await.is_some()
    }
}
