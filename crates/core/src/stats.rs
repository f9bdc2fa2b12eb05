//! Process-wide diagnostic snapshots (§6).
//!
//! Each stat kind lives behind its own `parking_lot::Mutex`-guarded static,
//! published by a solver on successful completion and left untouched on
//! failure (§7: diagnostics reflect the last successful solve). Readers
//! (the FFI getters) read the latest published value; nothing here blocks
//! on a solve in progress, since solves are serialized by the caller (§5).

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::heap::HeapStats;

/// Bumped whenever the engine's observable behavior changes.
pub const ENGINE_VERSION: u32 = 1;

/// Bucket-array statistics from the most recent delta-stepping family solve
/// (`stoc`, `autotune`, `adaptive`, `khop`). Real-valued fields are
/// transmitted as fixed-point x1000 integers, matching the C ABI.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct BucketStats {
    pub buckets_visited: u32,
    pub light_pass_repeats: u32,
    pub max_bucket_index: u32,
    pub restarts: u32,
    pub delta_x1000: u32,
    pub heavy_ratio_x1000: u32,
}

impl BucketStats {
    pub fn heavy_ratio(&self) -> f32 {
        self.heavy_ratio_x1000 as f32 / 1000.0
    }

    pub fn delta(&self) -> f32 {
        self.delta_x1000 as f32 / 1000.0
    }
}

static BUCKET_STATS: Lazy<Mutex<BucketStats>> = Lazy::new(|| Mutex::new(BucketStats::default()));
static BASELINE_HEAP_STATS: Lazy<Mutex<HeapStats>> = Lazy::new(|| Mutex::new(HeapStats::default()));
static SPEC_HEAP_STATS: Lazy<Mutex<HeapStats>> = Lazy::new(|| Mutex::new(HeapStats::default()));

pub fn publish_bucket_stats(stats: BucketStats) {
    *BUCKET_STATS.lock() = stats;
}

pub fn bucket_stats() -> BucketStats {
    *BUCKET_STATS.lock()
}

pub fn publish_baseline_heap_stats(stats: HeapStats) {
    *BASELINE_HEAP_STATS.lock() = stats;
}

pub fn baseline_heap_stats() -> HeapStats {
    *BASELINE_HEAP_STATS.lock()
}

pub fn publish_spec_heap_stats(stats: HeapStats) {
    *SPEC_HEAP_STATS.lock() = stats;
}

pub fn spec_heap_stats() -> HeapStats {
    *SPEC_HEAP_STATS.lock()
}
