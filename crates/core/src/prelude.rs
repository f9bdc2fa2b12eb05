pub use crate::arena::SolveState;
pub use crate::buckets::BucketArray;
pub use crate::classify::EdgeClassification;
pub use crate::config::EngineConfig;
pub use crate::csr::{CsrGraph, Target};
pub use crate::error::SsspError;
pub use crate::heap::{HeapStats, IndexedMinHeap};
pub use crate::result::ResultInfo;
pub use crate::stats::BucketStats;
