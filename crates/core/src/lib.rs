//! Substrate shared by every SSSP solver: a borrowing CSR graph view, the
//! per-solve distance/predecessor arena, an instrumented binary heap, the
//! delta-stepping bucket array, edge light/heavy classification, solver
//! configuration, the process-wide diagnostic snapshots, and the error
//! taxonomy.
//!
//! This crate holds no solver logic itself — that lives in `sssp-algos` — it
//! only provides the data structures every solver is built from.

pub mod arena;
pub mod buckets;
pub mod classify;
pub mod config;
pub mod csr;
pub mod error;
pub mod heap;
pub mod prelude;
pub mod result;
pub mod stats;

pub use crate::csr::CsrGraph;
pub use crate::error::SsspError;
pub use crate::result::ResultInfo;
