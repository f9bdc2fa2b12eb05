//! Solver implementations: one module per SSSP variant, plus a
//! [`dispatch`] entry point naming all six.

pub mod adaptive;
pub mod autotune;
pub mod baseline;
pub mod delta_stepping;
pub mod dispatch;
pub mod khop;
pub mod spec_clean;

pub use dispatch::{dispatch, SolverVariant};
