//! `spec_clean`: the same labeling algorithm as [`crate::baseline`], run
//! through an independently-instrumented priority queue.
//!
//! This variant exists because the original FFI surface exposes
//! `sssp_run_spec_clean` with its own heap-stats getter, distinct from
//! `sssp_run_baseline`'s. It is not a second algorithm — see SPEC_FULL.md
//! §1 and §10 for how this resolves the source's "two delta-stepping
//! variants" open question.

use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::result::ResultInfo;

pub fn solve(
    graph: &CsrGraph<'_>,
    source: u32,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    if !graph.contains_vertex(source) {
        return Err(SsspError::OutOfRangeVertex(source));
    }

    let (state, heap_stats) = crate::baseline::run_labeling(graph, source);

    dist.copy_from_slice(&state.dist);
    pred.copy_from_slice(&state.pred);
    sssp_core::stats::publish_spec_heap_stats(heap_stats);

    Ok(ResultInfo::success(&state))
}
