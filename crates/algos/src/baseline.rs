//! The textbook Dijkstra solver (§4.2): the semantic reference every other
//! variant is checked against.

use log::debug;
use sssp_core::arena::SolveState;
use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::heap::{HeapStats, IndexedMinHeap};
use sssp_core::result::ResultInfo;

/// Runs the labeling algorithm shared by [`crate::baseline`] and
/// [`crate::spec_clean`]: both use the same heap-driven relaxation loop,
/// each with its own [`IndexedMinHeap`] so their instrumentation is tracked
/// independently (§1 of the expanded spec).
pub(crate) fn run_labeling(graph: &CsrGraph<'_>, source: u32) -> (SolveState, HeapStats) {
    let n = graph.node_count();
    let mut state = SolveState::new(n, source);
    let mut heap = IndexedMinHeap::new();
    heap.push(0.0, source);

    while let Some((d, u)) = heap.pop_min() {
        if d > state.dist[u as usize] {
            continue; // stale entry, superseded by a cheaper push
        }
        state.settled_count += 1;
        for edge in graph.out_edges(u) {
            if let Some(nd) = state.try_relax(u, edge.target, edge.weight) {
                heap.push(nd, edge.target);
                state.relaxations += 1;
            }
        }
    }

    (state, heap.stats())
}

/// Solves single-source shortest paths with a priority-queue Dijkstra.
/// Writes `dist`/`pred` into the caller's buffers and publishes baseline
/// heap statistics on success (§6, §7).
pub fn solve(
    graph: &CsrGraph<'_>,
    source: u32,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    if !graph.contains_vertex(source) {
        return Err(SsspError::OutOfRangeVertex(source));
    }

    let (state, heap_stats) = run_labeling(graph, source);
    debug!(
        "baseline settled {} of {} vertices, {} relaxations",
        state.settled_count,
        graph.node_count(),
        state.relaxations
    );

    dist.copy_from_slice(&state.dist);
    pred.copy_from_slice(&state.pred);
    sssp_core::stats::publish_baseline_heap_stats(heap_stats);

    Ok(ResultInfo::success(&state))
}
