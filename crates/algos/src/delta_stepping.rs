//! The bucket-based delta-stepping solver ("STOC", §4.3): light-saturation
//! then heavy relaxation, bucket by bucket.

use log::debug;
use sssp_core::arena::SolveState;
use sssp_core::buckets::BucketArray;
use sssp_core::classify::EdgeClassification;
use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::result::ResultInfo;
use sssp_core::stats::BucketStats;

/// Lower bound clamp applied to the default δ so that a graph with
/// vanishingly small weights never produces a degenerate, zero-width
/// bucket.
const MIN_DELTA: f32 = 1e-4;

/// `δ = max(mean_weight / 2, min_positive_weight)`, clamped to
/// [`MIN_DELTA`] (§4.3). Falls back to `1.0` for an edgeless graph, where
/// the choice of δ has no observable effect.
pub fn default_delta(graph: &CsrGraph<'_>) -> f32 {
    let mut sum = 0.0f64;
    let mut count = 0u64;
    let mut min_positive = f32::INFINITY;

    for u in 0..graph.node_count() {
        for edge in graph.out_edges(u) {
            sum += edge.weight as f64;
            count += 1;
            if edge.weight > 0.0 {
                min_positive = min_positive.min(edge.weight);
            }
        }
    }

    if count == 0 {
        return 1.0;
    }

    let mean = (sum / count as f64) as f32;
    let min_positive = if min_positive.is_finite() { min_positive } else { mean };
    (mean / 2.0).max(min_positive).max(MIN_DELTA)
}

/// Outcome of one bucket-based relaxation run: the raw solve state plus the
/// bucket statistics accumulated while producing it.
pub(crate) struct Outcome {
    pub state: SolveState,
    pub stats: BucketStats,
}

/// Bounds under which [`run`] may stop before the bucket array is fully
/// drained, used by the autotune probe (§4.5) and the adaptive controller's
/// probe window (§4.6). `None` in either field means "no bound".
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunLimits {
    pub settled: Option<u32>,
    pub buckets: Option<u32>,
}

/// Runs the two-phase delta-stepping loop to completion (or until a
/// [`RunLimits`] bound trips). Shared by `solve`, `autotune`, and
/// `adaptive`.
pub(crate) fn run(graph: &CsrGraph<'_>, source: u32, delta: f32, limits: RunLimits) -> Outcome {
    let n = graph.node_count();
    let mut state = SolveState::new(n, source);
    let classes = EdgeClassification::build(graph, delta);
    let mut buckets = BucketArray::new();
    buckets.insert(0, source, 0.0);

    let mut cursor = 0u32;
    let mut buckets_visited = 0u32;
    let mut light_pass_repeats = 0u32;

    while let Some(i) = buckets.next_non_empty(cursor) {
        cursor = i;
        buckets_visited += 1;
        if let Some(cap) = limits.buckets {
            if buckets_visited > cap {
                break;
            }
        }

        let mut relaxed_into_bucket = Vec::new();
        let mut pass = 0u32;
        loop {
            let drained = buckets.drain(i);
            if drained.is_empty() {
                break;
            }
            pass += 1;
            if pass > 1 {
                light_pass_repeats += 1;
            }

            for entry in drained {
                if entry.dist != state.dist[entry.vertex as usize] {
                    continue; // stale: a cheaper occurrence already settled this vertex
                }
                relaxed_into_bucket.push(entry.vertex);

                for edge in classes.light_edges(entry.vertex) {
                    if let Some(nd) = state.try_relax(entry.vertex, edge.target, edge.weight) {
                        state.relaxations += 1;
                        state.light_relaxations += 1;
                        let j = BucketArray::index_for(nd, delta, i);
                        buckets.insert(j, edge.target, nd);
                    }
                }
            }
        }

        relaxed_into_bucket.sort_unstable();
        relaxed_into_bucket.dedup();
        state.settled_count += relaxed_into_bucket.len() as u32;

        for &u in &relaxed_into_bucket {
            for edge in classes.heavy_edges(u) {
                if let Some(nd) = state.try_relax(u, edge.target, edge.weight) {
                    state.relaxations += 1;
                    state.heavy_relaxations += 1;
                    let j = BucketArray::index_for(nd, delta, i + 1);
                    buckets.insert(j, edge.target, nd);
                }
            }
        }

        cursor = i + 1;
        if let Some(cap) = limits.settled {
            if state.settled_count >= cap {
                break;
            }
        }
    }

    let total = state.light_relaxations + state.heavy_relaxations;
    let heavy_ratio = state.heavy_relaxations as f32 / (total.max(1)) as f32;

    let stats = BucketStats {
        buckets_visited,
        light_pass_repeats,
        max_bucket_index: buckets.max_bucket_index(),
        restarts: 0,
        delta_x1000: (delta * 1000.0).round() as u32,
        heavy_ratio_x1000: (heavy_ratio * 1000.0).round() as u32,
    };

    Outcome { state, stats }
}

/// Solves single-source shortest paths with delta-stepping at the default
/// δ (§4.3). Distances are numerically equivalent to [`crate::baseline`] up
/// to floating-point reassociation (§8, property 1).
pub fn solve(
    graph: &CsrGraph<'_>,
    source: u32,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    if !graph.contains_vertex(source) {
        return Err(SsspError::OutOfRangeVertex(source));
    }
    solve_with_delta(graph, source, default_delta(graph), dist, pred)
}

/// Same as [`solve`] but with an explicit δ, used by callers (autotune,
/// adaptive, tests) that have already chosen a step size.
pub fn solve_with_delta(
    graph: &CsrGraph<'_>,
    source: u32,
    delta: f32,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    if !graph.contains_vertex(source) {
        return Err(SsspError::OutOfRangeVertex(source));
    }

    let outcome = run(graph, source, delta, RunLimits::default());
    debug!(
        "delta-stepping (delta={delta}) settled {} vertices in {} buckets",
        outcome.state.settled_count, outcome.stats.buckets_visited
    );

    dist.copy_from_slice(&outcome.state.dist);
    pred.copy_from_slice(&outcome.state.pred);
    sssp_core::stats::publish_bucket_stats(outcome.stats);

    Ok(ResultInfo::success(&outcome.state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_diamond_matches_baseline_with_custom_delta() {
        let offsets = [0u32, 2, 3, 4, 4];
        let targets = [1u32, 2, 2, 3];
        let weights = [1.0f32, 4.0, 2.0, 1.0];
        let g = CsrGraph::new(&offsets, &targets, &weights).unwrap();

        let mut dist = [0.0f32; 4];
        let mut pred = [0i32; 4];
        solve_with_delta(&g, 0, 2.0, &mut dist, &mut pred).unwrap();

        assert_eq!(dist, [0.0, 1.0, 3.0, 4.0]);
        assert_eq!(pred, [-1, 0, 1, 2]);
    }

    #[test]
    fn s4_unreachable_vertex() {
        let offsets = [0u32, 1, 1, 1];
        let targets = [1u32];
        let weights = [1.0f32];
        let g = CsrGraph::new(&offsets, &targets, &weights).unwrap();
        let mut dist = [0.0f32; 3];
        let mut pred = [0i32; 3];
        solve(&g, 0, &mut dist, &mut pred).unwrap();
        assert_eq!(dist[2], f32::INFINITY);
        assert_eq!(pred[2], -1);
    }

    #[test]
    fn heavy_skewed_graph_has_heavy_ratio_one() {
        // S6: all weights in [5, 10], delta = 1 => every edge is heavy.
        let offsets = [0u32, 1, 2, 3, 3];
        let targets = [1u32, 2, 3];
        let weights = [5.0f32, 7.0, 9.0];
        let g = CsrGraph::new(&offsets, &targets, &weights).unwrap();

        let mut dist = [0.0f32; 4];
        let mut pred = [0i32; 4];
        solve_with_delta(&g, 0, 1.0, &mut dist, &mut pred).unwrap();

        let stats = sssp_core::stats::bucket_stats();
        assert_eq!(stats.heavy_ratio(), 1.0);

        let mut base_dist = [0.0f32; 4];
        let mut base_pred = [0i32; 4];
        crate::baseline::solve(&g, 0, &mut base_dist, &mut base_pred).unwrap();
        assert_eq!(dist, base_dist);
    }

    #[test]
    fn default_delta_matches_formula() {
        let offsets = [0u32, 2];
        let targets = [1u32, 1];
        let weights = [2.0f32, 4.0];
        let g = CsrGraph::new(&offsets, &targets, &weights).unwrap();
        // mean = 3.0, min_positive = 2.0 -> max(1.5, 2.0) = 2.0
        assert_eq!(default_delta(&g), 2.0);
    }

    #[test]
    fn rejects_out_of_range_source() {
        let offsets = [0u32, 0];
        let g = CsrGraph::new(&offsets, &[], &[]).unwrap();
        let mut dist = [0.0f32; 1];
        let mut pred = [0i32; 1];
        let err = solve(&g, 3, &mut dist, &mut pred).unwrap_err();
        assert_eq!(err, SsspError::OutOfRangeVertex(3));
    }
}
