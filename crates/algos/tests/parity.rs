//! Randomized parity tests across solver variants (§8 properties 1 and 2),
//! using the same uniform-random-weight graph generator shape as the
//! original Python test harness (`test_heavy_ratio.py`,
//! `test_khop_correctness.py`): weights in `[1, 10)`, a configurable
//! density, several seeds.

use rand::prelude::*;
use sssp_core::config::EngineConfig;
use sssp_core::csr::CsrGraph;

fn random_csr(n: u32, density: f32, seed: u64) -> (Vec<u32>, Vec<u32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut offsets = Vec::with_capacity(n as usize + 1);
    let mut targets = Vec::new();
    let mut weights = Vec::new();

    offsets.push(0u32);
    for u in 0..n {
        let degree = (density * rng.gen_range(0.3..1.7)).round().max(0.0) as u32;
        for _ in 0..degree {
            let v = rng.gen_range(0..n);
            if v == u {
                continue;
            }
            targets.push(v);
            weights.push(rng.gen_range(1.0..10.0));
        }
        offsets.push(targets.len() as u32);
    }

    (offsets, targets, weights)
}

/// Property 1 (correctness vs. baseline) and property 2 (predecessor
/// consistency), run across every non-baseline variant on several random
/// graphs and seeds.
#[test]
fn every_variant_agrees_with_baseline_across_seeds() {
    const EPS: f32 = 1e-2;
    let config = EngineConfig::default();

    for seed in 0..5u64 {
        let n = 200u32;
        let (offsets, targets, weights) = random_csr(n, 2.0, seed);
        let graph = CsrGraph::new(&offsets, &targets, &weights).unwrap();

        let mut base_dist = vec![0.0f32; n as usize];
        let mut base_pred = vec![0i32; n as usize];
        sssp_algos::baseline::solve(&graph, 0, &mut base_dist, &mut base_pred).unwrap();

        for variant_name in ["spec_clean", "stoc", "autotune", "adaptive", "khop"] {
            let mut dist = vec![0.0f32; n as usize];
            let mut pred = vec![0i32; n as usize];

            match variant_name {
                "spec_clean" => sssp_algos::spec_clean::solve(&graph, 0, &mut dist, &mut pred).unwrap(),
                "stoc" => sssp_algos::delta_stepping::solve(&graph, 0, &mut dist, &mut pred).unwrap(),
                "autotune" => sssp_algos::autotune::solve(&graph, 0, &config, &mut dist, &mut pred).unwrap(),
                "adaptive" => sssp_algos::adaptive::solve(&graph, 0, &config, &mut dist, &mut pred).unwrap(),
                "khop" => sssp_algos::khop::solve(&graph, 0, config.khop_k, &mut dist, &mut pred).unwrap(),
                _ => unreachable!(),
            };

            for v in 0..n as usize {
                assert!(
                    (dist[v].is_infinite() && base_dist[v].is_infinite())
                        || (dist[v] - base_dist[v]).abs() <= EPS,
                    "seed {seed} variant {variant_name} vertex {v}: {} vs baseline {}",
                    dist[v],
                    base_dist[v]
                );

                if dist[v].is_finite() && v != 0 {
                    let p = pred[v];
                    assert!(p >= 0, "seed {seed} variant {variant_name} vertex {v} has no predecessor");
                    let edge = graph
                        .out_edges(p as u32)
                        .find(|e| e.target == v as u32)
                        .unwrap_or_else(|| panic!("predecessor {p} has no edge to {v}"));
                    assert!((dist[p as usize] + edge.weight - dist[v]).abs() <= EPS);
                }
            }
        }
    }
}

/// Property 7: the furthest bucket touched times δ must cover the largest
/// finite distance observed.
#[test]
fn bucket_invariant_holds() {
    let (offsets, targets, weights) = random_csr(300, 2.5, 7);
    let graph = CsrGraph::new(&offsets, &targets, &weights).unwrap();

    let mut dist = vec![0.0f32; 300];
    let mut pred = vec![0i32; 300];
    sssp_algos::delta_stepping::solve(&graph, 0, &mut dist, &mut pred).unwrap();

    let stats = sssp_core::stats::bucket_stats();
    let max_finite = dist.iter().copied().filter(|d| d.is_finite()).fold(0.0f32, f32::max);
    assert!(stats.max_bucket_index as f32 * stats.delta() >= max_finite - 1e-3);
}
