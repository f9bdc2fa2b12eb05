//! Adaptive controller (§4.6): runs delta-stepping in bucket-limited probe
//! windows, watches the observed heavy-edge ratio, and restarts at a
//! rescaled δ when the ratio drifts outside the configured healthy band.

use log::{debug, info};
use sssp_core::config::EngineConfig;
use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::result::ResultInfo;

use crate::delta_stepping::{default_delta, run, RunLimits};

/// Bucket window probed before the heavy ratio is checked. Chosen as a
/// small fixed window rather than a fraction of the graph so the check
/// fires early even on large graphs.
const PROBE_BUCKETS: u32 = 4;

/// Runs a bucket-limited probe at `delta`, checks the heavy ratio against
/// `config`'s healthy band, and restarts at a rescaled δ (half the probe's
/// δ if too heavy, double if too light) up to `config.restart_cap` times,
/// then solves to completion at the last δ tried (§4.6).
pub fn solve(
    graph: &CsrGraph<'_>,
    source: u32,
    config: &EngineConfig,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    if !graph.contains_vertex(source) {
        return Err(SsspError::OutOfRangeVertex(source));
    }

    let mut delta = default_delta(graph);
    let mut restarts = 0u32;

    loop {
        let probe = run(graph, source, delta, RunLimits { settled: None, buckets: Some(PROBE_BUCKETS) });
        let ratio = probe.stats.heavy_ratio();
        debug!("adaptive probe delta={delta} heavy_ratio={ratio} restarts={restarts}");

        let in_band = ratio >= config.heavy_band_lo && ratio <= config.heavy_band_hi;
        if in_band || restarts >= config.restart_cap {
            if !in_band {
                info!("adaptive exhausted restart budget at delta={delta}, heavy_ratio={ratio}");
            }
            break;
        }

        delta = if ratio > config.heavy_band_hi { delta * 2.0 } else { delta / 2.0 };
        restarts += 1;
    }

    let mut outcome = run(graph, source, delta, RunLimits::default());
    outcome.stats.restarts = restarts;

    dist.copy_from_slice(&outcome.state.dist);
    pred.copy_from_slice(&outcome.state.pred);
    sssp_core::stats::publish_bucket_stats(outcome.stats);

    Ok(ResultInfo::success(&outcome.state))
}
