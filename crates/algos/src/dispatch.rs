//! Names the six solver entry points and routes a [`SolverVariant`] to its
//! implementation, so `sssp-ffi` (and anything else choosing a solver by
//! runtime value rather than a static `sssp_algos::baseline::solve` import)
//! has a single dispatch point.

use sssp_core::config::EngineConfig;
use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::result::ResultInfo;

/// One of the six solve variants exposed across the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverVariant {
    Baseline,
    SpecClean,
    Stoc,
    StocAutotune,
    StocAutoAdapt,
    Khop,
}

/// Routes to the matching solver module. `config` is read by the
/// `StocAutotune`/`StocAutoAdapt`/`Khop` variants and ignored otherwise.
pub fn dispatch(
    variant: SolverVariant,
    graph: &CsrGraph<'_>,
    source: u32,
    config: &EngineConfig,
    dist: &mut [f32],
    pred: &mut [i32],
) -> Result<ResultInfo, SsspError> {
    match variant {
        SolverVariant::Baseline => crate::baseline::solve(graph, source, dist, pred),
        SolverVariant::SpecClean => crate::spec_clean::solve(graph, source, dist, pred),
        SolverVariant::Stoc => crate::delta_stepping::solve(graph, source, dist, pred),
        SolverVariant::StocAutotune => crate::autotune::solve(graph, source, config, dist, pred),
        SolverVariant::StocAutoAdapt => crate::adaptive::solve(graph, source, config, dist, pred),
        SolverVariant::Khop => crate::khop::solve(graph, source, config.khop_k, dist, pred),
    }
}
