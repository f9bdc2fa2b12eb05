//! C ABI surface for the sssp engine.
//!
//! Every `sssp_run_*` entry point shares the signature the original ctypes
//! bindings dlopen: `(n, offsets, targets, weights, source, dist, pred,
//! result_info) -> i32`, with `m` (the edge count) derived from
//! `offsets[n]` rather than passed explicitly, matching the CSR invariant
//! in `sssp_core::csr`. Diagnostic getters write into caller-provided
//! `#[repr(C)]` out-structs and read the last-published snapshot from
//! `sssp_core::stats`; they never fail.

use std::slice;

use log::warn;
use sssp_algos::dispatch::SolverVariant;
use sssp_core::config::EngineConfig;
use sssp_core::csr::CsrGraph;
use sssp_core::error::SsspError;
use sssp_core::heap::HeapStats;
use sssp_core::result::ResultInfo;
use sssp_core::stats::BucketStats;

/// Bumped whenever a change here alters observable FFI behavior.
#[no_mangle]
pub extern "C" fn sssp_version() -> u32 {
    sssp_core::stats::ENGINE_VERSION
}

/// Builds a borrowing [`CsrGraph`] over the caller's raw arrays. `offsets`
/// must have `n + 1` entries; `m` (and therefore the length of `targets`
/// and `weights`) is read from `offsets[n]` before validation, exactly as
/// the CSR invariant in §3 requires it to equal.
unsafe fn graph_from_raw<'a>(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
) -> Result<CsrGraph<'a>, SsspError> {
    if offsets.is_null() {
        return Err(SsspError::InvalidShape("offsets pointer is null"));
    }
    let offsets = slice::from_raw_parts(offsets, n as usize + 1);
    let m = *offsets.last().unwrap() as usize;

    if m > 0 && (targets.is_null() || weights.is_null()) {
        return Err(SsspError::InvalidShape("targets/weights pointer is null"));
    }
    let targets = if m == 0 { &[][..] } else { slice::from_raw_parts(targets, m) };
    let weights = if m == 0 { &[][..] } else { slice::from_raw_parts(weights, m) };

    CsrGraph::new(offsets, targets, weights)
}

/// Runs `solve` against the raw FFI arguments, writing `dist`/`pred` and
/// `result_info` on success, and a failure [`ResultInfo`] (zeroed counters,
/// nonzero `error_code`) without touching `dist`/`pred` on error.
unsafe fn run_raw(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
    solve: impl FnOnce(&CsrGraph<'_>, &mut [f32], &mut [i32]) -> Result<ResultInfo, SsspError>,
) -> i32 {
    if dist.is_null() || pred.is_null() || result_info.is_null() {
        if !result_info.is_null() {
            *result_info = ResultInfo::failure(SsspError::InvalidShape("null output pointer").error_code());
        }
        return SsspError::InvalidShape("null output pointer").error_code();
    }

    let outcome = graph_from_raw(n, offsets, targets, weights).and_then(|graph| {
        let dist = slice::from_raw_parts_mut(dist, n as usize);
        let pred = slice::from_raw_parts_mut(pred, n as usize);
        solve(&graph, dist, pred)
    });

    match outcome {
        Ok(info) => {
            *result_info = info;
            0
        }
        Err(err) => {
            warn!("sssp solve failed: {err}");
            *result_info = ResultInfo::failure(err.error_code());
            err.error_code()
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn sssp_run_baseline(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::baseline::solve(g, source, d, p)
    })
}

#[no_mangle]
pub unsafe extern "C" fn sssp_run_spec_clean(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::spec_clean::solve(g, source, d, p)
    })
}

#[no_mangle]
pub unsafe extern "C" fn sssp_run_stoc(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::delta_stepping::solve(g, source, d, p)
    })
}

#[no_mangle]
pub unsafe extern "C" fn sssp_run_stoc_autotune(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    let config = EngineConfig::from_env();
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::autotune::solve(g, source, &config, d, p)
    })
}

#[no_mangle]
pub unsafe extern "C" fn sssp_run_stoc_auto_adapt(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    let config = EngineConfig::from_env();
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::adaptive::solve(g, source, &config, d, p)
    })
}

/// Not present in the original ctypes bindings; added here because
/// `SolverVariant::Khop` is a named solve entry point like the other five
/// and deserves the same C ABI surface.
#[no_mangle]
pub unsafe extern "C" fn sssp_run_khop(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    let config = EngineConfig::from_env();
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::khop::solve(g, source, config.khop_k, d, p)
    })
}

/// Routes to a solver by [`SolverVariant`] rather than a fixed symbol,
/// matching SPEC_FULL's single-dispatch design note. Not part of the
/// original ctypes surface and not `#[no_mangle]` (`SolverVariant` isn't
/// `#[repr(C)]`) — for Rust callers that want to pick a variant at runtime
/// without six separate symbols, not for crossing the C ABI itself.
pub unsafe fn sssp_run_dispatch(
    variant: SolverVariant,
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    dist: *mut f32,
    pred: *mut i32,
    result_info: *mut ResultInfo,
) -> i32 {
    let config = EngineConfig::from_env();
    run_raw(n, offsets, targets, weights, source, dist, pred, result_info, |g, d, p| {
        sssp_algos::dispatch(variant, g, source, &config, d, p)
    })
}

#[no_mangle]
pub extern "C" fn sssp_get_bucket_stats(out: *mut BucketStats) {
    if out.is_null() {
        return;
    }
    unsafe { *out = sssp_core::stats::bucket_stats() };
}

#[no_mangle]
pub extern "C" fn sssp_get_last_delta() -> f32 {
    sssp_core::stats::bucket_stats().delta()
}

#[no_mangle]
pub extern "C" fn sssp_get_baseline_heap_stats(out: *mut HeapStats) {
    if out.is_null() {
        return;
    }
    unsafe { *out = sssp_core::stats::baseline_heap_stats() };
}

#[no_mangle]
pub extern "C" fn sssp_get_spec_heap_stats(out: *mut HeapStats) {
    if out.is_null() {
        return;
    }
    unsafe { *out = sssp_core::stats::spec_heap_stats() };
}
