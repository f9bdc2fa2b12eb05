//! [`ResultInfo`] mirrors the `result_info` struct across the C ABI (§6):
//! field order and width must stay in lockstep with `sssp-ffi`'s
//! `#[repr(C)]` re-export and the Python `ctypes.Structure` it is read
//! through.

use crate::arena::SolveState;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ResultInfo {
    pub relaxations: u64,
    pub light_relaxations: u64,
    pub heavy_relaxations: u64,
    pub settled: u32,
    pub error_code: i32,
}

impl ResultInfo {
    pub fn success(state: &SolveState) -> Self {
        Self {
            relaxations: state.relaxations,
            light_relaxations: state.light_relaxations,
            heavy_relaxations: state.heavy_relaxations,
            settled: state.settled_count,
            error_code: 0,
        }
    }

    pub fn failure(error_code: i32) -> Self {
        Self { error_code, ..Default::default() }
    }
}
