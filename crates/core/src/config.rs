//! Engine configuration (§6): recognized options, read from environment
//! variables with documented defaults when unset or unparsable.

const DEFAULT_AUTOTUNE_SET: &[f32] = &[0.5, 1.0, 2.0, 4.0];
const DEFAULT_AUTOTUNE_LIMIT: u32 = 20_000;
const DEFAULT_HEAVY_BAND_LO: f32 = 0.05;
const DEFAULT_HEAVY_BAND_HI: f32 = 0.25;
const DEFAULT_RESTART_CAP: u32 = 2;
const DEFAULT_KHOP_K: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Delta multipliers tried by the autotune wrapper (§4.5).
    pub autotune_set: Vec<f32>,
    /// Settled-vertex cap on an autotune probe (§4.5).
    pub autotune_limit: u32,
    /// Lower bound of the adaptive controller's healthy heavy-ratio band
    /// (§4.3, §4.6).
    pub heavy_band_lo: f32,
    /// Upper bound of the adaptive controller's healthy heavy-ratio band.
    pub heavy_band_hi: f32,
    /// Maximum number of adaptive restarts (§4.6).
    pub restart_cap: u32,
    /// Hop count for the k-hop batch relaxer (§4.4).
    pub khop_k: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            autotune_set: DEFAULT_AUTOTUNE_SET.to_vec(),
            autotune_limit: DEFAULT_AUTOTUNE_LIMIT,
            heavy_band_lo: DEFAULT_HEAVY_BAND_LO,
            heavy_band_hi: DEFAULT_HEAVY_BAND_HI,
            restart_cap: DEFAULT_RESTART_CAP,
            khop_k: DEFAULT_KHOP_K,
        }
    }
}

impl EngineConfig {
    /// Reads the recognized `SSSP_*` environment variables, falling back to
    /// the documented defaults for anything unset or unparsable. Never
    /// fails: a malformed value is silently ignored rather than aborting
    /// the solve.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("SSSP_AUTOTUNE_SET") {
            let parsed: Vec<f32> = raw.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if !parsed.is_empty() {
                config.autotune_set = parsed;
            }
        }
        if let Some(v) = env_parsed("SSSP_AUTOTUNE_LIMIT") {
            config.autotune_limit = v;
        }
        if let Some(v) = env_parsed("SSSP_HEAVY_BAND_LO") {
            config.heavy_band_lo = v;
        }
        if let Some(v) = env_parsed("SSSP_HEAVY_BAND_HI") {
            config.heavy_band_hi = v;
        }
        if let Some(v) = env_parsed("SSSP_RESTART_CAP") {
            config.restart_cap = v;
        }
        if let Some(v) = env_parsed("SSSP_KHOP_K") {
            config.khop_k = v;
        }

        config
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
