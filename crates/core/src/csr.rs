use crate::error::SsspError;

/// The target of an edge and its weight, stored adjacent in the CSR target
/// array so that iterating a vertex's out-edges touches one contiguous
/// slice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Target {
    pub target: u32,
    pub weight: f32,
}

impl Target {
    pub fn new(target: u32, weight: f32) -> Self {
        Self { target, weight }
    }
}

/// A borrowing view over a Compressed-Sparse-Row graph.
///
/// `offsets` has `n + 1` entries, `targets`/`weights` have `m` entries each.
/// The out-edges of vertex `u` are `targets[offsets[u]..offsets[u+1]]` paired
/// with `weights[offsets[u]..offsets[u+1]]`. The view performs no
/// allocation and borrows its backing arrays for its entire lifetime.
#[derive(Clone, Copy, Debug)]
pub struct CsrGraph<'a> {
    offsets: &'a [u32],
    targets: &'a [u32],
    weights: &'a [f32],
}

impl<'a> CsrGraph<'a> {
    /// Validates and wraps the three CSR arrays. Performs the §7
    /// invalid-shape and out-of-range-vertex checks eagerly so that every
    /// solver can assume a well-formed graph once construction succeeds.
    pub fn new(offsets: &'a [u32], targets: &'a [u32], weights: &'a [f32]) -> Result<Self, SsspError> {
        if offsets.is_empty() {
            return Err(SsspError::InvalidShape("offsets must have at least one entry"));
        }
        if targets.len() != weights.len() {
            return Err(SsspError::InvalidShape("targets and weights length mismatch"));
        }
        if offsets[0] != 0 {
            return Err(SsspError::InvalidShape("offsets[0] must be 0"));
        }
        let m = targets.len() as u32;
        if *offsets.last().unwrap() != m {
            return Err(SsspError::InvalidShape("offsets[n] must equal m"));
        }
        if !offsets.windows(2).all(|w| w[0] <= w[1]) {
            return Err(SsspError::InvalidShape("offsets must be non-decreasing"));
        }

        let n = offsets.len() as u32 - 1;
        for &t in targets {
            if t >= n {
                return Err(SsspError::OutOfRangeVertex(t));
            }
        }
        for &w in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(SsspError::InvalidWeight(w));
            }
        }

        Ok(Self { offsets, targets, weights })
    }

    #[inline]
    pub fn node_count(&self) -> u32 {
        self.offsets.len() as u32 - 1
    }

    #[inline]
    pub fn edge_count(&self) -> u32 {
        self.targets.len() as u32
    }

    /// Out-edges of `u` as `(target, weight)` pairs, with no allocation.
    #[inline]
    pub fn out_edges(&self, u: u32) -> impl Iterator<Item = Target> + '_ {
        let from = self.offsets[u as usize] as usize;
        let to = self.offsets[u as usize + 1] as usize;
        self.targets[from..to]
            .iter()
            .zip(&self.weights[from..to])
            .map(|(&target, &weight)| Target::new(target, weight))
    }

    #[inline]
    pub fn out_degree(&self, u: u32) -> u32 {
        self.offsets[u as usize + 1] - self.offsets[u as usize]
    }

    pub fn contains_vertex(&self, v: u32) -> bool {
        v < self.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_offsets_head() {
        let offsets = [1u32, 1];
        let err = CsrGraph::new(&offsets, &[], &[]).unwrap_err();
        assert_eq!(err, SsspError::InvalidShape("offsets[0] must be 0"));
    }

    #[test]
    fn rejects_mismatched_tail() {
        let offsets = [0u32, 2];
        let targets = [0u32];
        let weights = [1.0f32];
        let err = CsrGraph::new(&offsets, &targets, &weights).unwrap_err();
        assert_eq!(err, SsspError::InvalidShape("offsets[n] must equal m"));
    }

    #[test]
    fn rejects_non_monotonic_offsets() {
        let offsets = [0u32, 2, 1, 3];
        let targets = [0u32, 0, 0];
        let weights = [1.0f32, 1.0, 1.0];
        let err = CsrGraph::new(&offsets, &targets, &weights).unwrap_err();
        assert_eq!(err, SsspError::InvalidShape("offsets must be non-decreasing"));
    }

    #[test]
    fn rejects_out_of_range_target() {
        let offsets = [0u32, 1];
        let targets = [5u32];
        let weights = [1.0f32];
        let err = CsrGraph::new(&offsets, &targets, &weights).unwrap_err();
        assert_eq!(err, SsspError::OutOfRangeVertex(5));
    }

    #[test]
    fn rejects_negative_weight() {
        let offsets = [0u32, 1];
        let targets = [0u32];
        let weights = [-1.0f32];
        let err = CsrGraph::new(&offsets, &targets, &weights).unwrap_err();
        assert_eq!(err, SsspError::InvalidWeight(-1.0));
    }

    #[test]
    fn iterates_out_edges() {
        let offsets = [0u32, 2, 2];
        let targets = [1u32, 1];
        let weights = [1.0f32, 2.0];
        let g = CsrGraph::new(&offsets, &targets, &weights).unwrap();
        let edges: Vec<_> = g.out_edges(0).collect();
        assert_eq!(edges, vec![Target::new(1, 1.0), Target::new(1, 2.0)]);
        assert_eq!(g.out_degree(1), 0);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2);
    }
}
