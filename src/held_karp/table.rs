//! Dense (mask, last)-indexed dynamic-programming table.

/// Flat storage for `dp[mask][last]` and `parent[mask][last]`.
///
/// Both arrays have `n · 2^n` entries indexed by `mask * n + last`; a
/// dense layout is required for the stated complexity bounds, so this is
/// deliberately not a sparse map. `dp` entries default to `+∞`, parents to
/// [`DpTable::NO_PARENT`].
pub(crate) struct DpTable {
    n: usize,
    dp: Vec<f64>,
    parent: Vec<u32>,
}

impl DpTable {
    pub(crate) const NO_PARENT: u32 = u32::MAX;

    /// Allocates the table, or `None` if `n · 2^n` does not fit in
    /// address arithmetic.
    pub(crate) fn new(n: usize) -> Option<Self> {
        let states = 1usize.checked_shl(n as u32)?.checked_mul(n)?;
        Some(Self {
            n,
            dp: vec![f64::INFINITY; states],
            parent: vec![Self::NO_PARENT; states],
        })
    }

    #[inline]
    fn idx(&self, mask: usize, last: usize) -> usize {
        mask * self.n + last
    }

    #[inline]
    pub(crate) fn cost(&self, mask: usize, last: usize) -> f64 {
        self.dp[self.idx(mask, last)]
    }

    #[inline]
    pub(crate) fn parent(&self, mask: usize, last: usize) -> u32 {
        self.parent[self.idx(mask, last)]
    }

    #[inline]
    pub(crate) fn set(&mut self, mask: usize, last: usize, cost: f64, parent: u32) {
        let i = self.idx(mask, last);
        self.dp[i] = cost;
        self.parent[i] = parent;
    }
}
