//! Branch-and-bound budgets and switches.

/// Configuration for the branch-and-bound runner.
///
/// The bound formula itself is fixed; configuration covers only search
/// budgets and the pruning switch.
///
/// # Examples
///
/// ```
/// use tsp_exact::branch_bound::BbConfig;
///
/// let config = BbConfig::default()
///     .with_max_nodes(1_000_000)
///     .with_time_limit_ms(5_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BbConfig {
    /// Maximum number of expanded search nodes (hard budget). 0 = no limit.
    ///
    /// When the budget is hit, the best tour found so far is returned as a
    /// best-effort (not proven optimal) result.
    pub max_nodes: u64,

    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,

    /// Whether to prune branches whose lower bound cannot beat the current
    /// best. Pruning never changes the reported optimum, only the amount
    /// of work; disabling it turns the search into exhaustive enumeration,
    /// which is how the bound's soundness is verified.
    pub pruning: bool,
}

impl Default for BbConfig {
    fn default() -> Self {
        Self {
            max_nodes: 0,
            time_limit_ms: 0,
            pruning: true,
        }
    }
}

impl BbConfig {
    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        // 0 means unlimited for both budgets, so every field combination
        // is currently meaningful.
        Ok(())
    }
}
