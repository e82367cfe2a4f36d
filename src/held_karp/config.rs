//! Held-Karp capacity and budget configuration.

/// Configuration for the Held-Karp runner.
///
/// # Examples
///
/// ```
/// use tsp_exact::held_karp::HkConfig;
///
/// let config = HkConfig::default().with_max_locations(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HkConfig {
    /// Largest instance the solver will accept. The dp and parent tables
    /// take `n · 2^n` entries (12 bytes each); the default of 20 keeps
    /// them around 250 MB. Instances above the bound fail fast with
    /// `CapacityExceeded` before anything is allocated. The bound itself
    /// is capped at 22 (about 1.1 GB of tables): past that the allocation
    /// would abort the process instead of failing fast.
    pub max_locations: usize,

    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,
}

impl Default for HkConfig {
    fn default() -> Self {
        Self {
            max_locations: 20,
            time_limit_ms: 0,
        }
    }
}

impl HkConfig {
    pub fn with_max_locations(mut self, n: usize) -> Self {
        self.max_locations = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_locations == 0 {
            return Err("max_locations must be at least 1".into());
        }
        if self.max_locations > 22 {
            return Err(format!(
                "max_locations {} needs a multi-gigabyte table (limit 22)",
                self.max_locations
            ));
        }
        Ok(())
    }
}
