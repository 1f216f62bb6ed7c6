//! Configuration for the backtracking searches.
//!
//! The deciders are exponential by construction. A [`SearchConfig`] lets a
//! caller bound a single call by the number of search steps and by wall
//! clock time. A bound never changes a verdict; it only turns a search that
//! would run past it into an error.
//!
//! ```ignore
//! use std::time::Duration;
//! use npc_common::SearchConfig;
//!
//! let cfg = SearchConfig::builder()
//!     .step_limit(1_000_000)
//!     .time_limit(Duration::from_secs(5))
//!     .build();
//! ```

use std::time::Duration;

/// Bounds applied to a single search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of search steps, or `None` for no limit.
    pub step_limit: Option<u64>,
    /// Maximum wall-clock time from the start of the call.
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// No step or time bound.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            step_limit: None,
            time_limit: None,
        }
    }

    /// True when neither bound is set.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.step_limit.is_none() && self.time_limit.is_none()
    }
}

/// Builder for [`SearchConfig`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    step_limit: Option<u64>,
    time_limit: Option<Duration>,
}

impl ConfigBuilder {
    /// Bound the number of search steps.
    #[must_use]
    pub const fn step_limit(mut self, steps: u64) -> Self {
        self.step_limit = Some(steps);
        self
    }

    /// Bound the wall-clock time.
    #[must_use]
    pub const fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Set or clear the step bound.
    #[must_use]
    pub const fn maybe_step_limit(mut self, steps: Option<u64>) -> Self {
        self.step_limit = steps;
        self
    }

    /// Set or clear the time bound.
    #[must_use]
    pub const fn maybe_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    /// Finish.
    #[must_use]
    pub const fn build(self) -> SearchConfig {
        SearchConfig {
            step_limit: self.step_limit,
            time_limit: self.time_limit,
        }
    }
}
