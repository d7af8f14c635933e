//! Per-request governor for upstream content calls.
//!
//! An [`ApiBudget`] is created at the start of every
//! repository-level attempt and passed by `&mut` through the sampler into the
//! gateway. Nothing about it is global: two concurrent selections each own
//! their budget.

/// Counter of network calls made against the remote content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBudget {
    max_calls: u32,
    calls_made: u32,
}

impl ApiBudget {
    #[must_use]
    pub const fn new(max_calls: u32) -> Self {
        Self {
            max_calls,
            calls_made: 0,
        }
    }

    /// Whether another network call is still allowed.
    #[must_use]
    pub const fn has_remaining(&self) -> bool {
        self.calls_made < self.max_calls
    }

    /// Count one network call. Called before the request is sent, so failed
    /// calls are counted too.
    pub const fn record_call(&mut self) {
        self.calls_made = self.calls_made.saturating_add(1);
    }

    #[must_use]
    pub const fn calls_made(&self) -> u32 {
        self.calls_made
    }

    #[must_use]
    pub const fn max_calls(&self) -> u32 {
        self.max_calls
    }
}
