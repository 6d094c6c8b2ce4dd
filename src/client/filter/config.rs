use std::time::Duration;

/// Default quiet period before a text edit is applied (milliseconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 350;

/// Configuration for the filter state controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Quiet period after the last keystroke before the search text or the affiliation
    /// search is applied (milliseconds).
    pub debounce_ms: u64,
}

impl FilterConfig {
    /// Get debounce quiet period as Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}
