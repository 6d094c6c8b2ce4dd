use std::time::Duration;

/// Default simulated latency of `list_affiliations` (milliseconds)
pub const DEFAULT_AFFILIATION_LATENCY_MS: u64 = 100;
/// Default simulated latency of `list_listings` (milliseconds)
pub const DEFAULT_LISTING_LATENCY_MS: u64 = 300;

/// Configuration for the catalog service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Simulated latency before `list_affiliations` resolves (milliseconds).
    pub affiliation_latency_ms: u64,

    /// Simulated latency before `list_listings` resolves (milliseconds).
    ///
    /// Stands in for the round trip of a real backend query so the client's debounce and
    /// stale response handling are exercised.
    pub listing_latency_ms: u64,
}

impl CatalogConfig {
    /// Configuration without any simulated latency
    pub fn immediate() -> Self {
        Self {
            affiliation_latency_ms: 0,
            listing_latency_ms: 0,
        }
    }

    /// Get affiliation latency as Duration
    pub fn affiliation_latency(&self) -> Duration {
        Duration::from_millis(self.affiliation_latency_ms)
    }

    /// Get listing latency as Duration
    pub fn listing_latency(&self) -> Duration {
        Duration::from_millis(self.listing_latency_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            affiliation_latency_ms: DEFAULT_AFFILIATION_LATENCY_MS,
            listing_latency_ms: DEFAULT_LISTING_LATENCY_MS,
        }
    }
}
