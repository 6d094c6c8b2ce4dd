//! Listing query parameters.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which affiliation listings must belong to.
///
/// The string sentinel `"all"` only exists at the HTTP boundary; internally "no filter" is
/// the [`AffiliationFilter::All`] variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AffiliationFilter {
    #[default]
    All,
    ByAffiliation(String),
}

impl AffiliationFilter {
    /// Sentinel used at the HTTP boundary to mean "no affiliation filter"
    pub const ALL: &'static str = "all";

    /// Parses the `affiliationId` parameter; absent, blank or `"all"` means no filter.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => AffiliationFilter::All,
            Some(id) if id == Self::ALL => AffiliationFilter::All,
            Some(id) => AffiliationFilter::ByAffiliation(id.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            AffiliationFilter::All => Self::ALL,
            AffiliationFilter::ByAffiliation(id) => id,
        }
    }

    pub fn matches(&self, affiliation_id: &str) -> bool {
        match self {
            AffiliationFilter::All => true,
            AffiliationFilter::ByAffiliation(id) => id == affiliation_id,
        }
    }
}

/// Ordering applied to listing results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Recommended listings first, then by descending rating
    #[default]
    Default,
    /// Ascending by minimum price
    PriceAsc,
    /// Descending by minimum price
    PriceDesc,
    /// Descending by rating
    RatingDesc,
}

impl SortOrder {
    /// Parses a `sortBy` parameter, falling back to [`SortOrder::Default`] for unknown values.
    pub fn from_param(param: &str) -> Self {
        match param.trim() {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            "rating-desc" => SortOrder::RatingDesc,
            "default" | "" => SortOrder::Default,
            other => {
                debug!("Unknown sort order {:?}, using default ordering", other);
                SortOrder::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::RatingDesc => "rating-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined parameters of one listing query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub affiliation: AffiliationFilter,
    /// Free-text search; empty disables the text filter
    pub text: String,
    pub sort: SortOrder,
}
