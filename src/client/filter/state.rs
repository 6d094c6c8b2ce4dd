use entity::prelude::*;

use crate::model::query::{AffiliationFilter, ListingQuery, SortOrder};

/// The four user-controlled filter fields, exactly as last edited.
///
/// Text fields hold the raw input; the values actually applied lag behind by the debounce
/// period.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub affiliation: AffiliationFilter,
    pub query: String,
    pub sort: SortOrder,
    pub affiliation_search: String,
}

/// Everything a view needs to render the listing explorer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSnapshot {
    /// Raw filter fields
    pub state: FilterState,
    /// Query the current `listings` answer
    pub query: ListingQuery,
    pub listings: Vec<Listing>,
    /// Affiliations narrowed by the debounced affiliation search
    pub affiliations: Vec<Affiliation>,
    /// Whether the latest issued query is still in flight
    pub loading: bool,
    /// Generation of the query the current `listings` answer, 0 before the first load
    pub generation: u64,
    /// Message of the latest failed query, cleared by the next successful one
    pub error: Option<String>,
}

impl FilterSnapshot {
    /// Recommended listings among the current results, in result order.
    pub fn recommended(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.recommended).collect()
    }
}

/// Narrows `affiliations` to those whose name or short name contains `search`,
/// ignoring case. A blank search keeps every affiliation.
pub fn filter_affiliations(affiliations: &[Affiliation], search: &str) -> Vec<Affiliation> {
    let needle = search.trim().to_lowercase();

    if needle.is_empty() {
        return affiliations.to_vec();
    }

    affiliations
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&needle) || a.short_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
