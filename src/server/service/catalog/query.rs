//! Listing filter, search and sort pipeline.

use std::cmp::Ordering;

use entity::prelude::*;

use crate::{
    model::query::{ListingQuery, SortOrder},
    server::service::catalog::price::parse_min_price,
};

/// Applies `query` to `listings`.
///
/// Steps run in order: the affiliation filter, the case-insensitive text filter over names
/// and amenities (skipped for an empty query), then the requested sort. All sorts are
/// stable, so listings comparing equal keep their stored order.
pub fn run_query(listings: Vec<Listing>, query: &ListingQuery) -> Vec<Listing> {
    let needle = query.text.to_lowercase();

    let mut results: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| query.affiliation.matches(&listing.affiliation_id))
        .filter(|listing| needle.is_empty() || matches_text(listing, &needle))
        .collect();

    sort_listings(&mut results, query.sort);

    results
}

/// Whether the listing's name or any amenity contains `needle`.
///
/// `needle` must already be lowercase.
pub fn matches_text(listing: &Listing, needle: &str) -> bool {
    listing.name.to_lowercase().contains(needle)
        || listing
            .amenities
            .iter()
            .any(|amenity| amenity.to_lowercase().contains(needle))
}

/// Sorts listings in place by `order`.
pub fn sort_listings(listings: &mut [Listing], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => listings.sort_by(|a, b| compare_price(a, b)),
        SortOrder::PriceDesc => listings.sort_by(|a, b| compare_price(b, a)),
        SortOrder::RatingDesc => listings.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Default => listings.sort_by(|a, b| {
            // Recommended listings always come first, whatever their rating
            b.recommended
                .cmp(&a.recommended)
                .then_with(|| b.rating.total_cmp(&a.rating))
        }),
    }
}

fn compare_price(a: &Listing, b: &Listing) -> Ordering {
    parse_min_price(&a.price_range).total_cmp(&parse_min_price(&b.price_range))
}
