use std::{sync::Arc, time::Duration};

use entity::prelude::*;
use unistay::{
    client::filter::{config::FilterConfig, state::FilterState, FilterController},
    model::query::{AffiliationFilter, SortOrder},
};
use unistay_test_utils::prelude::*;

use crate::util::mock::MockListingSource;

fn listings() -> Vec<Listing> {
    vec![
        factory::priced_listing("h1", "1", "UGX 800k - 1.2M", 4.8, true),
        factory::priced_listing("h2", "2", "UGX 600k - 900k", 4.2, false),
        Listing {
            name: "Pool House".to_string(),
            amenities: vec!["Swimming Pool".to_string()],
            ..factory::priced_listing("h3", "1", "UGX 1.5M+", 4.9, false)
        },
    ]
}

fn affiliations() -> Vec<Affiliation> {
    vec![
        factory::affiliation("1", "MAK"),
        factory::affiliation("2", "KYU"),
    ]
}

fn controller(source: &Arc<MockListingSource>) -> FilterController<MockListingSource> {
    FilterController::new(source.clone(), FilterConfig::default(), affiliations())
}

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

/// Let spawned tasks and timers run for `ms` of (paused) time
async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Expect start to load every listing in default order
#[tokio::test(start_paused = true)]
async fn start_loads_default_listings() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    assert_eq!(controller.snapshot().generation, 0);

    controller.start().await;
    assert!(controller.snapshot().loading);

    settle(10).await;

    let snapshot = controller.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(ids(&snapshot.listings), vec!["h1", "h3", "h2"]);
    assert_eq!(snapshot.recommended().len(), 1);
    assert_eq!(source.calls().len(), 1);
}

/// Expect exactly one query with the final text when typing faster than the debounce
#[tokio::test(start_paused = true)]
async fn debounces_rapid_typing() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.set_query("a").await;
    settle(100).await;
    controller.set_query("ab").await;
    settle(100).await;
    controller.set_query("abc").await;

    // The raw field updates immediately even though nothing was queried yet
    assert_eq!(controller.snapshot().state.query, "abc");
    assert!(source.calls().is_empty());

    settle(1_000).await;

    let calls = source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "abc");
}

/// Expect no query before the quiet period has elapsed
#[tokio::test(start_paused = true)]
async fn waits_for_quiet_period() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.set_query("pool").await;
    settle(349).await;
    assert!(source.calls().is_empty());

    settle(10).await;
    let snapshot = controller.snapshot();
    assert_eq!(source.calls().len(), 1);
    assert_eq!(ids(&snapshot.listings), vec!["h3"]);
    assert_eq!(snapshot.query.text, "pool");
}

/// Expect the newer response to stay visible when an older, slower one resolves later
#[tokio::test(start_paused = true)]
async fn discards_stale_responses() {
    let source = Arc::new(
        MockListingSource::new(listings())
            .with_latency("1", Duration::from_millis(500))
            .with_latency("2", Duration::from_millis(10)),
    );
    let controller = controller(&source);

    controller
        .select_affiliation(AffiliationFilter::ByAffiliation("1".to_string()))
        .await;
    controller
        .select_affiliation(AffiliationFilter::ByAffiliation("2".to_string()))
        .await;

    settle(50).await;
    assert_eq!(ids(&controller.snapshot().listings), vec!["h2"]);

    settle(1_000).await;

    let snapshot = controller.snapshot();
    assert_eq!(source.calls().len(), 2);
    assert_eq!(ids(&snapshot.listings), vec!["h2"]);
    assert_eq!(
        snapshot.query.affiliation,
        AffiliationFilter::ByAffiliation("2".to_string())
    );
    assert_eq!(snapshot.generation, 2);
    assert!(!snapshot.loading);
}

/// Expect no query when selecting the affiliation or sort already in effect
#[tokio::test(start_paused = true)]
async fn unchanged_selection_does_not_requery() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.select_affiliation(AffiliationFilter::All).await;
    controller.set_sort(SortOrder::Default).await;
    settle(10).await;
    assert!(source.calls().is_empty());

    controller.set_sort(SortOrder::PriceAsc).await;
    controller.set_sort(SortOrder::PriceAsc).await;
    settle(10).await;

    assert_eq!(source.calls().len(), 1);
    assert_eq!(ids(&controller.snapshot().listings), vec!["h2", "h1", "h3"]);
}

/// Expect retyping the applied text not to issue another query
#[tokio::test(start_paused = true)]
async fn retyping_same_text_does_not_requery() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.set_query("pool").await;
    settle(400).await;
    controller.set_query("poo").await;
    settle(100).await;
    controller.set_query("pool").await;
    settle(400).await;

    assert_eq!(source.calls().len(), 1);
}

/// Expect reset to restore defaults, cancel pending edits and query once
#[tokio::test(start_paused = true)]
async fn reset_restores_defaults() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller
        .select_affiliation(AffiliationFilter::ByAffiliation("1".to_string()))
        .await;
    controller.set_sort(SortOrder::RatingDesc).await;
    settle(10).await;
    controller.set_query("pending").await;
    controller.set_affiliation_search("ky").await;

    let calls_before = source.calls().len();
    controller.reset().await;
    settle(1_000).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, FilterState::default());
    assert_eq!(source.calls().len(), calls_before + 1);
    assert_eq!(source.calls().last().map(|q| q.text.as_str()), Some(""));
    assert_eq!(snapshot.affiliations, affiliations());
    assert_eq!(snapshot.listings.len(), 3);
}

/// Expect reset with default filters to issue no query
#[tokio::test(start_paused = true)]
async fn reset_without_changes_does_not_query() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.reset().await;
    settle(1_000).await;

    assert!(source.calls().is_empty());
}

/// Expect the affiliation list to narrow after the debounce without querying listings
#[tokio::test(start_paused = true)]
async fn narrows_affiliations_locally() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.set_affiliation_search("kyu").await;
    assert_eq!(controller.snapshot().affiliations.len(), 2);

    settle(400).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.affiliations.len(), 1);
    assert_eq!(snapshot.affiliations[0].short_name, "KYU");
    assert!(source.calls().is_empty());
}

/// Expect a failed query to keep the previous listings and report the error
#[tokio::test(start_paused = true)]
async fn failed_query_keeps_previous_listings() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);

    controller.start().await;
    settle(10).await;

    source.set_failing(true);
    controller.set_sort(SortOrder::PriceDesc).await;
    settle(10).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.listings.len(), 3);
    assert_eq!(snapshot.query.sort, SortOrder::Default);
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_some());

    source.set_failing(false);
    controller.set_sort(SortOrder::PriceAsc).await;
    settle(10).await;

    assert_eq!(controller.snapshot().error, None);
}

/// Expect subscribers to observe published results
#[tokio::test(start_paused = true)]
async fn subscribers_see_results() {
    let source = Arc::new(MockListingSource::new(listings()));
    let controller = controller(&source);
    let mut receiver = controller.subscribe();

    controller.start().await;

    let snapshot = receiver
        .wait_for(|snapshot| snapshot.generation == 1)
        .await
        .expect("controller dropped")
        .clone();

    assert_eq!(snapshot.listings.len(), 3);
}
