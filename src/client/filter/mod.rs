//! Filter state controller for the listing explorer.
//!
//! [`FilterController`] holds the four filter fields, debounces the two free-text fields
//! and re-queries its [`ListingSource`] whenever the effective query changes. Results are
//! published as [`FilterSnapshot`]s on a `watch` channel.
//!
//! Queries may overlap. Each issued query is tagged with a generation number and a result
//! is applied only if its generation is still the latest when it resolves, so a slow
//! response can never overwrite a newer one. Re-editing a text field before its quiet
//! period ends aborts the pending timer task.

pub mod config;
pub mod state;

use std::sync::Arc;

use entity::prelude::*;
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
};

use crate::{
    client::{
        api::ListingSource,
        filter::{
            config::FilterConfig,
            state::{filter_affiliations, FilterSnapshot, FilterState},
        },
    },
    model::query::{AffiliationFilter, ListingQuery, SortOrder},
    server::error::Error,
};

/// Debounced, race-free listing filter.
///
/// Clones share the same state. Must be used from within a tokio runtime since edits spawn
/// timer and query tasks.
pub struct FilterController<S: ListingSource> {
    inner: Arc<FilterControllerRef<S>>,
}

impl<S: ListingSource> Clone for FilterController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct FilterControllerRef<S> {
    source: Arc<S>,
    config: FilterConfig,
    /// Full affiliation list, narrowed locally and never re-queried
    affiliations: Vec<Affiliation>,
    state: Mutex<ControllerState>,
    snapshot: watch::Sender<FilterSnapshot>,
}

#[derive(Default)]
struct ControllerState {
    filter: FilterState,
    debounced_query: String,
    debounced_affiliation_search: String,
    /// Generation of the most recently issued query
    generation: u64,
    applied_generation: u64,
    applied_query: ListingQuery,
    listings: Vec<Listing>,
    loading: bool,
    error: Option<String>,
    query_timer: Option<JoinHandle<()>>,
    affiliation_search_timer: Option<JoinHandle<()>>,
}

impl ControllerState {
    fn listing_query(&self) -> ListingQuery {
        ListingQuery {
            affiliation: self.filter.affiliation.clone(),
            text: self.debounced_query.clone(),
            sort: self.filter.sort,
        }
    }

    fn abort_timers(&mut self) {
        for timer in [self.query_timer.take(), self.affiliation_search_timer.take()]
            .into_iter()
            .flatten()
        {
            timer.abort();
        }
    }
}

impl<S: ListingSource> FilterController<S> {
    /// Creates a controller with default filters and no listings loaded.
    ///
    /// Call [`FilterController::start`] to issue the initial query.
    ///
    /// # Arguments
    /// - `source` - Where listing queries are sent
    /// - `config` - Debounce quiet period
    /// - `affiliations` - Affiliations offered for selection, narrowed by the affiliation search
    pub fn new(source: Arc<S>, config: FilterConfig, affiliations: Vec<Affiliation>) -> Self {
        let initial = FilterSnapshot {
            affiliations: affiliations.clone(),
            ..Default::default()
        };
        let (snapshot, _) = watch::channel(initial);

        Self {
            inner: Arc::new(FilterControllerRef {
                source,
                config,
                affiliations,
                state: Mutex::new(ControllerState::default()),
                snapshot,
            }),
        }
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FilterSnapshot> {
        self.inner.snapshot.subscribe()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> FilterSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// Issues the initial listing query for the current filters.
    pub async fn start(&self) {
        let mut state = self.inner.state.lock().await;

        self.spawn_query(&mut state);
        self.publish(&state);
    }

    /// Records new search text; it is applied once no further edit arrives within the
    /// debounce period.
    pub async fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.inner.state.lock().await;

        state.filter.query = text.clone();

        if let Some(timer) = state.query_timer.take() {
            timer.abort();
        }

        let controller = self.clone();
        state.query_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(controller.inner.config.debounce()).await;
            controller.apply_query(text).await;
        }));

        self.publish(&state);
    }

    /// Records new affiliation search text, narrowing the offered affiliations after the
    /// debounce period. Never issues a listing query.
    pub async fn set_affiliation_search(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.inner.state.lock().await;

        state.filter.affiliation_search = text.clone();

        if let Some(timer) = state.affiliation_search_timer.take() {
            timer.abort();
        }

        let controller = self.clone();
        state.affiliation_search_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(controller.inner.config.debounce()).await;
            controller.apply_affiliation_search(text).await;
        }));

        self.publish(&state);
    }

    /// Selects the affiliation listings must belong to, re-querying immediately if it changed.
    pub async fn select_affiliation(&self, affiliation: AffiliationFilter) {
        let mut state = self.inner.state.lock().await;

        if state.filter.affiliation == affiliation {
            return;
        }

        state.filter.affiliation = affiliation;
        self.spawn_query(&mut state);
        self.publish(&state);
    }

    /// Changes the sort order, re-querying immediately if it changed.
    pub async fn set_sort(&self, sort: SortOrder) {
        let mut state = self.inner.state.lock().await;

        if state.filter.sort == sort {
            return;
        }

        state.filter.sort = sort;
        self.spawn_query(&mut state);
        self.publish(&state);
    }

    /// Restores every filter field to its default and cancels pending debounce timers.
    ///
    /// Publishes a single snapshot and issues a query only when the effective query changed.
    pub async fn reset(&self) {
        let mut state = self.inner.state.lock().await;

        state.abort_timers();

        let before = state.listing_query();
        state.filter = FilterState::default();
        state.debounced_query.clear();
        state.debounced_affiliation_search.clear();

        if state.listing_query() != before {
            self.spawn_query(&mut state);
        }

        self.publish(&state);
    }

    async fn apply_query(&self, text: String) {
        let mut state = self.inner.state.lock().await;
        state.query_timer = None;

        if state.debounced_query == text {
            return;
        }

        state.debounced_query = text;
        self.spawn_query(&mut state);
        self.publish(&state);
    }

    async fn apply_affiliation_search(&self, text: String) {
        let mut state = self.inner.state.lock().await;
        state.affiliation_search_timer = None;

        if state.debounced_affiliation_search == text {
            return;
        }

        state.debounced_affiliation_search = text;
        self.publish(&state);
    }

    /// Issues a query for the current effective filters under a new generation.
    fn spawn_query(&self, state: &mut ControllerState) {
        state.generation += 1;
        state.loading = true;

        let generation = state.generation;
        let query = state.listing_query();
        let controller = self.clone();

        tracing::debug!("Issuing listing query generation {}: {:?}", generation, query);

        tokio::spawn(async move {
            let result = controller.inner.source.fetch_listings(query.clone()).await;
            controller.resolve(generation, query, result).await;
        });
    }

    async fn resolve(
        &self,
        generation: u64,
        query: ListingQuery,
        result: Result<Vec<Listing>, Error>,
    ) {
        let mut state = self.inner.state.lock().await;

        if generation != state.generation {
            tracing::debug!(
                "Discarding stale listing results of generation {} (latest is {})",
                generation,
                state.generation
            );

            return;
        }

        state.loading = false;

        match result {
            Ok(listings) => {
                state.listings = listings;
                state.applied_query = query;
                state.applied_generation = generation;
                state.error = None;
            }
            Err(err) => {
                tracing::warn!("Listing query generation {} failed: {}", generation, err);

                state.error = Some(err.to_string());
            }
        }

        self.publish(&state);
    }

    fn publish(&self, state: &ControllerState) {
        let snapshot = FilterSnapshot {
            state: state.filter.clone(),
            query: state.applied_query.clone(),
            listings: state.listings.clone(),
            affiliations: filter_affiliations(
                &self.inner.affiliations,
                &state.debounced_affiliation_search,
            ),
            loading: state.loading,
            generation: state.applied_generation,
            error: state.error.clone(),
        };

        self.inner.snapshot.send_replace(snapshot);
    }
}
