//! Catalog query service.
//!
//! [`CatalogService`] owns the four catalog collections, loaded from the persistence store
//! when the service is built, and exposes the read and write operations for each of them.
//! Listing reads run the filter/search/sort pipeline in [`query`] behind a simulated
//! latency; writes upsert or remove by id on a copy of the touched collection and only
//! replace the in-memory collection once the copy has been persisted.
//!
//! Clones share one catalog. The service assumes a single writer: concurrent writers are
//! serialized by the collection lock, but no cross-process coordination exists.

pub mod config;
pub mod price;
pub mod query;

#[cfg(test)]
mod tests;

pub use config::CatalogConfig;

use std::sync::Arc;
use std::time::Duration;

use entity::{prelude::*, Identified};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    model::query::ListingQuery,
    server::{
        data::{
            collection::{self, Upsert},
            Collections, LISTINGS_KEY, POSTS_KEY, PROFILES_KEY,
        },
        error::Error,
        store::Store,
    },
};

/// Service exposing catalog reads and operator writes.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceRef>,
}

/// Shared state behind every clone of a [`CatalogService`].
struct CatalogServiceRef {
    store: Store,
    config: CatalogConfig,
    collections: RwLock<Collections>,
}

impl CatalogService {
    /// Creates a service over already loaded collections.
    ///
    /// # Arguments
    /// - `store` - Store the collections are persisted to after mutations
    /// - `config` - Simulated latencies
    /// - `collections` - Initial catalog contents
    pub fn new(store: Store, config: CatalogConfig, collections: Collections) -> Self {
        Self {
            inner: Arc::new(CatalogServiceRef {
                store,
                config,
                collections: RwLock::new(collections),
            }),
        }
    }

    /// Loads the catalog from `store`, seeding absent or corrupt collections.
    ///
    /// # Arguments
    /// - `store` - Store to read the collections from and persist them to
    /// - `config` - Simulated latencies
    ///
    /// # Returns
    /// - `CatalogService` - Service holding the loaded catalog
    pub async fn load(store: Store, config: CatalogConfig) -> Self {
        let collections = Collections::load(&store).await;

        tracing::info!(
            "Loaded catalog with {} affiliations, {} listings, {} posts and {} profiles",
            collections.affiliations.len(),
            collections.listings.len(),
            collections.posts.len(),
            collections.profiles.len()
        );

        Self::new(store, config, collections)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Returns every affiliation after the simulated affiliation latency.
    pub async fn list_affiliations(&self) -> Vec<Affiliation> {
        simulate_latency(self.inner.config.affiliation_latency()).await;

        self.inner.collections.read().await.affiliations.clone()
    }

    /// Returns the listings matching `query` after the simulated listing latency.
    ///
    /// See [`query::run_query`] for the filter, search and sort semantics.
    pub async fn list_listings(&self, query: &ListingQuery) -> Vec<Listing> {
        simulate_latency(self.inner.config.listing_latency()).await;

        let listings = self.inner.collections.read().await.listings.clone();

        query::run_query(listings, query)
    }

    /// Inserts or replaces a listing and persists the listing collection.
    ///
    /// A listing whose id matches an existing one replaces it in place; any other id,
    /// including an empty one, inserts the listing under a freshly generated id. The
    /// catalog is only updated once the collection has been persisted.
    ///
    /// # Returns
    /// - `Ok(Listing)` - The listing as stored, carrying its final id
    /// - `Err(Error::InvalidRating)` - The rating is not a finite value between 0 and 5
    /// - `Err(Error::UnknownAffiliation)` - The listing's affiliation does not exist
    /// - `Err(Error::StoreError)` - The listing collection could not be persisted
    pub async fn save_listing(&self, listing: Listing) -> Result<Listing, Error> {
        if !listing.has_valid_rating() {
            return Err(Error::InvalidRating(listing.rating));
        }

        let mut collections = self.inner.collections.write().await;

        if !collections
            .affiliations
            .iter()
            .any(|affiliation| affiliation.id == listing.affiliation_id)
        {
            return Err(Error::UnknownAffiliation(listing.affiliation_id));
        }

        self.commit_upsert("listing", LISTINGS_KEY, &mut collections.listings, listing)
            .await
    }

    /// Removes a listing by id and persists the listing collection.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(true)` - The listing was removed
    /// - `Ok(false)` - No listing had the id
    /// - `Err(Error::StoreError)` - The listing collection could not be persisted
    pub async fn delete_listing(&self, id: &str) -> Result<bool, Error> {
        let mut collections = self.inner.collections.write().await;

        self.commit_remove(LISTINGS_KEY, &mut collections.listings, id)
            .await
    }

    /// Returns every post.
    pub async fn list_posts(&self) -> Vec<Post> {
        self.inner.collections.read().await.posts.clone()
    }

    /// Inserts or replaces a post and persists the post collection.
    pub async fn save_post(&self, post: Post) -> Result<Post, Error> {
        let mut collections = self.inner.collections.write().await;

        self.commit_upsert("post", POSTS_KEY, &mut collections.posts, post)
            .await
    }

    /// Removes a post by id; absent ids are a successful no-op.
    pub async fn delete_post(&self, id: &str) -> Result<bool, Error> {
        let mut collections = self.inner.collections.write().await;

        self.commit_remove(POSTS_KEY, &mut collections.posts, id)
            .await
    }

    /// Returns every spotlight profile.
    pub async fn list_profiles(&self) -> Vec<Profile> {
        self.inner.collections.read().await.profiles.clone()
    }

    /// Inserts or replaces a profile and persists the profile collection.
    pub async fn save_profile(&self, profile: Profile) -> Result<Profile, Error> {
        let mut collections = self.inner.collections.write().await;

        self.commit_upsert("profile", PROFILES_KEY, &mut collections.profiles, profile)
            .await
    }

    /// Removes a profile by id; absent ids are a successful no-op.
    pub async fn delete_profile(&self, id: &str) -> Result<bool, Error> {
        let mut collections = self.inner.collections.write().await;

        self.commit_remove(PROFILES_KEY, &mut collections.profiles, id)
            .await
    }

    /// Upserts `record` into a copy of `records`, persists the copy and only then swaps it
    /// in, leaving `records` untouched when the store write fails.
    async fn commit_upsert<T>(
        &self,
        kind: &str,
        key: &str,
        records: &mut Vec<T>,
        record: T,
    ) -> Result<T, Error>
    where
        T: Identified + Clone + Serialize,
    {
        let mut updated = records.clone();
        let (stored, outcome) = collection::upsert(&mut updated, record);

        self.persist(key, &updated).await?;
        *records = updated;

        log_upsert(kind, &stored, outcome);

        Ok(stored)
    }

    /// Removes `id` from a copy of `records`, persisting and swapping it in only when a
    /// record was actually removed.
    async fn commit_remove<T>(
        &self,
        key: &str,
        records: &mut Vec<T>,
        id: &str,
    ) -> Result<bool, Error>
    where
        T: Identified + Clone + Serialize,
    {
        let mut remaining = records.clone();

        if !collection::remove(&mut remaining, id) {
            tracing::debug!("No record with ID {} in {}; nothing deleted", id, key);

            return Ok(false);
        }

        self.persist(key, &remaining).await?;
        *records = remaining;

        tracing::debug!("Deleted record {} from {}", id, key);

        Ok(true)
    }

    async fn persist<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), Error> {
        self.inner.store.set(key, records).await?;

        Ok(())
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

fn log_upsert<T: Identified>(kind: &str, record: &T, outcome: Upsert) {
    match outcome {
        Upsert::Inserted => tracing::debug!("Inserted {} {}", kind, record.id()),
        Upsert::Replaced => tracing::debug!("Replaced {} {}", kind, record.id()),
    }
}
