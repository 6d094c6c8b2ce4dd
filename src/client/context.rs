//! Application-wide catalog context.
//!
//! [`CatalogContext`] holds the catalog as last loaded from a [`CatalogApi`] and keeps it
//! fresh: every admin write is forwarded to the API and followed by a full refresh, so
//! views reading the context never show data older than the last successful write.

use std::sync::Arc;

use entity::prelude::*;
use tokio::sync::RwLock;

use crate::{
    client::{
        api::CatalogApi,
        filter::{config::FilterConfig, FilterController},
    },
    model::query::ListingQuery,
    server::error::Error,
};

/// Catalog contents loaded by the last refresh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogData {
    /// Listings in the default order
    pub listings: Vec<Listing>,
    pub affiliations: Vec<Affiliation>,
    pub posts: Vec<Post>,
    pub profiles: Vec<Profile>,
}

/// Record counts shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub listings: usize,
    pub posts: usize,
    pub profiles: usize,
}

pub struct CatalogContext<A: CatalogApi> {
    api: Arc<A>,
    data: RwLock<CatalogData>,
}

impl<A: CatalogApi> CatalogContext<A> {
    /// Creates a context with nothing loaded yet.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            data: RwLock::new(CatalogData::default()),
        }
    }

    /// Creates a context and performs the initial refresh.
    pub async fn load(api: Arc<A>) -> Result<Self, Error> {
        let context = Self::new(api);
        context.refresh().await?;

        Ok(context)
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Reloads listings, affiliations, posts and profiles concurrently.
    ///
    /// The loaded data is swapped in only when all four loads succeed; on failure the
    /// previous data is kept.
    pub async fn refresh(&self) -> Result<(), Error> {
        let (listings, affiliations, posts, profiles) = futures::try_join!(
            self.api.fetch_listings(ListingQuery::default()),
            self.api.fetch_affiliations(),
            self.api.fetch_posts(),
            self.api.fetch_profiles(),
        )?;

        *self.data.write().await = CatalogData {
            listings,
            affiliations,
            posts,
            profiles,
        };

        Ok(())
    }

    pub async fn data(&self) -> CatalogData {
        self.data.read().await.clone()
    }

    pub async fn stats(&self) -> DashboardStats {
        let data = self.data.read().await;

        DashboardStats {
            listings: data.listings.len(),
            posts: data.posts.len(),
            profiles: data.profiles.len(),
        }
    }

    pub async fn save_listing(&self, listing: Listing) -> Result<Listing, Error> {
        let saved = self.api.put_listing(listing).await?;
        self.refresh().await?;

        Ok(saved)
    }

    pub async fn delete_listing(&self, id: &str) -> Result<bool, Error> {
        let deleted = self.api.remove_listing(id).await?;
        self.refresh().await?;

        Ok(deleted)
    }

    pub async fn save_post(&self, post: Post) -> Result<Post, Error> {
        let saved = self.api.put_post(post).await?;
        self.refresh().await?;

        Ok(saved)
    }

    pub async fn delete_post(&self, id: &str) -> Result<bool, Error> {
        let deleted = self.api.remove_post(id).await?;
        self.refresh().await?;

        Ok(deleted)
    }

    pub async fn save_profile(&self, profile: Profile) -> Result<Profile, Error> {
        let saved = self.api.put_profile(profile).await?;
        self.refresh().await?;

        Ok(saved)
    }

    pub async fn delete_profile(&self, id: &str) -> Result<bool, Error> {
        let deleted = self.api.remove_profile(id).await?;
        self.refresh().await?;

        Ok(deleted)
    }

    /// Builds a filter controller over the same API, offering the loaded affiliations.
    pub async fn filter_controller(&self, config: FilterConfig) -> FilterController<A> {
        let affiliations = self.data.read().await.affiliations.clone();

        FilterController::new(self.api.clone(), config, affiliations)
    }
}
