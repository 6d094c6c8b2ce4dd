//! Seams between client logic and the catalog.
//!
//! The client never reaches into the server directly; it depends on these traits, which the
//! in-process [`CatalogService`] implements. Tests substitute their own sources.

use std::future::Future;

use entity::prelude::*;

use crate::{
    model::query::ListingQuery,
    server::{error::Error, service::catalog::CatalogService},
};

/// Anything able to answer listing queries.
pub trait ListingSource: Send + Sync + 'static {
    fn fetch_listings(
        &self,
        query: ListingQuery,
    ) -> impl Future<Output = Result<Vec<Listing>, Error>> + Send;
}

/// Full catalog access used by the application context.
pub trait CatalogApi: ListingSource {
    fn fetch_affiliations(&self) -> impl Future<Output = Result<Vec<Affiliation>, Error>> + Send;

    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>, Error>> + Send;

    fn fetch_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, Error>> + Send;

    /// Inserts or replaces a listing, returning it with its final id.
    fn put_listing(&self, listing: Listing) -> impl Future<Output = Result<Listing, Error>> + Send;

    /// Removes a listing, returning whether it existed.
    fn remove_listing(&self, id: &str) -> impl Future<Output = Result<bool, Error>> + Send;

    fn put_post(&self, post: Post) -> impl Future<Output = Result<Post, Error>> + Send;

    fn remove_post(&self, id: &str) -> impl Future<Output = Result<bool, Error>> + Send;

    fn put_profile(&self, profile: Profile) -> impl Future<Output = Result<Profile, Error>> + Send;

    fn remove_profile(&self, id: &str) -> impl Future<Output = Result<bool, Error>> + Send;
}

impl ListingSource for CatalogService {
    async fn fetch_listings(&self, query: ListingQuery) -> Result<Vec<Listing>, Error> {
        Ok(self.list_listings(&query).await)
    }
}

impl CatalogApi for CatalogService {
    async fn fetch_affiliations(&self) -> Result<Vec<Affiliation>, Error> {
        Ok(self.list_affiliations().await)
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, Error> {
        Ok(self.list_posts().await)
    }

    async fn fetch_profiles(&self) -> Result<Vec<Profile>, Error> {
        Ok(self.list_profiles().await)
    }

    async fn put_listing(&self, listing: Listing) -> Result<Listing, Error> {
        self.save_listing(listing).await
    }

    async fn remove_listing(&self, id: &str) -> Result<bool, Error> {
        self.delete_listing(id).await
    }

    async fn put_post(&self, post: Post) -> Result<Post, Error> {
        self.save_post(post).await
    }

    async fn remove_post(&self, id: &str) -> Result<bool, Error> {
        self.delete_post(id).await
    }

    async fn put_profile(&self, profile: Profile) -> Result<Profile, Error> {
        self.save_profile(profile).await
    }

    async fn remove_profile(&self, id: &str) -> Result<bool, Error> {
        self.delete_profile(id).await
    }
}
