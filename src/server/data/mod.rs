//! In-memory catalog collections backed by the persistence store.
//!
//! The catalog keeps its four collections in memory and writes a collection back to the
//! store after every mutation. At load time each collection is read from the store, falling
//! back to the built-in [`seed`] data when the key is absent or holds corrupt data.

pub mod collection;
pub mod seed;

use entity::prelude::*;

use crate::server::{error::store::StoreError, store::Store};

/// Store key of the affiliation collection
pub static AFFILIATIONS_KEY: &str = "affiliations";
/// Store key of the listing collection
pub static LISTINGS_KEY: &str = "listings";
/// Store key of the post collection
pub static POSTS_KEY: &str = "posts";
/// Store key of the profile collection
pub static PROFILES_KEY: &str = "profiles";

/// The four catalog collections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collections {
    pub affiliations: Vec<Affiliation>,
    pub listings: Vec<Listing>,
    pub posts: Vec<Post>,
    pub profiles: Vec<Profile>,
}

impl Collections {
    /// Reads every collection from `store`, using seed data for absent or corrupt keys.
    pub async fn load(store: &Store) -> Self {
        Self {
            affiliations: store.get(AFFILIATIONS_KEY, seed::affiliations()).await,
            listings: store.get(LISTINGS_KEY, seed::listings()).await,
            posts: store.get(POSTS_KEY, seed::posts()).await,
            profiles: store.get(PROFILES_KEY, seed::profiles()).await,
        }
    }

    /// Writes every collection to `store`.
    pub async fn persist_all(&self, store: &Store) -> Result<(), StoreError> {
        store.set(AFFILIATIONS_KEY, &self.affiliations).await?;
        store.set(LISTINGS_KEY, &self.listings).await?;
        store.set(POSTS_KEY, &self.posts).await?;
        store.set(PROFILES_KEY, &self.profiles).await?;

        Ok(())
    }
}
