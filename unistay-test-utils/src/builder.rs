//! Declarative test catalog builder.
//!
//! The builder queues records and raw store entries; `build()` serializes them in the
//! same JSON shape the catalog persists.

use entity::prelude::*;
use serde::Serialize;

use crate::{
    constant::{AFFILIATIONS_KEY, LISTINGS_KEY, POSTS_KEY, PROFILES_KEY},
    TestSetup,
};

/// Builder for declarative test catalogs.
///
/// # Example
///
/// ```
/// use unistay_test_utils::prelude::*;
///
/// let test = TestBuilder::new()
///     .with_affiliation(factory::affiliation("1", "MAK"))
///     .with_listing(factory::listing("h1", "1"))
///     .with_empty_posts()
///     .build();
///
/// assert_eq!(test.listings().len(), 1);
/// assert_eq!(test.entry("posts"), Some("[]"));
/// ```
#[derive(Default)]
pub struct TestBuilder {
    affiliations: Option<Vec<Affiliation>>,
    listings: Option<Vec<Listing>>,
    posts: Option<Vec<Post>>,
    profiles: Option<Vec<Profile>>,
    raw_entries: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a builder with no collections declared.
    ///
    /// Undeclared collections are not written to the store, so the catalog serves its
    /// built-in seed data for them.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares all four collections as empty.
    pub fn with_empty_catalog(mut self) -> Self {
        self.affiliations.get_or_insert_with(Vec::new);
        self.listings.get_or_insert_with(Vec::new);
        self.posts.get_or_insert_with(Vec::new);
        self.profiles.get_or_insert_with(Vec::new);
        self
    }

    pub fn with_affiliation(mut self, affiliation: Affiliation) -> Self {
        self.affiliations
            .get_or_insert_with(Vec::new)
            .push(affiliation);
        self
    }

    pub fn with_affiliations(mut self, affiliations: impl IntoIterator<Item = Affiliation>) -> Self {
        self.affiliations
            .get_or_insert_with(Vec::new)
            .extend(affiliations);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listings.get_or_insert_with(Vec::new).push(listing);
        self
    }

    pub fn with_listings(mut self, listings: impl IntoIterator<Item = Listing>) -> Self {
        self.listings.get_or_insert_with(Vec::new).extend(listings);
        self
    }

    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.get_or_insert_with(Vec::new).push(post);
        self
    }

    pub fn with_empty_posts(mut self) -> Self {
        self.posts.get_or_insert_with(Vec::new);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.get_or_insert_with(Vec::new).push(profile);
        self
    }

    /// Writes `raw` under `key` verbatim, after the declared collections.
    ///
    /// Used to simulate corrupt or hand-edited store data.
    pub fn with_raw_entry(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.raw_entries.push((key.into(), raw.into()));
        self
    }

    /// Serializes the declared catalog into store entries.
    pub fn build(self) -> TestSetup {
        let mut entries = Vec::new();

        push_entry(&mut entries, AFFILIATIONS_KEY, self.affiliations.as_ref());
        push_entry(&mut entries, LISTINGS_KEY, self.listings.as_ref());
        push_entry(&mut entries, POSTS_KEY, self.posts.as_ref());
        push_entry(&mut entries, PROFILES_KEY, self.profiles.as_ref());
        entries.extend(self.raw_entries);

        TestSetup {
            affiliations: self.affiliations,
            listings: self.listings,
            posts: self.posts,
            profiles: self.profiles,
            entries,
        }
    }
}

fn push_entry<T: Serialize>(entries: &mut Vec<(String, String)>, key: &str, records: Option<&T>) {
    if let Some(records) = records {
        let raw = serde_json::to_string(records).expect("test records always serialize");
        entries.push((key.to_string(), raw));
    }
}
