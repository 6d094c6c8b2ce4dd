use entity::prelude::*;

/// Result of [`TestBuilder::build`](crate::TestBuilder::build).
///
/// Holds the records a test declared together with the serialized store entries the
/// catalog should be seeded with. Collections left as `None` are absent from the store, so
/// the catalog falls back to its built-in seed data for them.
#[derive(Clone, Debug, Default)]
pub struct TestSetup {
    pub affiliations: Option<Vec<Affiliation>>,
    pub listings: Option<Vec<Listing>>,
    pub posts: Option<Vec<Post>>,
    pub profiles: Option<Vec<Profile>>,
    /// Unprefixed store key and raw string pairs, in write order
    pub entries: Vec<(String, String)>,
}

impl TestSetup {
    /// Looks up the raw entry written for `key`; later entries win over earlier ones.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Affiliations declared by the test, or an empty slice when none were.
    pub fn affiliations(&self) -> &[Affiliation] {
        self.affiliations.as_deref().unwrap_or_default()
    }

    /// Listings declared by the test, or an empty slice when none were.
    pub fn listings(&self) -> &[Listing] {
        self.listings.as_deref().unwrap_or_default()
    }
}
