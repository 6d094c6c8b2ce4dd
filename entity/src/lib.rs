//! Domain records for the UniStay catalog.
//!
//! Every record serializes camelCase so the persisted JSON arrays keep the same shape
//! regardless of which store backend holds them. Records carrying an `id` deserialize a
//! missing id as the empty string, which the save operations treat as a new record.

pub mod affiliation;
pub mod listing;
pub mod post;
pub mod profile;

pub mod prelude {
    pub use crate::{
        affiliation::Affiliation,
        listing::Listing,
        post::{Post, PostKind},
        profile::Profile,
    };
}

/// Records addressed by a string identifier.
///
/// Implemented by every mutable record so collections can be upserted and pruned
/// generically.
pub trait Identified {
    /// Prefix used when generating a fresh id for this record type
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}
