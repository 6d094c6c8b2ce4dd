//! Record fixtures for tests.
//!
//! - `factory` - Builders for affiliations, listings, posts and profiles with test defaults

pub mod factory;
