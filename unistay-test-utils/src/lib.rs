//! Test utilities for the UniStay catalog.
//!
//! Tests declare the catalog they need through [`TestBuilder`] and receive a [`TestSetup`]
//! holding the serialized store entries. This crate depends only on `entity`; the catalog
//! crate turns a `TestSetup` into a store or service itself, which avoids a circular
//! dependency between the two crates.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestError, TestSetup};
}
