//! Service layer for catalog business logic.
//!
//! This module contains the catalog query service, which owns the in-memory collections,
//! runs the listing filter/search/sort pipeline and persists collections after mutations.

pub mod catalog;
