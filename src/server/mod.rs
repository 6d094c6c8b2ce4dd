//! Server-side catalog modules.
//!
//! This module contains the persistence store and its backends, the in-memory catalog
//! collections seeded from it, the catalog query service, configuration and error types,
//! and (behind the `server` feature) the HTTP controllers and router exposing the service.

pub mod config;
#[cfg(feature = "server")]
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
#[cfg(feature = "server")]
pub mod router;
pub mod service;
pub mod startup;
pub mod store;
pub mod util;
