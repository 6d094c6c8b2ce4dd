//! Types shared between the client and server halves of the catalog.

pub mod api;
pub mod query;
