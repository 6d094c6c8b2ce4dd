//! UniStay student housing catalog.
//!
//! The crate is split the same way the application is deployed:
//! - [`server`] owns persistence, the catalog query service and the optional HTTP surface
//! - [`client`] holds the filter state controller, the application context and the admin
//!   form mapping that sit between user input and the catalog
//! - [`model`] contains the query and transfer types shared by both sides

pub mod client;
pub mod model;
pub mod server;
