//! HTTP controller endpoints for the UniStay catalog API.
//!
//! Each handler extracts its inputs, calls the shared [`CatalogService`] held in the
//! application state and maps the outcome to a JSON response. Errors are converted to
//! responses through the `IntoResponse` implementation of the server error type.
//!
//! [`CatalogService`]: crate::server::service::catalog::CatalogService

pub mod affiliation;
pub mod listing;
pub mod post;
pub mod profile;
