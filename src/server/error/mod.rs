//! Error types for the UniStay catalog.
//!
//! This module provides the error handling for the server half of the catalog: a top level
//! [`Error`] aggregating the configuration and store errors plus domain failures. With the
//! `server` feature every error implements `IntoResponse`, mapping domain failures to client
//! errors and everything else to a logged, generic 500 response.

pub mod config;
pub mod store;

#[cfg(feature = "server")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[cfg(feature = "server")]
use crate::model::api::ErrorDto;
use crate::server::error::{config::ConfigError, store::StoreError};

/// Main error type for the catalog server.
///
/// Aggregates the domain specific error types into a single type so `?` works across the
/// store, service and controller layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Persistence store error (serialization, file or Redis access).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// A listing referenced an affiliation ID that does not exist.
    #[error("Listing references unknown affiliation ID {0:?}")]
    UnknownAffiliation(String),
    /// A listing carried a rating outside 0 to 5 or a non-finite rating.
    #[error("Listing rating {0} is outside the range 0 to 5")]
    InvalidRating(f64),
}

/// Converts catalog errors into HTTP responses.
///
/// # Returns
/// - 422 Unprocessable Entity - Listing referencing an unknown affiliation or carrying an
///   invalid rating
/// - 500 Internal Server Error - Configuration and store errors (with error logging)
#[cfg(feature = "server")]
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownAffiliation(affiliation_id) => {
                tracing::debug!(
                    "Rejected listing with unknown affiliation ID {}",
                    affiliation_id
                );

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto {
                        error: format!("Unknown affiliation ID {}", affiliation_id),
                    }),
                )
                    .into_response()
            }
            Self::InvalidRating(rating) => {
                tracing::debug!("Rejected listing with invalid rating {}", rating);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto {
                        error: format!("Rating {} must be between 0 and 5", rating),
                    }),
                )
                    .into_response()
            }
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details such as file paths or Redis addresses.
#[cfg(feature = "server")]
pub struct InternalServerError<E>(pub E);

#[cfg(feature = "server")]
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
