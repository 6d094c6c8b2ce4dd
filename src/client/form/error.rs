use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Rating must be a number between 0 and 5, got {0:?}")]
    InvalidRating(String),
    #[error("Unknown post type {0:?}, expected news, event or job")]
    InvalidPostKind(String),
}
