//! Admin edit form mapping.
//!
//! Admin forms submit flat strings. Each form type here mirrors one record type, converts a
//! record into pre-filled form values for editing and validates submitted values back into
//! a record. Editing keeps the record's id; a new record leaves the id empty so the catalog
//! assigns one when it is saved.

pub mod error;
pub mod listing;
pub mod post;
pub mod profile;

pub use error::FormError;
pub use listing::ListingForm;
pub use post::PostForm;
pub use profile::ProfileForm;

/// Image used for listings submitted without one
pub static LISTING_PLACEHOLDER_IMAGE: &str = "https://picsum.photos/800/600";
/// Image used for profiles submitted without one
pub static PROFILE_PLACEHOLDER_IMAGE: &str = "https://picsum.photos/400/400";

/// Returns the trimmed value, or `MissingField` when it is blank.
fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }

    Ok(value.to_string())
}

/// Returns the trimmed value, or `None` when it is blank.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}
