use entity::{listing::RATING_RANGE, prelude::*};
use serde::{Deserialize, Serialize};

use crate::client::form::{optional, required, FormError, LISTING_PLACEHOLDER_IMAGE};

/// Listing form fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingForm {
    pub name: String,
    pub affiliation_id: String,
    pub price_range: String,
    pub distance: String,
    pub rating: String,
    pub image: String,
    /// Comma-separated amenity tags
    pub amenities: String,
    /// Checkbox value; the listing is recommended whenever the field is present at all
    pub recommended: Option<String>,
}

impl ListingForm {
    /// Pre-fills the form for editing `listing`.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            affiliation_id: listing.affiliation_id.clone(),
            price_range: listing.price_range.clone(),
            distance: listing.distance.clone(),
            rating: listing.rating.to_string(),
            image: listing.image.clone(),
            amenities: join_amenities(&listing.amenities),
            recommended: listing.recommended.then(|| "on".to_string()),
        }
    }

    /// Validates the submitted values into a listing.
    ///
    /// # Arguments
    /// - `editing` - The listing being edited, whose id and rating are kept; `None` for a
    ///   new listing
    ///
    /// # Returns
    /// - `Ok(Listing)` - The listing to save
    /// - `Err(FormError::MissingField)` - Name, affiliation, price range or distance is blank
    /// - `Err(FormError::InvalidRating)` - Rating is not a number between 0 and 5
    pub fn into_listing(self, editing: Option<&Listing>) -> Result<Listing, FormError> {
        let rating = match optional(&self.rating) {
            None => editing.map(|l| l.rating).unwrap_or(0.0),
            Some(raw) => parse_rating(&raw)?,
        };

        Ok(Listing {
            id: editing.map(|l| l.id.clone()).unwrap_or_default(),
            name: required(&self.name, "name")?,
            affiliation_id: required(&self.affiliation_id, "affiliationId")?,
            price_range: required(&self.price_range, "priceRange")?,
            distance: required(&self.distance, "distance")?,
            rating,
            image: optional(&self.image).unwrap_or_else(|| LISTING_PLACEHOLDER_IMAGE.to_string()),
            recommended: self.recommended.is_some(),
            amenities: parse_amenities(&self.amenities),
        })
    }
}

fn parse_rating(raw: &str) -> Result<f64, FormError> {
    match raw.parse::<f64>() {
        Ok(rating) if RATING_RANGE.contains(&rating) => Ok(rating),
        _ => Err(FormError::InvalidRating(raw.to_string())),
    }
}

/// Splits comma-separated amenity tags, trimming each and dropping empty ones.
pub fn parse_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins amenity tags for display in the form.
pub fn join_amenities(amenities: &[String]) -> String {
    amenities.join(", ")
}
