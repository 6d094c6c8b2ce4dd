use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::Identified;

/// A housing listing (hostel) near an affiliation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// ID of the [`Affiliation`](crate::affiliation::Affiliation) this listing belongs to
    pub affiliation_id: String,
    /// Free-text price range such as "UGX 800k - 1.2M"
    pub price_range: String,
    /// Free-text distance description such as "200m from Main Gate"
    pub distance: String,
    /// Rating between 0 and 5
    pub rating: f64,
    pub image: String,
    /// Recommended listings are shown before all others in the default ordering
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Ratings a listing may carry, inclusive on both ends.
pub const RATING_RANGE: RangeInclusive<f64> = 0.0..=5.0;

impl Listing {
    /// Whether the rating is a finite value within [`RATING_RANGE`].
    pub fn has_valid_rating(&self) -> bool {
        RATING_RANGE.contains(&self.rating)
    }
}

impl Identified for Listing {
    const ID_PREFIX: &'static str = "h";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
