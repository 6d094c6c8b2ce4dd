use entity::prelude::*;

/// Create an affiliation with default test values.
///
/// # Arguments
/// - `id` - Affiliation ID
/// - `short_name` - Short code, also used to derive the display name
pub fn affiliation(id: &str, short_name: &str) -> Affiliation {
    Affiliation {
        id: id.to_string(),
        name: format!("{} University", short_name),
        short_name: short_name.to_string(),
        location: "Kampala".to_string(),
    }
}

/// Create a listing with default test values.
///
/// Defaults: not recommended, rating 4.0, price "UGX 500k - 700k", amenities `["WiFi"]`.
///
/// # Arguments
/// - `id` - Listing ID, empty for a listing that has not been saved yet
/// - `affiliation_id` - ID of the affiliation the listing belongs to
pub fn listing(id: &str, affiliation_id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("Test Hostel {}", id),
        affiliation_id: affiliation_id.to_string(),
        price_range: "UGX 500k - 700k".to_string(),
        distance: "100m from Main Gate".to_string(),
        rating: 4.0,
        image: "https://picsum.photos/800/600".to_string(),
        recommended: false,
        amenities: vec!["WiFi".to_string()],
    }
}

/// Create a listing with the fields the query pipeline sorts and filters on.
pub fn priced_listing(
    id: &str,
    affiliation_id: &str,
    price_range: &str,
    rating: f64,
    recommended: bool,
) -> Listing {
    Listing {
        price_range: price_range.to_string(),
        rating,
        recommended,
        ..listing(id, affiliation_id)
    }
}

/// Create a post with default test values.
pub fn post(id: &str, kind: PostKind) -> Post {
    Post {
        id: id.to_string(),
        kind,
        title: format!("Test {} {}", kind, id),
        description: "Test description".to_string(),
        date: "Oct 24, 2023".to_string(),
        image: None,
    }
}

/// Create a spotlight profile with default test values.
pub fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("Student {}", id),
        affiliation: "Makerere University".to_string(),
        achievement: "Test achievement".to_string(),
        image: "https://picsum.photos/400/400".to_string(),
        field: "Engineering".to_string(),
    }
}
