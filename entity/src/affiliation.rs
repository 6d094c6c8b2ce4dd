use serde::{Deserialize, Serialize};

/// An institution listings are grouped by, such as a university.
///
/// Reference data: seeded once and never mutated through the catalog API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    pub id: String,
    /// Display name, e.g. "Makerere University"
    pub name: String,
    /// Short code, e.g. "MAK"
    pub short_name: String,
    pub location: String,
}
