use serde::{Deserialize, Serialize};

use crate::Identified;

/// A spotlighted student.
///
/// `affiliation` is free text and deliberately not a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub affiliation: String,
    pub achievement: String,
    pub image: String,
    /// Field of study
    pub field: String,
}

impl Identified for Profile {
    const ID_PREFIX: &'static str = "s";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
