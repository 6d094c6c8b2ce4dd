use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::client::form::{optional, required, FormError, PROFILE_PLACEHOLDER_IMAGE};

/// Spotlight profile form fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    pub affiliation: String,
    pub achievement: String,
    pub field: String,
    pub image: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            affiliation: profile.affiliation.clone(),
            achievement: profile.achievement.clone(),
            field: profile.field.clone(),
            image: profile.image.clone(),
        }
    }

    /// Validates the submitted values into a profile, keeping the id of `editing` if given.
    pub fn into_profile(self, editing: Option<&Profile>) -> Result<Profile, FormError> {
        Ok(Profile {
            id: editing.map(|p| p.id.clone()).unwrap_or_default(),
            name: required(&self.name, "name")?,
            affiliation: required(&self.affiliation, "affiliation")?,
            achievement: required(&self.achievement, "achievement")?,
            image: optional(&self.image).unwrap_or_else(|| PROFILE_PLACEHOLDER_IMAGE.to_string()),
            field: optional(&self.field).unwrap_or_default(),
        })
    }
}
