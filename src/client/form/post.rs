use chrono::Utc;
use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::client::form::{optional, required, FormError};

/// Post form fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    /// One of `news`, `event` or `job`
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text date; blank uses today's date
    pub date: String,
    pub image: String,
}

impl PostForm {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            kind: post.kind.to_string(),
            date: post.date.clone(),
            image: post.image.clone().unwrap_or_default(),
        }
    }

    /// Validates the submitted values into a post, keeping the id of `editing` if given.
    pub fn into_post(self, editing: Option<&Post>) -> Result<Post, FormError> {
        let kind = self
            .kind
            .parse::<PostKind>()
            .map_err(|_| FormError::InvalidPostKind(self.kind.clone()))?;

        Ok(Post {
            id: editing.map(|p| p.id.clone()).unwrap_or_default(),
            kind,
            title: required(&self.title, "title")?,
            description: required(&self.description, "description")?,
            date: optional(&self.date).unwrap_or_else(today),
            image: optional(&self.image),
        })
    }
}

/// Today's date in the "Oct 24, 2023" format used by seeded posts
fn today() -> String {
    Utc::now().format("%b %d, %Y").to_string()
}
