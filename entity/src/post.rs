use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Identified;

/// Category of a community post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    News,
    Event,
    Job,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::News => "news",
            PostKind::Event => "event",
            PostKind::Job => "job",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "news" => Ok(PostKind::News),
            "event" => Ok(PostKind::Event),
            "job" => Ok(PostKind::Job),
            other => Err(other.to_string()),
        }
    }
}

/// A news, event or job post shown in the community hub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    /// Free-text date such as "Oct 24, 2023" or "Deadline: Nov 30"
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Identified for Post {
    const ID_PREFIX: &'static str = "p";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
