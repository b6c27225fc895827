use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub following: u64,
    pub followers: u64,
    pub posts: u64,
}

/// Snapshot of the author taken when a post is created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Author {
            name: user.name.clone(),
            handle: user.handle.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub text: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub reshares: u64,
    pub comments: u64,
    // Viewer state. Only meaningful while there is a single viewer.
    pub liked: bool,
    pub reshared: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    Like,
    Reshare,
}
