//! Feed state, formatting and interaction logic for the LinkUp social feed.
//!
//! The crate owns the post store and the pure projection from posts to view
//! models. Painting, preference storage and notifications belong to the host
//! and are reached through the traits in [`handlers`], [`core::prefs`] and
//! [`notify`].

pub mod composer;
pub mod config;
pub mod core;
pub mod feed;
pub mod follow;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod posts;
pub mod templates;
pub mod theme;
pub mod tilt;

pub use crate::core::errors::{FeedError, Result};
pub use crate::feed::{project, project_profile, PostViewModel, ProfileViewModel};
pub use crate::handlers::{FeedController, FeedPresenter, SharePayload};
pub use crate::models::models::{Author, Engagement, Post, PostId, User};
pub use crate::notify::{Notifier, Severity};
pub use crate::posts::PostStore;
