//! Projection from store state to display-ready view models.
//!
//! The projection is recomputed in full after every change. At feed sizes of
//! tens of posts that is cheaper than tracking what changed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::format::{format_abbreviated_number, format_relative_time, highlight_tags};
use crate::models::models::{Post, PostId, User};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PostViewModel {
    pub id: PostId,
    pub author_name: String,
    pub author_handle: String,
    pub avatar: String,
    pub time: String,
    pub text: String,
    pub highlighted_text: String,
    pub image: Option<String>,
    pub likes: String,
    pub reshares: String,
    pub comments: String,
    pub liked: bool,
    pub reshared: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewModel {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub following: String,
    pub followers: String,
    pub posts: String,
}

pub fn project_post(post: &Post, now: DateTime<Utc>) -> PostViewModel {
    PostViewModel {
        id: post.id,
        author_name: post.author.name.clone(),
        author_handle: post.author.handle.clone(),
        avatar: post.author.avatar.clone(),
        time: format_relative_time(post.created_at, now),
        text: post.text.clone(),
        highlighted_text: highlight_tags(&post.text),
        image: post.image.clone(),
        likes: format_abbreviated_number(post.likes),
        reshares: format_abbreviated_number(post.reshares),
        comments: format_abbreviated_number(post.comments),
        liked: post.liked,
        reshared: post.reshared,
    }
}

/// Projects `posts` in the order given.
pub fn project<'a, I>(posts: I, now: DateTime<Utc>) -> Vec<PostViewModel>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts.into_iter().map(|p| project_post(p, now)).collect()
}

pub fn project_profile(user: &User) -> ProfileViewModel {
    ProfileViewModel {
        name: user.name.clone(),
        handle: user.handle.clone(),
        avatar: user.avatar.clone(),
        following: format_abbreviated_number(user.following),
        followers: format_abbreviated_number(user.followers),
        posts: format_abbreviated_number(user.posts),
    }
}
