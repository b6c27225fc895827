use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::models::models::{Author, Post, PostId, User};
use crate::posts::PostStore;

const SAMPLE_FEED: &str = include_str!("../../static/sample_feed.json");

#[derive(Deserialize)]
struct SampleFeed {
    current_user: User,
    posts: Vec<SamplePost>,
}

// Sample posts carry an age instead of a timestamp so the feed always looks
// fresh relative to startup.
#[derive(Deserialize)]
struct SamplePost {
    id: u64,
    author: Author,
    text: String,
    image: Option<String>,
    age_minutes: i64,
    likes: u64,
    reshares: u64,
    comments: u64,
    liked: bool,
    reshared: bool,
}

/// Builds the store shown on first load: the sample posts aged relative to
/// `now`, plus the signed-in user.
pub fn sample_store(now: DateTime<Utc>) -> anyhow::Result<PostStore> {
    let feed: SampleFeed = serde_json::from_str(SAMPLE_FEED)?;

    let posts = feed
        .posts
        .into_iter()
        .map(|p| Post {
            id: PostId(p.id),
            author: p.author,
            text: p.text,
            image: p.image,
            created_at: now - Duration::minutes(p.age_minutes),
            likes: p.likes,
            reshares: p.reshares,
            comments: p.comments,
            liked: p.liked,
            reshared: p.reshared,
        })
        .collect();

    Ok(PostStore::with_posts(feed.current_user, posts))
}
