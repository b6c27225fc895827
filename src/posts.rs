use chrono::{DateTime, Utc};
use std::slice;
use tracing::debug;

use crate::config::MIN_SEARCH_LEN;
use crate::core::errors::{FeedError, Result};
use crate::core::helpers::{next_post_id, now};
use crate::models::models::{Author, Engagement, Post, PostId, User};

/// The feed's posts, newest first, plus the signed-in user.
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    current_user: User,
    last_id: u64,
}

impl PostStore {
    pub fn new(current_user: User) -> Self {
        Self::with_posts(current_user, Vec::new())
    }

    /// Seeds the store. Posts are reordered newest first; ties keep their
    /// given order.
    pub fn with_posts(current_user: User, mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let last_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0);
        Self {
            posts,
            current_user,
            last_id,
        }
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn create(&mut self, author: &User, text: &str, image: Option<String>) -> Result<&Post> {
        self.create_at(author, text, image, now())
    }

    /// Publishes a post stamped with `at` at the head of the feed.
    pub fn create_at(
        &mut self,
        author: &User,
        text: &str,
        image: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<&Post> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FeedError::Validation("Post text cannot be empty".to_string()));
        }

        let id = next_post_id(self.last_id, at);
        self.last_id = id;

        let post = Post {
            id: PostId(id),
            author: Author::from(author),
            text: text.to_string(),
            image,
            created_at: at,
            likes: 0,
            reshares: 0,
            comments: 0,
            liked: false,
            reshared: false,
        };
        debug!(post_id = id, "post created");

        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    pub fn find_by_id(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: PostId) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(FeedError::NotFound(id))
    }

    /// Flips the viewer's like or reshare and moves the counter with it.
    pub fn toggle_engagement(&mut self, id: PostId, kind: Engagement) -> Result<&Post> {
        let post = self.find_mut(id)?;
        let (flag, counter) = match kind {
            Engagement::Like => (&mut post.liked, &mut post.likes),
            Engagement::Reshare => (&mut post.reshared, &mut post.reshares),
        };

        *flag = !*flag;
        *counter = if *flag {
            counter.saturating_add(1)
        } else {
            counter.saturating_sub(1)
        };

        Ok(post)
    }

    /// Counts one more comment. There is no comment body to store.
    pub fn increment_comment(&mut self, id: PostId) -> Result<&Post> {
        let post = self.find_mut(id)?;
        post.comments = post.comments.saturating_add(1);
        Ok(post)
    }

    /// Posts whose text or author name contains `query`, ignoring case.
    /// Blank queries and queries under two characters match nothing.
    pub fn search<'a>(&'a self, query: &str) -> Search<'a> {
        let needle = is_searchable(query).then(|| query.to_lowercase());

        Search {
            posts: self.posts.iter(),
            needle,
        }
    }
}

/// Whether `query` is long enough to run a search at all.
pub fn is_searchable(query: &str) -> bool {
    !query.trim().is_empty() && query.chars().count() >= MIN_SEARCH_LEN
}

/// Lazy search results in store order. Clone it to restart.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    posts: slice::Iter<'a, Post>,
    needle: Option<String>,
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a Post;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_deref()?;
        self.posts.by_ref().find(|post| {
            post.text.to_lowercase().contains(needle)
                || post.author.name.to_lowercase().contains(needle)
        })
    }
}
