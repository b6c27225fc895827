use ammonia::Builder;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::collections::HashSet;

use crate::core::format::highlight_tags;
use crate::feed::PostViewModel;

const EMPTY_FEED: &str = r#"<div class="no-posts">
    <i class="fas fa-search"></i>
    <h3>No posts found</h3>
    <p>Try adjusting your search terms</p>
</div>"#;

fn sanitize_text(text: &str) -> String {
    // Plain text only, markup is stripped and the rest escaped
    Builder::default()
        .tags(HashSet::new())
        .clean(text)
        .to_string()
}

/// Post body as markup: sanitized first, then tags highlighted.
pub fn render_body(text: &str) -> String {
    highlight_tags(&sanitize_text(text))
}

fn action_button(
    action: &str,
    active_class: Option<&str>,
    post_id: &str,
    icon: &str,
    count: Option<&str>,
) -> String {
    let class = match active_class {
        Some(active) => format!("post-action {}", active),
        None => "post-action".to_string(),
    };
    let count = count
        .map(|c| format!("\n        <span>{}</span>", encode_text(c)))
        .unwrap_or_default();
    format!(
        r#"<button class="{}" data-action="{}" data-post-id="{}">
        <i class="fas {}"></i>{}
    </button>"#,
        class, action, post_id, icon, count
    )
}

pub fn render_post_card(vm: &PostViewModel) -> String {
    let post_id = vm.id.to_string();
    let avatar = encode_double_quoted_attribute(&vm.avatar);
    let name_attr = encode_double_quoted_attribute(&vm.author_name);

    let image = vm
        .image
        .as_ref()
        .map(|src| {
            format!(
                r#"
        <img src="{}" alt="Post image" class="post-image" data-action="open-image">"#,
                encode_double_quoted_attribute(src)
            )
        })
        .unwrap_or_default();

    let actions = [
        action_button(
            "like",
            vm.liked.then_some("liked"),
            &post_id,
            "fa-heart",
            Some(vm.likes.as_str()),
        ),
        action_button(
            "retweet",
            vm.reshared.then_some("retweeted"),
            &post_id,
            "fa-retweet",
            Some(vm.reshares.as_str()),
        ),
        action_button("comment", None, &post_id, "fa-comment", Some(vm.comments.as_str())),
        action_button("share", None, &post_id, "fa-share", None),
    ]
    .join("\n    ");

    format!(
        r#"<div class="post-card" data-post-id="{id}">
    <div class="post-header">
        <img src="{avatar}" alt="{name_attr}" class="post-avatar">
        <div class="post-user-info">
            <h4>{name}</h4>
            <p>{handle}</p>
        </div>
        <span class="post-time">{time}</span>
    </div>
    <div class="post-content">
        <p class="post-text">{body}</p>{image}
    </div>
    <div class="post-actions-bar">
    {actions}
    </div>
</div>"#,
        id = post_id,
        avatar = avatar,
        name_attr = name_attr,
        name = encode_text(&vm.author_name),
        handle = encode_text(&vm.author_handle),
        time = encode_text(&vm.time),
        body = render_body(&vm.text),
        image = image,
        actions = actions,
    )
}

/// The whole feed, or the "No posts found" placeholder when empty.
pub fn render_feed(posts: &[PostViewModel]) -> String {
    if posts.is_empty() {
        return EMPTY_FEED.to_string();
    }
    posts
        .iter()
        .map(render_post_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replacement for an image that failed to load. The size is never below
/// 100 pixels and rounds to 100 or 150.
pub fn fallback_avatar_url(size: u32, seed: u32) -> String {
    let rounded = if size.max(100) <= 100 { 100 } else { 150 };
    format!("https://i.pravatar.cc/{}?u=cricket-{}", rounded, seed)
}
