use chrono::{DateTime, Duration, TimeZone, Utc};
use linkup::core::format::{format_abbreviated_number, format_relative_time, highlight_tags};
use linkup::core::seed::sample_store;
use linkup::posts::PostStore;
use linkup::{project, project_profile, Author, Engagement, FeedError, PostId, User};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn arjun() -> User {
    User {
        id: 1,
        name: "Arjun Sharma".to_string(),
        handle: "@arjunsharma".to_string(),
        avatar: "https://example.com/arjun.jpg".to_string(),
        following: 1200,
        followers: 5800,
        posts: 234,
    }
}

fn priya() -> User {
    User {
        id: 2,
        name: "Priya Patel".to_string(),
        handle: "@priyapatel".to_string(),
        avatar: "https://example.com/priya.jpg".to_string(),
        following: 10,
        followers: 20,
        posts: 3,
    }
}

fn ago(seconds: i64) -> String {
    let now = fixed_now();
    format_relative_time(now - Duration::seconds(seconds), now)
}

#[test]
fn test_relative_time_boundaries() {
    assert_eq!(ago(0), "Just now");
    assert_eq!(ago(59), "Just now");
    assert_eq!(ago(61), "1m");
    assert_eq!(ago(59 * 60), "59m");
    assert_eq!(ago(60 * 60), "1h");
    assert_eq!(ago(23 * 3600 + 59 * 60), "23h");
    assert_eq!(ago(24 * 3600), "1d");
    assert_eq!(ago(6 * 86400 + 23 * 3600), "6d");
    assert_eq!(ago(7 * 86400), "3/8/2024");
}

#[test]
fn test_future_timestamp_is_just_now() {
    let now = fixed_now();
    assert_eq!(format_relative_time(now + Duration::minutes(5), now), "Just now");
}

#[test]
fn test_abbreviated_numbers() {
    assert_eq!(format_abbreviated_number(999), "999");
    assert_eq!(format_abbreviated_number(1200), "1.2K");
    assert_eq!(format_abbreviated_number(5_800_000), "5.8M");
}

#[test]
fn test_highlight_tags_wraps_hashtags_and_mentions() {
    let out = highlight_tags("Chai with @kavya_s #Chai #Coding!");
    assert_eq!(
        out,
        r#"Chai with <span class="mention">@kavya_s</span> <span class="hashtag">#Chai</span> <span class="hashtag">#Coding</span>!"#
    );
    assert_eq!(highlight_tags("no tags here"), "no tags here");
}

#[test]
fn test_create_assigns_fresh_id_and_author() {
    let mut store = sample_store(fixed_now()).unwrap();
    let before: Vec<PostId> = store.posts().iter().map(|p| p.id).collect();

    let author = arjun();
    let post = store
        .create_at(&author, "  Hello LinkUp  ", None, fixed_now())
        .unwrap()
        .clone();

    assert!(!before.contains(&post.id));
    assert_eq!(post.author, Author::from(&author));
    assert_eq!(post.text, "Hello LinkUp");
    assert_eq!((post.likes, post.reshares, post.comments), (0, 0, 0));
    assert!(!post.liked && !post.reshared);
    assert_eq!(store.posts()[0].id, post.id);
    assert_eq!(store.len(), before.len() + 1);
}

#[test]
fn test_ids_stay_unique_within_one_millisecond() {
    let mut store = PostStore::new(arjun());
    let author = arjun();
    let first = store.create_at(&author, "one", None, fixed_now()).unwrap().id;
    let second = store.create_at(&author, "two", None, fixed_now()).unwrap().id;
    let third = store.create_at(&author, "three", None, fixed_now()).unwrap().id;

    assert!(first < second && second < third);
    let order: Vec<&str> = store.posts().iter().map(|p| p.text.as_str()).collect();
    assert_eq!(order, vec!["three", "two", "one"]);
}

#[test]
fn test_blank_post_is_rejected_without_changes() {
    let mut store = sample_store(fixed_now()).unwrap();
    let snapshot = store.posts().to_vec();

    for text in ["", "   ", "\n\t "] {
        let err = store.create_at(&arjun(), text, None, fixed_now()).unwrap_err();
        assert!(matches!(err, FeedError::Validation(_)));
    }

    assert_eq!(store.posts(), snapshot.as_slice());
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut store = sample_store(fixed_now()).unwrap();
    for post in store.posts().to_vec() {
        for kind in [Engagement::Like, Engagement::Reshare] {
            store.toggle_engagement(post.id, kind).unwrap();
            store.toggle_engagement(post.id, kind).unwrap();
        }
        assert_eq!(store.find_by_id(post.id), Some(&post));
    }
}

#[test]
fn test_toggle_moves_counter_by_one() {
    let mut store = sample_store(fixed_now()).unwrap();

    // Sample post 2 starts liked with 28 likes
    let liked = store.toggle_engagement(PostId(2), Engagement::Like).unwrap();
    assert!(!liked.liked);
    assert_eq!(liked.likes, 27);

    let reshared = store.toggle_engagement(PostId(1), Engagement::Reshare).unwrap();
    assert!(reshared.reshared);
    assert_eq!(reshared.reshares, 9);
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut store = sample_store(fixed_now()).unwrap();
    let snapshot = store.posts().to_vec();

    assert_eq!(
        store.toggle_engagement(PostId(999), Engagement::Like).unwrap_err(),
        FeedError::NotFound(PostId(999))
    );
    assert_eq!(
        store.increment_comment(PostId(999)).unwrap_err(),
        FeedError::NotFound(PostId(999))
    );
    assert!(store.find_by_id(PostId(999)).is_none());
    assert_eq!(store.posts(), snapshot.as_slice());
}

#[test]
fn test_increment_comment_always_adds_one() {
    let mut store = sample_store(fixed_now()).unwrap();
    store.increment_comment(PostId(3)).unwrap();
    let post = store.increment_comment(PostId(3)).unwrap();
    assert_eq!(post.comments, 20);
}

#[test]
fn test_short_queries_find_nothing() {
    let store = sample_store(fixed_now()).unwrap();
    for query in ["", " ", "a", "#", "  "] {
        assert_eq!(store.search(query).count(), 0, "query {:?}", query);
    }
}

#[test]
fn test_search_matches_text_or_author_in_store_order() {
    let store = sample_store(fixed_now()).unwrap();

    let by_text: Vec<u64> = store.search("india").map(|p| p.id.0).collect();
    assert_eq!(by_text, vec![1, 3, 4]);

    let by_author: Vec<u64> = store.search("SINGH").map(|p| p.id.0).collect();
    assert_eq!(by_author, vec![3, 4]);

    let expected: Vec<u64> = store
        .posts()
        .iter()
        .filter(|p| {
            p.text.to_lowercase().contains("sh") || p.author.name.to_lowercase().contains("sh")
        })
        .map(|p| p.id.0)
        .collect();
    let found: Vec<u64> = store.search("sh").map(|p| p.id.0).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_search_is_restartable() {
    let store = sample_store(fixed_now()).unwrap();
    let results = store.search("weekend");
    let first: Vec<_> = results.clone().collect();
    let second: Vec<_> = results.collect();
    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_sample_store_is_newest_first() {
    let store = sample_store(fixed_now()).unwrap();
    let ids: Vec<u64> = store.posts().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(store.current_user().handle, "@arjunsharma");
}

#[test]
fn test_like_then_render_end_to_end() {
    let now = fixed_now();
    let mut store = PostStore::new(arjun());
    let id = store.create_at(&priya(), "hello #India", None, now).unwrap().id;

    let post = store.toggle_engagement(id, Engagement::Like).unwrap();
    assert!(post.liked);
    assert_eq!(post.likes, 1);

    let views = project(store.posts(), now);
    assert_eq!(views.len(), 1);
    let view = &views[0];
    assert_eq!(view.id, id);
    assert_eq!(view.likes, "1");
    assert!(view.liked);
    assert!(!view.reshared);
    assert_eq!(view.time, "Just now");
    assert_eq!(view.author_name, "Priya Patel");
    assert_eq!(
        view.highlighted_text,
        r#"hello <span class="hashtag">#India</span>"#
    );
}

#[test]
fn test_projection_formats_sample_posts() {
    let now = fixed_now();
    let store = sample_store(now).unwrap();
    let views = project(store.posts(), now);

    let times: Vec<&str> = views.iter().map(|v| v.time.as_str()).collect();
    assert_eq!(times, vec!["2h", "4h", "6h", "8h", "12h"]);
    assert!(views[1].liked);
    assert!(views[2].reshared);
    assert_eq!(views[2].image, None);
}

#[test]
fn test_profile_counters_are_abbreviated() {
    let profile = project_profile(&arjun());
    assert_eq!(profile.following, "1.2K");
    assert_eq!(profile.followers, "5.8K");
    assert_eq!(profile.posts, "234");
}
