//! UI event handlers for the feed.
//!
//! Every entry point runs to completion: it validates its input, updates the
//! store and re-renders. Errors never escape a handler; they are shown to the
//! user through the [`Notifier`] instead.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::composer::Composer;
use crate::core::errors::FeedError;
use crate::core::helpers::now;
use crate::core::prefs::PreferenceStore;
use crate::feed::{project, project_profile, PostViewModel, ProfileViewModel};
use crate::follow::FollowList;
use crate::models::models::{Engagement, PostId};
use crate::navigation::{Focus, Shortcut, View};
use crate::notify::{Notifier, Severity};
use crate::posts::{is_searchable, PostStore};
use crate::theme::Theme;

/// The host side that paints what the controller produces.
pub trait FeedPresenter {
    fn render_feed(&mut self, posts: &[PostViewModel]);

    fn render_profile(&mut self, _profile: &ProfileViewModel) {}

    fn apply_theme(&mut self, _theme: Theme) {}

    fn show_view(&mut self, _view: View) {}

    fn focus(&mut self, _target: Focus) {}

    /// Opens the image viewer on `Some(uri)` and closes it on `None`.
    fn show_image(&mut self, _uri: Option<&str>) {}
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    /// Fallback for hosts without a native share sheet.
    pub clipboard_text: String,
}

pub struct FeedController<P, N, S> {
    store: PostStore,
    presenter: P,
    notifier: N,
    prefs: S,
    theme: Theme,
    view: View,
    search: Option<String>,
    composer: Composer,
    follows: FollowList,
    open_image: Option<String>,
    clock: fn() -> DateTime<Utc>,
}

impl<P, N, S> FeedController<P, N, S>
where
    P: FeedPresenter,
    N: Notifier,
    S: PreferenceStore,
{
    /// Takes ownership of the state. The theme preference is read here, once.
    pub fn new(store: PostStore, presenter: P, notifier: N, prefs: S) -> Self {
        let theme = Theme::load(&prefs);
        Self {
            store,
            presenter,
            notifier,
            prefs,
            theme,
            view: View::default(),
            search: None,
            composer: Composer::default(),
            follows: FollowList::default(),
            open_image: None,
            clock: now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// First paint: theme, profile card and the full feed.
    pub fn start(&mut self) {
        self.presenter.apply_theme(self.theme);
        self.render_profile();
        self.render();
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn prefs(&self) -> &S {
        &self.prefs
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn follows(&self) -> &FollowList {
        &self.follows
    }

    pub fn open_image(&self) -> Option<&str> {
        self.open_image.as_deref()
    }

    /// Visible posts: the search results while a search is active, otherwise
    /// the whole feed.
    pub fn visible_posts(&self) -> Vec<PostViewModel> {
        let at = (self.clock)();
        match &self.search {
            Some(query) => project(self.store.search(query), at),
            None => project(self.store.posts(), at),
        }
    }

    pub fn render(&mut self) {
        let posts = self.visible_posts();
        self.presenter.render_feed(&posts);
    }

    fn render_profile(&mut self) {
        let profile = project_profile(self.store.current_user());
        self.presenter.render_profile(&profile);
    }

    fn fail(&mut self, err: FeedError) {
        warn!(error = %err, "feed operation rejected");
        self.notifier.notify(&err.user_message(), err.severity());
    }

    pub fn on_publish(&mut self, text: &str, image: Option<String>) -> Option<PostId> {
        debug!("publish requested");
        let author = self.store.current_user().clone();
        let at = (self.clock)();
        match self.store.create_at(&author, text, image, at).map(|post| post.id) {
            Ok(id) => {
                info!(post_id = %id, "post published");
                self.search = None;
                self.render();
                self.notifier
                    .notify("Post published successfully!", Severity::Success);
                Some(id)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Publishes the composer draft and clears it when that succeeds.
    pub fn on_publish_draft(&mut self) -> Option<PostId> {
        let text = self.composer.text().to_string();
        let image = self.composer.image().map(str::to_string);
        let id = self.on_publish(&text, image)?;
        self.composer.clear();
        Some(id)
    }

    pub fn on_toggle_like(&mut self, id: PostId) {
        self.toggle(id, Engagement::Like);
    }

    pub fn on_toggle_reshare(&mut self, id: PostId) {
        self.toggle(id, Engagement::Reshare);
    }

    fn toggle(&mut self, id: PostId, kind: Engagement) {
        debug!(post_id = %id, ?kind, "toggle engagement");
        match self.store.toggle_engagement(id, kind).map(|_| ()) {
            Ok(()) => self.render(),
            Err(err) => self.fail(err),
        }
    }

    pub fn on_add_comment(&mut self, id: PostId) {
        debug!(post_id = %id, "add comment");
        match self.store.increment_comment(id).map(|_| ()) {
            Ok(()) => {
                self.notifier.notify("Comment added!", Severity::Info);
                self.render();
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn on_share(&mut self, id: PostId) -> Option<SharePayload> {
        debug!(post_id = %id, "share");
        let payload = self.store.find_by_id(id).map(|post| SharePayload {
            title: "Check out this post on LinkUp".to_string(),
            text: post.text.clone(),
            clipboard_text: format!("{} - Shared from LinkUp", post.text),
        });
        let Some(payload) = payload else {
            self.fail(FeedError::NotFound(id));
            return None;
        };

        self.notifier
            .notify("Post link copied to clipboard!", Severity::Success);
        self.render();
        Some(payload)
    }

    /// Filters the feed as the user types. Queries too short to search clear
    /// the filter so the whole feed shows again.
    pub fn on_search_input(&mut self, query: &str) {
        debug!(query, "search input");
        self.search = is_searchable(query).then(|| query.to_string());
        self.render();
    }

    pub fn on_toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "theme changed");
        if let Err(err) = self.theme.save(&mut self.prefs) {
            warn!(error = %err, "failed to save theme preference");
        }
        self.presenter.apply_theme(self.theme);
    }

    pub fn on_toggle_follow(&mut self, handle: &str) {
        let following = self.follows.toggle(handle);
        debug!(handle, following, "follow toggled");
        let message = if following {
            "Now following user"
        } else {
            "Unfollowed user"
        };
        self.notifier.notify(message, Severity::Info);
    }

    pub fn on_navigate(&mut self, view: View) {
        debug!(?view, "navigate");
        self.view = view;
        self.presenter.show_view(view);
        if view == View::Home {
            self.search = None;
            self.render();
        }
    }

    pub fn on_shortcut(&mut self, shortcut: Shortcut) {
        self.presenter.focus(shortcut.target());
    }

    pub fn on_open_image(&mut self, uri: &str) {
        debug!(uri, "open image");
        self.open_image = Some(uri.to_string());
        self.presenter.show_image(Some(uri));
    }

    /// Closing an already closed viewer does nothing.
    pub fn on_close_image(&mut self) {
        if self.open_image.take().is_some() {
            self.presenter.show_image(None);
        }
    }

    pub fn on_compose_input(&mut self, text: &str) {
        self.composer.set_text(text);
    }

    pub fn on_add_emoji(&mut self) -> &'static str {
        let emoji = self.composer.push_emoji(&mut rand::thread_rng());
        self.presenter.focus(Focus::Composer);
        emoji
    }

    pub fn on_attach_image(&mut self, uri: &str) {
        self.composer.attach_image(uri);
        self.notifier.notify("Image added to post!", Severity::Info);
    }

    /// `available` is whether the host could get a location fix.
    pub fn on_add_location(&mut self, available: bool) {
        if available {
            self.notifier.notify("Location added to post!", Severity::Info);
        } else {
            self.notifier
                .notify("Location services not available", Severity::Warning);
        }
    }
}
