use std::io::{self, BufRead, Write};

use linkup::config;
use linkup::core::helpers::now;
use linkup::core::prefs::FilePreferences;
use linkup::core::seed::sample_store;
use linkup::navigation::{Focus, Shortcut, View};
use linkup::notify::Toasts;
use linkup::theme::Theme;
use linkup::{
    FeedController, FeedPresenter, Notifier, PostId, PostViewModel, ProfileViewModel, Severity,
};
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: post <text> | draft <text> | emoji | image <uri> | location | publish
          like <id> | reshare <id> | comment <id> | share <id>
          search <query> | follow <@handle> | theme | nav <view> | focus <k|n>
          open <id> | close | quit";

struct TerminalPresenter;

impl FeedPresenter for TerminalPresenter {
    fn render_feed(&mut self, posts: &[PostViewModel]) {
        println!();
        if posts.is_empty() {
            println!("  No posts found. Try adjusting your search terms.");
            return;
        }
        for post in posts {
            println!(
                "  [{}] {} {} · {}",
                post.id, post.author_name, post.author_handle, post.time
            );
            println!("      {}", post.text);
            if let Some(image) = &post.image {
                println!("      [image] {}", image);
            }
            println!(
                "      {} {}   {} {}   comments {}",
                if post.liked { "liked" } else { "likes" },
                post.likes,
                if post.reshared { "reshared" } else { "reshares" },
                post.reshares,
                post.comments,
            );
        }
    }

    fn render_profile(&mut self, profile: &ProfileViewModel) {
        println!(
            "{} {}  following {}  followers {}  posts {}",
            profile.name, profile.handle, profile.following, profile.followers, profile.posts
        );
    }

    fn apply_theme(&mut self, theme: Theme) {
        println!("theme: {}", theme);
    }

    fn show_view(&mut self, view: View) {
        println!("view: {}", view.section_id());
    }

    fn focus(&mut self, target: Focus) {
        println!("focus: {:?}", target);
    }

    fn show_image(&mut self, uri: Option<&str>) {
        match uri {
            Some(uri) => println!("viewing image: {}", uri),
            None => println!("image closed"),
        }
    }
}

struct TerminalNotifier {
    toasts: Toasts,
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.toasts.tick(now());
        self.toasts.push(message, severity, now());
        println!("({}) {}", severity.as_str(), message);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkup=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_id(arg: &str) -> Option<PostId> {
    arg.trim().parse::<u64>().ok().map(PostId)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let prefs = FilePreferences::open(config::prefs_path())?;
    let store = sample_store(now())?;
    let notifier = TerminalNotifier {
        toasts: Toasts::default(),
    };
    let mut app = FeedController::new(store, TerminalPresenter, notifier, prefs);
    app.start();
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim_end_matches(['\r', '\n']);
        let (cmd, arg) = input.split_once(' ').unwrap_or((input, ""));

        match (cmd, arg) {
            ("quit" | "exit", _) => break,
            ("post", text) => {
                app.on_publish(text, None);
            }
            ("draft", text) => app.on_compose_input(text),
            ("emoji", _) => {
                let emoji = app.on_add_emoji();
                println!("draft: {} (+{})", app.composer().text(), emoji);
            }
            ("image", uri) if !uri.trim().is_empty() => app.on_attach_image(uri.trim()),
            ("location", _) => app.on_add_location(false),
            ("publish", _) => {
                app.on_publish_draft();
            }
            ("like" | "reshare" | "comment" | "share", arg) => match parse_id(arg) {
                Some(id) => match cmd {
                    "like" => app.on_toggle_like(id),
                    "reshare" => app.on_toggle_reshare(id),
                    "comment" => app.on_add_comment(id),
                    _ => {
                        if let Some(payload) = app.on_share(id) {
                            println!("copied: {}", payload.clipboard_text);
                        }
                    }
                },
                None => println!("expected a post id, got {:?}", arg),
            },
            ("open", arg) => {
                let image = parse_id(arg)
                    .and_then(|id| app.store().find_by_id(id))
                    .and_then(|post| post.image.clone());
                match image {
                    Some(uri) => app.on_open_image(&uri),
                    None => println!("no image on post {:?}", arg),
                }
            }
            ("close", _) => app.on_close_image(),
            ("search", query) => app.on_search_input(query),
            ("follow", handle) if !handle.trim().is_empty() => app.on_toggle_follow(handle.trim()),
            ("theme", _) => app.on_toggle_theme(),
            ("nav", name) => match View::parse(name.trim()) {
                Some(view) => app.on_navigate(view),
                None => println!("unknown view {:?}", name),
            },
            ("focus", key) => match Shortcut::from_key(key.trim(), true) {
                Some(shortcut) => app.on_shortcut(shortcut),
                None => println!("no shortcut for {:?}", key),
            },
            ("", _) => {}
            _ => println!("{}", HELP),
        }
    }

    Ok(())
}
