use rand::Rng;

pub const EMOJIS: [&str; 10] = ["😀", "😂", "❤️", "👍", "🎉", "🔥", "💯", "✨", "🚀", "💡"];

/// The unpublished draft in the "create post" box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    image: Option<String>,
}

impl Composer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn attach_image(&mut self, uri: &str) {
        self.image = Some(uri.to_string());
    }

    /// Appends one emoji picked from [`EMOJIS`] and returns it.
    pub fn push_emoji<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let emoji = EMOJIS[rng.gen_range(0..EMOJIS.len())];
        self.text.push_str(emoji);
        emoji
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.image = None;
    }
}
