use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::THEME_KEY;
use crate::core::prefs::PreferenceStore;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button, which shows the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    /// Reads the saved theme. Missing or unknown values fall back to light.
    pub fn load(prefs: &impl PreferenceStore) -> Self {
        prefs
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn save(self, prefs: &mut impl PreferenceStore) -> anyhow::Result<()> {
        prefs.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
