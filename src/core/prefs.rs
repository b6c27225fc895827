use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// String-keyed preference storage owned by the host.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Default, Debug, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferences {
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => HashMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse preferences at {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read preferences at {}", path.display()))
            }
        };
        Ok(Self { path, values })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let body = serde_json::to_vec_pretty(&self.values)?;
        fs::write(&self.path, body)
            .with_context(|| format!("Failed to write preferences at {}", self.path.display()))
    }
}
