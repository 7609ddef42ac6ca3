//! Persisted display preferences.
//!
//! Preferences are a flat string map keyed by `"grouping"` and `"ordering"`
//! holding the raw mode strings. They are read at startup and written every
//! time the user changes a mode.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TicketGridError};
use crate::paths;
use crate::types::{DisplaySettings, GroupingMode, OrderingMode};

pub const GROUPING_KEY: &str = "grouping";
pub const ORDERING_KEY: &str = "ordering";

const DEFAULT_GROUPING: &str = "status";
const DEFAULT_ORDERING: &str = "priority";

/// Synchronous key-value store for display preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used when nothing should touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// YAML-backed store. Every `set` rewrites the file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store in the configuration directory.
    pub fn open_default() -> Result<Self> {
        Self::open(paths::preferences_file())
    }

    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and treated as empty so that the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_yaml_ng::from_str::<Option<BTreeMap<String, String>>>(&content) {
                Ok(values) => values.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(
                        "Ignoring unreadable preferences at {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(&self.values)?;
        fs::write(&self.path, content).map_err(|e| {
            TicketGridError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write preferences at {}: {}",
                    self.path.display(),
                    e
                ),
            ))
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}

fn stored_or<S: PreferenceStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    store
        .get(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Restore the last-used display settings, defaulting to status/priority.
pub fn load_display_settings<S: PreferenceStore + ?Sized>(store: &S) -> DisplaySettings {
    let grouping = stored_or(store, GROUPING_KEY, DEFAULT_GROUPING);
    let ordering = stored_or(store, ORDERING_KEY, DEFAULT_ORDERING);
    DisplaySettings::from_raw(&grouping, &ordering)
}

pub fn save_grouping<S: PreferenceStore + ?Sized>(store: &mut S, grouping: GroupingMode) -> Result<()> {
    tracing::debug!("saving grouping preference: {}", grouping);
    store.set(GROUPING_KEY, &grouping.to_string())
}

pub fn save_ordering<S: PreferenceStore + ?Sized>(store: &mut S, ordering: OrderingMode) -> Result<()> {
    tracing::debug!("saving ordering preference: {}", ordering);
    store.set(ORDERING_KEY, &ordering.to_string())
}
