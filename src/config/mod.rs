use camino::Utf8Path;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use thiserror::Error;

/// Shared handle to a [`ConfigStore`].
///
/// Multiple processors may reference the same store. The store provides no
/// internal locking: this alias is single-threaded by construction, and any
/// cross-thread sharing requires external synchronization by the caller.
pub type SharedConfig = Rc<RefCell<ConfigStore>>;

/// Errors from configuration file loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not open config file {path}: {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },
}

/// Ordered key-value configuration store with optional flat-file loading.
///
/// Keys map to string values; insertion order is preserved so that
/// enumeration is reproducible. The file format is one `key=value` pair per
/// line, `#`-prefixed comment lines, blank lines ignored; the first `=` on a
/// line is the separator, so values may themselves contain `=`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    entries: IndexMap<String, String>,
    loaded_from_file: bool,
}

impl ConfigStore {
    /// Create a store seeded with the default configuration values.
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("app.name".to_string(), crate::APP_NAME.to_string());
        entries.insert("app.version".to_string(), crate::VERSION.to_string());
        entries.insert("processing.mode".to_string(), "simple".to_string());
        entries.insert("processing.batch_size".to_string(), "10".to_string());
        entries.insert("logging.level".to_string(), "info".to_string());

        Self {
            entries,
            loaded_from_file: false,
        }
    }

    /// Wrap a new default store in a [`SharedConfig`] handle.
    pub fn new_shared() -> SharedConfig {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Replace the store contents with entries parsed from a file.
    ///
    /// If the file cannot be read, the existing entries are left untouched
    /// and an error is returned. Only once the file contents are in hand is
    /// the store cleared, so a failed load never loses configuration.
    ///
    /// Lines without an `=` separator are ignored.
    pub fn load_from_file<P: AsRef<Utf8Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Could not open config file: {}", path);
            ConfigError::FileOpen {
                path: path.to_string(),
                source,
            }
        })?;

        // File values take precedence over everything, defaults included.
        self.entries.clear();

        for line in contents.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim_matches([' ', '\t']);
                    let value = value.trim_matches([' ', '\t']);
                    self.entries.insert(key.to_string(), value.to_string());
                }
                None => {
                    tracing::debug!("Ignoring config line without separator: {:?}", line);
                }
            }
        }

        self.loaded_from_file = true;
        tracing::info!("Loaded {} config entries from {}", self.entries.len(), path);
        Ok(())
    }

    /// Insert or overwrite a value for a key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get the value for a key, or a fallback when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Enumerate all keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the current contents came from a successful file load.
    pub fn is_loaded(&self) -> bool {
        self.loaded_from_file
    }

    /// Remove all entries and clear the loaded flag.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.loaded_from_file = false;
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
