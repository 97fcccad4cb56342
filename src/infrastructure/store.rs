//! JSON collection store
//!
//! Each collection persists as one JSON document under `.amity/data/`,
//! wrapped in a `{version, records}` envelope. Writes replace the whole
//! document through a temp-file rename.

use crate::error::{AmityError, Result};
use crate::infrastructure::Config;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage keys, one per collection
pub const PEOPLE_KEY: &str = "people";
pub const EVENTS_KEY: &str = "events";
pub const INDICATORS_KEY: &str = "indicators";
pub const CONTENT_KEY: &str = "communityContent";

/// Current document schema version
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    version: u32,
    records: Vec<T>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    records: &'a [T],
}

/// Abstract store for tracker operations
pub trait CollectionStore {
    /// Get the root directory of this store
    fn root(&self) -> &Path;

    /// Load configuration from .amity/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .amity/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the .amity directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .amity directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of CollectionStore
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the tracker root by walking up from the current directory.
    /// Checks the AMITY_ROOT environment variable first.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("AMITY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_amity_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(AmityError::Config(format!(
                    "AMITY_ROOT is set to '{}' but no .amity directory found. \
                    Run 'amity init' in that directory or unset AMITY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the tracker root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_amity_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(AmityError::NotAmityDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .amity directory
    fn has_amity_dir(path: &Path) -> bool {
        path.join(".amity").is_dir()
    }
}

impl CollectionStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_amity_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let amity_dir = self.root.join(".amity");

        if amity_dir.exists() {
            return Err(AmityError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(amity_dir.join("data"))?;
        Ok(())
    }
}

// Collection document operations (not part of trait - filesystem-specific)
impl FileStore {
    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(".amity").join("data").join(format!("{}.json", key))
    }

    /// Check if a collection document exists
    pub fn document_exists(&self, key: &str) -> bool {
        self.document_path(key).exists()
    }

    /// Load a collection document.
    ///
    /// Returns `Ok(None)` when no document has ever been written - that is
    /// "no data yet", not a failure. A document that exists but cannot be
    /// read or decoded is an error; it is never masked by defaults.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let path = self.document_path(key);

        if !path.exists() {
            debug!("collection '{}' has no document yet", key);
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            AmityError::Store(format!("failed to read collection '{}': {}", key, e))
        })?;

        match serde_json::from_str::<Envelope<T>>(&contents) {
            Ok(envelope) => {
                if envelope.version > SCHEMA_VERSION {
                    return Err(AmityError::Store(format!(
                        "collection '{}' has schema version {} but this build \
                        understands up to {}",
                        key, envelope.version, SCHEMA_VERSION
                    )));
                }
                Ok(Some(envelope.records))
            }
            Err(envelope_err) => {
                // Legacy documents are a bare top-level array (version 0);
                // they upgrade to the envelope on the next save.
                match serde_json::from_str::<Vec<T>>(&contents) {
                    Ok(records) => {
                        warn!("collection '{}' is a legacy bare-array document", key);
                        Ok(Some(records))
                    }
                    Err(_) => Err(AmityError::Store(format!(
                        "failed to decode collection '{}': {}",
                        key, envelope_err
                    ))),
                }
            }
        }
    }

    /// Save a collection document, replacing whatever was there
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let envelope = EnvelopeRef {
            version: SCHEMA_VERSION,
            records,
        };
        let payload = serde_json::to_string_pretty(&envelope)?;
        self.write_atomic(&self.document_path(key), &payload)?;
        debug!("saved {} records to collection '{}'", records.len(), key);
        Ok(())
    }

    /// Write using a best-effort atomic replace: write to a temp file in the
    /// same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.amity-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("collection.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::Indicator;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn indicator(id: &str, current: u32) -> Indicator {
        Indicator {
            id: id.to_string(),
            name: "Dates".to_string(),
            current,
            goal: 1,
        }
    }

    #[test]
    fn test_new_store() {
        let path = PathBuf::from("/tmp/test");
        let store = FileStore::new(path.clone());
        assert_eq!(store.root, path);
    }

    #[test]
    fn test_initialize_creates_structure() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();
        assert!(store.is_initialized());
        assert!(temp.path().join(".amity/data").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        store.initialize().unwrap();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".amity")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = FileStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_amity() {
        let temp = TempDir::new().unwrap();

        let result = FileStore::discover_from(temp.path());
        match result.unwrap_err() {
            AmityError::NotAmityDirectory(_) => {}
            other => panic!("Expected NotAmityDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_with_amity_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("AMITY_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".amity")).unwrap();
        std::env::set_var("AMITY_ROOT", temp.path());

        let store = FileStore::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_amity_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("AMITY_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("AMITY_ROOT", temp.path());

        match FileStore::discover().unwrap_err() {
            AmityError::Config(msg) => assert!(msg.contains("no .amity directory")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_document_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let loaded: Option<Vec<Indicator>> = store.load(INDICATORS_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let records = vec![indicator("1", 0), indicator("2", 3)];
        store.save(INDICATORS_KEY, &records).unwrap();

        let loaded: Vec<Indicator> = store.load(INDICATORS_KEY).unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_saved_document_carries_version() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.save(INDICATORS_KEY, &[indicator("1", 0)]).unwrap();

        let raw = fs::read_to_string(temp.path().join(".amity/data/indicators.json")).unwrap();
        assert!(raw.contains("\"version\": 1"));
        assert!(raw.contains("\"records\""));
    }

    #[test]
    fn test_load_legacy_bare_array() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        fs::write(
            temp.path().join(".amity/data/indicators.json"),
            r#"[{"id":"1","name":"Dates","current":0,"goal":1}]"#,
        )
        .unwrap();

        let loaded: Vec<Indicator> = store.load(INDICATORS_KEY).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Dates");
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        fs::write(
            temp.path().join(".amity/data/indicators.json"),
            r#"{"version":99,"records":[]}"#,
        )
        .unwrap();

        let result: Result<Option<Vec<Indicator>>> = store.load(INDICATORS_KEY);
        match result.unwrap_err() {
            AmityError::Store(msg) => assert!(msg.contains("schema version 99")),
            other => panic!("Expected Store error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_corrupt_document_is_error_not_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        fs::write(temp.path().join(".amity/data/indicators.json"), "not json").unwrap();

        let result: Result<Option<Vec<Indicator>>> = store.load(INDICATORS_KEY);
        assert!(matches!(result, Err(AmityError::Store(_))));
    }

    #[test]
    fn test_save_overwrites_existing_document() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        store.save(INDICATORS_KEY, &[indicator("1", 0)]).unwrap();
        store.save(INDICATORS_KEY, &[indicator("1", 5)]).unwrap();

        let loaded: Vec<Indicator> = store.load(INDICATORS_KEY).unwrap().unwrap();
        assert_eq!(loaded[0].current, 5);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let config = Config::new();
        store.save_config(&config).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.row_height, config.row_height);
        assert_eq!(loaded.recent_days, config.recent_days);
    }
}
