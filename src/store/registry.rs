/// Engine registry with write-through persistence
///
/// Owns the in-memory engine map and the browser path. Every successful
/// mutation rewrites the data file in full; nothing is batched. The store
/// assumes single-threaded access, exactly like the rest of the program.

use crate::core::{alias_key, SearchEngine};
use crate::error::{Result, SearchError};
use crate::store::format;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Registry of search engines keyed by the 32-bit alias hash
pub struct EngineStore {
    data_path: PathBuf,
    browser_path: Option<String>,
    engines: BTreeMap<u32, SearchEngine>,
}

impl EngineStore {
    /// Load the store from a data file
    ///
    /// An absent file is not an error: the store starts empty with no
    /// browser path and the file is only created on the first mutation.
    /// A present but undecodable file is fatal.
    ///
    /// # Arguments
    /// * `data_path` - Path to the data file
    ///
    /// # Returns
    /// * `Ok(EngineStore)` - Loaded (or fresh) store
    /// * `Err(SearchError::MalformedStore)` - File exists but is corrupt
    pub fn load<P: AsRef<Path>>(data_path: P) -> Result<Self> {
        let data_path = data_path.as_ref().to_path_buf();

        if !data_path.exists() {
            return Ok(Self {
                data_path,
                browser_path: None,
                engines: BTreeMap::new(),
            });
        }

        let text = fs::read_to_string(&data_path)?;
        let (browser_path, engines) = format::decode(&text)?;

        Ok(Self {
            data_path,
            browser_path,
            engines,
        })
    }

    /// Add an engine to the registry and persist
    ///
    /// The key is derived from the engine's alias. If the key is already
    /// taken, the registry is left unmodified and the failure distinguishes
    /// a textually equal alias (`DuplicateAlias`) from two distinct aliases
    /// hashing to the same key (`HashCollision`).
    pub fn add_engine(&mut self, engine: SearchEngine) -> Result<()> {
        let key = alias_key(&engine.short_name);

        if let Some(existing) = self.engines.get(&key) {
            if existing.short_name == engine.short_name {
                return Err(SearchError::DuplicateAlias(engine.to_string()));
            }
            return Err(SearchError::HashCollision {
                adding: engine.to_string(),
                existing: existing.to_string(),
            });
        }

        self.engines.insert(key, engine);
        self.persist()
    }

    /// Remove an engine by alias and persist
    ///
    /// # Returns
    /// * `Ok(SearchEngine)` - The removed engine, for reporting
    /// * `Err(SearchError::NotFound)` - No engine under that alias
    pub fn remove_engine(&mut self, short_name: &str) -> Result<SearchEngine> {
        let key = alias_key(short_name);
        let removed = self
            .engines
            .remove(&key)
            .ok_or_else(|| SearchError::NotFound(short_name.to_string()))?;
        self.persist()?;
        Ok(removed)
    }

    /// Overwrite the browser path and persist
    ///
    /// No validation that the path points at an executable.
    pub fn set_browser_path(&mut self, path: &str) -> Result<()> {
        self.browser_path = Some(path.to_string());
        self.persist()
    }

    /// The configured browser executable path, if any
    pub fn browser_path(&self) -> Option<&str> {
        self.browser_path.as_deref()
    }

    /// Look up an engine by alias
    pub fn get(&self, short_name: &str) -> Option<&SearchEngine> {
        self.engines.get(&alias_key(short_name))
    }

    /// Iterate all engines in map order
    pub fn engines(&self) -> impl Iterator<Item = &SearchEngine> {
        self.engines.values()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    // Full rewrite of the data file. Not atomic; a crash mid-write corrupts
    // the file.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = format::encode(self.browser_path.as_deref(), &self.engines)?;
        fs::write(&self.data_path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn google() -> SearchEngine {
        SearchEngine::new("Google", "g", "https://www.google.com/search?q=%s")
    }

    #[test]
    fn test_load_absent_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engines.dat");

        let store = EngineStore::load(&path).unwrap();

        assert!(store.is_empty());
        assert!(store.browser_path().is_none());
        // File is only created on the first mutation
        assert!(!path.exists());
    }

    #[test]
    fn test_add_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engines.dat");

        let mut store = EngineStore::load(&path).unwrap();
        store.set_browser_path("/usr/bin/browser").unwrap();
        store.add_engine(google()).unwrap();
        store
            .add_engine(SearchEngine::new(
                "DuckDuckGo",
                "d",
                "https://duckduckgo.com/?q=%s",
            ))
            .unwrap();

        let reloaded = EngineStore::load(&path).unwrap();
        assert_eq!(reloaded.browser_path(), Some("/usr/bin/browser"));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("g"), Some(&google()));
    }

    #[test]
    fn test_add_duplicate_alias() {
        let dir = TempDir::new().unwrap();
        let mut store = EngineStore::load(dir.path().join("engines.dat")).unwrap();

        store.add_engine(google()).unwrap();
        let result = store.add_engine(SearchEngine::new("Giphy", "g", "https://giphy.com/%s"));

        assert!(matches!(result, Err(SearchError::DuplicateAlias(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("g").unwrap().name, "Google");
    }

    #[test]
    fn test_add_hash_collision() {
        // Two distinct aliases that hash to the same 32-bit key
        let dir = TempDir::new().unwrap();
        let mut store = EngineStore::load(dir.path().join("engines.dat")).unwrap();

        store
            .add_engine(SearchEngine::new("First", "耀耀耀", "https://a.example/?q=%s"))
            .unwrap();
        let result =
            store.add_engine(SearchEngine::new("Second", "翽苲ŵ", "https://b.example/?q=%s"));

        assert!(matches!(result, Err(SearchError::HashCollision { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_engine() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engines.dat");
        let mut store = EngineStore::load(&path).unwrap();

        store.add_engine(google()).unwrap();
        let removed = store.remove_engine("g").unwrap();

        assert_eq!(removed.name, "Google");
        assert!(store.is_empty());

        let reloaded = EngineStore::load(&path).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_remove_unknown_alias() {
        let dir = TempDir::new().unwrap();
        let mut store = EngineStore::load(dir.path().join("engines.dat")).unwrap();
        store.add_engine(google()).unwrap();

        let result = store.remove_engine("x");

        assert!(matches!(result, Err(SearchError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // The store itself is exact; the dispatcher lower-cases before lookup
        let dir = TempDir::new().unwrap();
        let mut store = EngineStore::load(dir.path().join("engines.dat")).unwrap();
        store.add_engine(google()).unwrap();

        assert!(store.get("g").is_some());
        assert!(store.get("G").is_none());
    }

    #[test]
    fn test_set_browser_path_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engines.dat");

        let mut store = EngineStore::load(&path).unwrap();
        store.set_browser_path("/opt/brave/brave").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("/opt/brave/brave\r\n"));

        let reloaded = EngineStore::load(&path).unwrap();
        assert_eq!(reloaded.browser_path(), Some("/opt/brave/brave"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engines.dat");
        fs::write(&path, "no separator here").unwrap();

        let result = EngineStore::load(&path);
        assert!(matches!(result, Err(SearchError::MalformedStore(_))));
    }

    #[test]
    fn test_persist_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("engines.dat");

        let mut store = EngineStore::load(&path).unwrap();
        store.add_engine(google()).unwrap();

        assert!(path.exists());
    }
}
