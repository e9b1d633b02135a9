//! Favorites store
//!
//! Tracks the set of liked company ids. The set lives behind a
//! [`FavoritesStore`] so persistence can be swapped in tests; every mutation
//! writes the full set back immediately (write-through, not batched).

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from persisting the favorites set.
///
/// Loading never errors: missing or malformed data degrades to the empty
/// set (fail-open).
#[derive(Debug, Error, Diagnostic)]
pub enum FavoritesError {
    #[error("failed to write favorites to {path}")]
    #[diagnostic(
        code(orgdex::favorites::write),
        help("check that the directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode favorites")]
    #[diagnostic(code(orgdex::favorites::encode))]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value persistence seam for the favorites set.
pub trait FavoritesStore {
    /// Load the persisted set. Missing or malformed data loads as empty.
    fn load(&self) -> BTreeSet<String>;

    /// Persist the full set, replacing whatever was stored before.
    fn save(&self, ids: &BTreeSet<String>) -> Result<(), FavoritesError>;
}

/// JSON-file-backed store: the set is serialized as an ordered list of ids.
///
/// Order in the file carries no meaning; deduplication is guaranteed by the
/// set semantics upstream.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default per-user location under the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "orgdex")
            .map(|dirs| dirs.data_dir().join("favorites.json"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> BTreeSet<String> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(ids) => ids.into_iter().collect(),
            // A corrupt file is overwritten on the next toggle
            Err(_) => BTreeSet::new(),
        }
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| FavoritesError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let list: Vec<&String> = ids.iter().collect();
        let json = serde_json::to_string_pretty(&list)
            .map_err(|source| FavoritesError::Encode { source })?;
        std::fs::write(&self.path, json).map_err(|source| FavoritesError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ids: RefCell<BTreeSet<String>>,
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> BTreeSet<String> {
        self.ids.borrow().clone()
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<(), FavoritesError> {
        *self.ids.borrow_mut() = ids.clone();
        Ok(())
    }
}

/// The favorites set, loaded once at session start.
pub struct Favorites {
    ids: BTreeSet<String>,
    store: Box<dyn FavoritesStore>,
}

impl Favorites {
    /// Load the persisted set from `store`.
    pub fn load(store: Box<dyn FavoritesStore>) -> Self {
        let ids = store.load();
        Self { ids, store }
    }

    /// Flip membership for `id` and persist the new set.
    ///
    /// Returns the new membership: true when `id` is now a favorite.
    pub fn toggle(&mut self, id: &str) -> Result<bool, FavoritesError> {
        let added = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.store.save(&self.ids)?;
        Ok(added)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn all(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove every favorite and persist the empty set.
    pub fn clear(&mut self) -> Result<(), FavoritesError> {
        self.ids.clear();
        self.store.save(&self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut favorites = Favorites::load(Box::new(MemoryStore::default()));
        assert!(favorites.is_empty());

        assert!(favorites.toggle("c1").unwrap());
        assert!(favorites.is_favorite("c1"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("c1").unwrap());
        assert!(!favorites.is_favorite("c1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_every_toggle_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::load(Box::new(JsonFileStore::new(&path)));
        favorites.toggle("c2").unwrap();
        favorites.toggle("c1").unwrap();

        // A fresh load observes the persisted set
        let reloaded = Favorites::load(Box::new(JsonFileStore::new(&path)));
        assert!(reloaded.is_favorite("c1"));
        assert!(reloaded.is_favorite("c2"));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{ not json [").unwrap();

        let favorites = Favorites::load(Box::new(JsonFileStore::new(&path)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/favorites.json");

        let mut favorites = Favorites::load(Box::new(JsonFileStore::new(&path)));
        favorites.toggle("c1").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_persisted_form_is_an_ordered_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::load(Box::new(JsonFileStore::new(&path)));
        favorites.toggle("c9").unwrap();
        favorites.toggle("c1").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let ids: Vec<String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(ids, vec!["c1", "c9"]);
    }

    #[test]
    fn test_clear_persists_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::load(Box::new(JsonFileStore::new(&path)));
        favorites.toggle("c1").unwrap();
        favorites.clear().unwrap();

        let reloaded = Favorites::load(Box::new(JsonFileStore::new(&path)));
        assert!(reloaded.is_empty());
    }
}
