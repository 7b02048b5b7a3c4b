//! JSON document store
//!
//! Keeps the catalog, the profile and the history as three pretty-printed
//! JSON files in one data directory. Writes go through a temporary file
//! and an atomic rename; concurrent writers resolve as last write wins.

use atomicwrites::{AtomicFile, OverwriteBehavior};
use palate_core::{Catalog, Error, HistoryRecord, Profile, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The documents kept in a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Catalog,
    Profile,
    History,
}

impl Document {
    pub fn file_name(self) -> &'static str {
        match self {
            Document::Catalog => "catalog.json",
            Document::Profile => "profile.json",
            Document::History => "history.json",
        }
    }
}

/// File-backed store for the three documents
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, document: Document) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    /// Read and parse a document; `Ok(None)` when the file does not exist
    fn read<T: DeserializeOwned>(&self, document: Document) -> Result<Option<T>> {
        let path = self.path(document);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read(&path)?;
        let value = serde_json::from_slice(&data)
            .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
        Ok(Some(value))
    }

    fn write<T: Serialize + ?Sized>(&self, document: Document, value: &T) -> Result<()> {
        let path = self.path(document);
        let mut data = serde_json::to_vec_pretty(value)?;
        data.push(b'\n');

        AtomicFile::new(&path, OverwriteBehavior::AllowOverwrite)
            .write(|f| f.write_all(&data))
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = data.len(), "document saved");
        Ok(())
    }

    /// The catalog is required: absent or malformed is an error
    pub fn load_catalog(&self) -> Result<Catalog> {
        self.read(Document::Catalog)?.ok_or_else(|| {
            Error::Storage(format!("catalog not found at {}", self.path(Document::Catalog).display()))
        })
    }

    pub fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        self.write(Document::Catalog, catalog)
    }

    /// Load the profile, falling back to the default.
    ///
    /// An absent or malformed profile is replaced on disk by the default.
    pub fn load_profile(&self) -> Profile {
        match self.read::<Profile>(Document::Profile) {
            Ok(Some(profile)) => return profile,
            Ok(None) => debug!("no stored profile, creating default"),
            Err(e) => warn!(error = %e, "profile document unreadable, overwriting with default profile"),
        }

        let profile = Profile::default();
        if let Err(e) = self.save_profile(&profile) {
            warn!(error = %e, "failed to write default profile");
        }
        profile
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.write(Document::Profile, profile)
    }

    /// Load the history; absent or malformed reads as empty
    pub fn load_history(&self) -> Vec<HistoryRecord> {
        match self.read::<Vec<HistoryRecord>>(Document::History) {
            Ok(Some(history)) => history,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "history document unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn save_history(&self, history: &[HistoryRecord]) -> Result<()> {
        self.write(Document::History, history)
    }

    /// Append one record and save the history
    pub fn append_history(&self, record: HistoryRecord) -> Result<()> {
        let mut history = self.load_history();
        history.push(record);
        self.save_history(&history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use palate_core::{AttributeVector, Item};

    fn store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_catalog_required() {
        let (_dir, store) = store();
        assert!(matches!(store.load_catalog(), Err(Error::Storage(_))));

        std::fs::write(store.path(Document::Catalog), "{not json").unwrap();
        assert!(matches!(store.load_catalog(), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_catalog_save_and_load() {
        let (_dir, store) = store();
        let catalog = Catalog::new(vec![Item::new("A", "first", AttributeVector::splat(0.3))]);
        store.save_catalog(&catalog).unwrap();
        assert_eq!(store.load_catalog().unwrap(), catalog);
    }

    #[test]
    fn test_catalog_with_unnamed_entry_loads() {
        let (_dir, store) = store();
        std::fs::write(
            store.path(Document::Catalog),
            r#"[{"name": "A", "description": "kept", "attributes": {"sweetness": 1.0,
                 "spiciness": 0.0, "price": 0.0, "rating": 0.0, "distance": 0.0}},
                {"description": "entry without a name", "attributes": null}]"#,
        )
        .unwrap();

        let catalog = store.load_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("A").is_some());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_profile_absent_creates_default() {
        let (_dir, store) = store();
        assert_eq!(store.load_profile(), Profile::default());
        assert!(store.path(Document::Profile).exists());
    }

    #[test]
    fn test_profile_malformed_overwritten() {
        let (_dir, store) = store();
        std::fs::write(store.path(Document::Profile), r#"{"sweetness": 0.9}"#).unwrap();

        assert_eq!(store.load_profile(), Profile::default());

        let on_disk: Profile =
            serde_json::from_slice(&std::fs::read(store.path(Document::Profile)).unwrap()).unwrap();
        assert_eq!(on_disk, Profile::default());
    }

    #[test]
    fn test_profile_roundtrip() {
        let (_dir, store) = store();
        let profile = Profile::new(AttributeVector::new([0.9, 0.1, 0.2, 0.3, 0.4]));
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile(), profile);
    }

    #[test]
    fn test_history_absent_or_malformed_is_empty() {
        let (_dir, store) = store();
        assert!(store.load_history().is_empty());

        std::fs::write(store.path(Document::History), "null").unwrap();
        assert!(store.load_history().is_empty());

        std::fs::write(store.path(Document::History), "garbage").unwrap();
        assert!(store.load_history().is_empty());
    }

    #[test]
    fn test_append_history_keeps_order() {
        let (_dir, store) = store();
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        store.append_history(HistoryRecord::new("A", day)).unwrap();
        store.append_history(HistoryRecord::new("B", day)).unwrap();

        let history = store.load_history();
        let names: Vec<_> = history.iter().map(|r| r.item_name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_reads_legacy_history_fields() {
        let (_dir, store) = store();
        std::fs::write(
            store.path(Document::History),
            r#"[{"restaurant_name": "A", "order_date": "2024-02-03"}]"#,
        )
        .unwrap();
        assert_eq!(store.load_history()[0].item_name, "A");
    }
}
