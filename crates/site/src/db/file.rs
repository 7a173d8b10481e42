//! File-backed storage backend.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use uuid::Uuid;

use super::{KeyValueStorage, StorageError, validate_key};

/// Storage with one `<key>.json` file per key under a root directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers see either the old or the new value, never a
/// torn one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4()));

        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let storage = FileStorage::open(&root).unwrap();
        assert!(root.is_dir());
        storage.set("registrations", "[]").unwrap();
        assert!(root.join("registrations.json").is_file());
    }

    #[test]
    fn test_values_land_in_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert_eq!(storage.get("drinkSelection").unwrap(), None);
        storage.set("drinkSelection", "[]").unwrap();

        let on_disk = fs::read_to_string(dir.path().join("drinkSelection.json")).unwrap();
        assert_eq!(on_disk, "[]");
        assert_eq!(storage.get("drinkSelection").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("registrations", "[1]").unwrap();
        storage.set("registrations", "[1,2]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["registrations.json"]);
        assert_eq!(storage.get("registrations").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert!(matches!(
            storage.get("../secrets"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
