//! Whole-collection persistence as one JSON document.
//!
//! Saves go through a sibling temp file followed by a rename so an
//! interrupted write never leaves a truncated document behind. A missing
//! file on load is a recoverable outcome; corrupt JSON or failed
//! validation is an error.

use std::fs;
use std::path::Path;

use crate::collection::PaletteCollection;
use crate::document::CollectionDocument;
use crate::error::Result;

/// Status describing how a collection was loaded from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionLoadStatus {
    Loaded,
    Missing,
}

/// Result of loading a collection from disk.
#[derive(Debug, Clone)]
pub struct CollectionLoad {
    collection: PaletteCollection,
    status: CollectionLoadStatus,
}

impl CollectionLoad {
    pub fn new(collection: PaletteCollection, status: CollectionLoadStatus) -> Self {
        Self { collection, status }
    }

    pub fn into_parts(self) -> (PaletteCollection, CollectionLoadStatus) {
        (self.collection, self.status)
    }
}

pub fn save_to_path(path: &Path, collection: &PaletteCollection) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let document = CollectionDocument::from_collection(collection);
    let payload = serde_json::to_string_pretty(&document)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<CollectionLoad> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CollectionLoad::new(
                PaletteCollection::default(),
                CollectionLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let document: CollectionDocument = serde_json::from_str(&data)?;
    Ok(CollectionLoad::new(
        document.to_collection()?,
        CollectionLoadStatus::Loaded,
    ))
}

fn write_atomic(path: &Path, payload: &[u8]) -> std::result::Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use swatchery_color::Color;

    use super::{CollectionLoadStatus, load_from_path, save_to_path};
    use crate::error::PaletteError;
    use crate::palette::Palette;
    use crate::collection::PaletteCollection;

    #[test]
    fn given_a_collection_when_save_and_load_then_round_trip_matches() {
        let root = test_temp_dir("round_trip");
        let path = root.join("palettes.json");
        let palette = Palette::new(
            "Sunset",
            vec![Color::new(255, 85, 0), Color::new(18, 52, 86)],
        );
        let collection = PaletteCollection::new(vec![palette]).unwrap();

        save_to_path(&path, &collection).expect("collection should save");
        let loaded = load_from_path(&path).expect("collection should load");
        let (loaded_collection, status) = loaded.into_parts();

        assert_eq!(status, CollectionLoadStatus::Loaded);
        assert_eq!(loaded_collection, collection);

        fs::remove_dir_all(&root).expect("temporary directory should be removed");
    }

    #[test]
    fn given_no_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("palettes.json");

        let loaded = load_from_path(&path).expect("missing file should not error");
        let (collection, status) = loaded.into_parts();

        assert_eq!(status, CollectionLoadStatus::Missing);
        assert_eq!(collection.len(), 1);

        fs::remove_dir_all(&root).expect("temporary directory should be removed");
    }

    #[test]
    fn given_corrupt_json_when_load_then_fails_closed() {
        let root = test_temp_dir("corrupt");
        let path = root.join("palettes.json");
        fs::write(&path, "{ not json").expect("test payload should be written");

        assert!(matches!(
            load_from_path(&path),
            Err(PaletteError::Json(_))
        ));

        fs::remove_dir_all(&root).expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_color_when_load_then_validation_names_the_index() {
        let root = test_temp_dir("invalid_color");
        let path = root.join("palettes.json");
        fs::write(
            &path,
            r##"{"palettes":[{"id":"x","name":"y","colors":["#FF0000","#ZZZ"]}]}"##,
        )
        .expect("test payload should be written");

        match load_from_path(&path) {
            Err(PaletteError::InvalidColor { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected invalid color error, got {other:?}"),
        }

        fs::remove_dir_all(&root).expect("temporary directory should be removed");
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let root = test_temp_dir("atomic");
        let path = root.join("palettes.json");
        save_to_path(&path, &PaletteCollection::default())
            .expect("collection should save");

        assert!(path.exists());
        assert!(!root.join("palettes.json.tmp").exists());

        fs::remove_dir_all(&root).expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "swatchery-storage-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir).expect("temporary directory should be created");
        dir
    }
}
