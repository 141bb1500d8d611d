// File: src/persistence.rs
use crate::core::dictionary::{GestureDictionary, SourceMapping};
use crate::core::types::GestureEntry;
use crate::error::DictionaryError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

const SNAPSHOT_EXTENSION: &str = "bin";

/// On-disk form of a compiled dictionary. Loading rebuilds through
/// `GestureDictionary::from_entries`, so a stale or foreign snapshot gets the
/// same normalization and validation as a JSON mapping.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    entries: Vec<GestureEntry>,
}

/// Reads the authored JSON gesture mapping.
pub fn load_mapping(path: &Path) -> Result<GestureDictionary, DictionaryError> {
    let reader = BufReader::new(File::open(path)?);
    let mapping: SourceMapping = serde_json::from_reader(reader)?;
    debug!(path = %path.display(), records = mapping.len(), "parsed gesture mapping");
    GestureDictionary::from_mapping(mapping)
}

/// Writes a compiled dictionary next to `path` and renames it into place,
/// so readers never observe a half-written snapshot.
pub fn save_snapshot(dictionary: &GestureDictionary, path: &Path) -> Result<(), DictionaryError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut entries: Vec<GestureEntry> = dictionary.entries().cloned().collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    let snapshot = Snapshot { entries };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!(path = %path.display(), entries = dictionary.len(), "saved dictionary snapshot");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<GestureDictionary, DictionaryError> {
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = bincode::deserialize_from(reader)?;
    GestureDictionary::from_entries(snapshot.entries)
}

/// Loads a `.bin` snapshot or, for any other extension, a JSON mapping.
pub fn load_dictionary(path: &Path) -> Result<GestureDictionary, DictionaryError> {
    let is_snapshot = path
        .extension()
        .map_or(false, |ext| ext == SNAPSHOT_EXTENSION);

    if is_snapshot {
        load_snapshot(path)
    } else {
        load_mapping(path)
    }
}
