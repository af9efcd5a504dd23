// File: src/persistence.rs
use crate::core::dictionary::PronunciationDictionary;
use crate::error::{LoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Identifies the dictionary file a snapshot was built from.
/// Written ahead of the dictionary; any difference means the snapshot is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub source: PathBuf,
    pub len: u64,
    pub modified: SystemTime,
}

impl SnapshotHeader {
    pub fn for_source(source: &Path) -> Result<Self> {
        let canonical = fs::canonicalize(source).map_err(LoreError::read(source))?;
        let meta = fs::metadata(&canonical).map_err(LoreError::read(source))?;
        let modified = meta.modified().map_err(LoreError::read(source))?;
        Ok(Self {
            source: canonical,
            len: meta.len(),
            modified,
        })
    }
}

/// Writes the header and the parsed dictionary as a bincode snapshot. The
/// file is written next to its destination and renamed into place, so
/// readers never see a half-written snapshot.
pub fn save_to_disk(header: &SnapshotHeader, dict: &PronunciationDictionary, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, header)?;
        bincode::serialize_into(&mut writer, dict)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<(SnapshotHeader, PronunciationDictionary)> {
    let mut reader = open_snapshot(path)?;
    let header = read_header(&mut reader)?;
    let dict: PronunciationDictionary = bincode::deserialize_from(reader)?;
    Ok((header, dict))
}

fn open_snapshot(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(LoreError::read(path))?;
    Ok(BufReader::new(file))
}

fn read_header(reader: &mut impl Read) -> Result<SnapshotHeader> {
    Ok(bincode::deserialize_from(reader)?)
}

/// Loads `source` through its snapshot. The snapshot is used only when its
/// header matches the source's canonical path, length and mtime; a missing,
/// mismatched or unreadable one is rebuilt. Failing to write the new
/// snapshot is logged, not returned.
pub fn load_or_build(source: &Path, snapshot: &Path) -> Result<PronunciationDictionary> {
    let expected = SnapshotHeader::for_source(source)?;

    if snapshot.exists() {
        match reuse_snapshot(snapshot, &expected) {
            Ok(Some(dict)) => {
                debug!(path = %snapshot.display(), words = dict.len(), "dictionary snapshot reused");
                return Ok(dict);
            }
            Ok(None) => debug!(path = %snapshot.display(), "dictionary snapshot is for another source, rebuilding"),
            Err(e) => warn!(path = %snapshot.display(), error = %e, "dictionary snapshot unreadable, rebuilding"),
        }
    }

    let dict = PronunciationDictionary::load(source)?;
    match save_to_disk(&expected, &dict, snapshot) {
        Ok(()) => info!(path = %snapshot.display(), "dictionary snapshot written"),
        Err(e) => warn!(path = %snapshot.display(), error = %e, "could not write dictionary snapshot"),
    }
    Ok(dict)
}

/// `Ok(None)` when the header does not match; the dictionary body is then
/// never decoded.
fn reuse_snapshot(snapshot: &Path, expected: &SnapshotHeader) -> Result<Option<PronunciationDictionary>> {
    let mut reader = open_snapshot(snapshot)?;
    if read_header(&mut reader)? != *expected {
        return Ok(None);
    }
    Ok(Some(bincode::deserialize_from(reader)?))
}
