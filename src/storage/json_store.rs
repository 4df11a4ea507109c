//! Snapshot backend reading exported JSON collection files.
//!
//! Each collection lives in `<root>/<name>.json` as an object keyed by
//! document id. A missing file is an empty collection; a document that fails
//! to decode is skipped with a warning rather than failing the snapshot.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::warn;

use crate::domain::{Note, Remainder, RemainderStatus, Stone};
use crate::errors::{CoreError, Result};
use crate::storage::document;
use crate::storage::CollectionSource;

const STONES_FILE: &str = "stones.json";
const REMAINDERS_FILE: &str = "remainders.json";
const ARCHIVES_FILE: &str = "archives.json";
const NOTES_FILE: &str = "notes.json";

#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at `root`, or at the default data directory when
    /// `None` (`<platform data dir>/gemledger`).
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_data_dir()?,
        };
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_collection(&self, file: &str) -> Result<Vec<(String, Value)>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        let parsed: Value = serde_json::from_str(&data)?;
        let Value::Object(map) = parsed else {
            return Err(CoreError::StorageError(format!(
                "{} is not an object keyed by document id",
                path.display()
            )));
        };
        Ok(map.into_iter().collect())
    }

    fn decode_all<T>(
        &self,
        file: &str,
        decode: impl Fn(&str, &Value) -> Option<T>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for (id, doc) in self.read_collection(file)? {
            match decode(&id, &doc) {
                Some(record) => records.push(record),
                None => warn!(collection = file, id = %id, "skipping undecodable document"),
            }
        }
        Ok(records)
    }
}

impl CollectionSource for JsonStore {
    fn stones(&self) -> Result<Vec<Stone>> {
        self.decode_all(STONES_FILE, document::decode_stone)
    }

    fn remainders(&self) -> Result<Vec<Remainder>> {
        self.decode_all(REMAINDERS_FILE, document::decode_remainder)
    }

    fn archives(&self) -> Result<Vec<Remainder>> {
        let mut archives = self.decode_all(ARCHIVES_FILE, document::decode_remainder)?;
        // Archived records are settled sales whatever their stored status says.
        for archive in &mut archives {
            archive.status = RemainderStatus::Completed;
        }
        Ok(archives)
    }

    fn notes(&self) -> Result<Vec<Note>> {
        self.decode_all(NOTES_FILE, document::decode_note)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join("gemledger"))
        .ok_or_else(|| CoreError::StorageError("no usable data directory".into()))
}
