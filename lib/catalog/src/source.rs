//! Record sources
//!
//! The abstract capability the core depends on: something that yields a
//! finite collection of validated card records. Network fetching lives
//! behind this seam in external collaborators; this crate ships a snapshot
//! file source for saved feed responses.

use std::fs;
use std::path::{Path, PathBuf};

use cardex_core::CardRecord;
use tracing::info;

use crate::error::Result;
use crate::feed::{load_records, FeedPage};

/// A finite source of validated card records.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<CardRecord>>;
}

/// Reads a saved feed response (one JSON page envelope) from disk.
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonSnapshotSource {
    fn fetch(&self) -> Result<Vec<CardRecord>> {
        let contents = fs::read_to_string(&self.path)?;
        let page: FeedPage = serde_json::from_str(&contents)?;
        let records = load_records(page.data)?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "loaded catalog snapshot"
        );
        Ok(records)
    }
}

/// Hands back an in-memory record set; the fixture source for tests and
/// embedded catalogs.
pub struct StaticSource {
    records: Vec<CardRecord>,
}

impl StaticSource {
    #[must_use]
    pub fn new(records: Vec<CardRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self) -> Result<Vec<CardRecord>> {
        Ok(self.records.clone())
    }
}
