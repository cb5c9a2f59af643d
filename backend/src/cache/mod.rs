//! Load-once dataset cache.
//!
//! The interchange artifact is parsed on first access and kept for the
//! lifetime of the cache. There is no invalidation: a fresh artifact is
//! picked up only by building a new cache, i.e. by restarting the process.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::error::LoadResult;
use crate::models::CleanedShipmentRecord;
use crate::store::load_records;

/// The loaded interchange records plus their filter domains.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CleanedShipmentRecord>,
    carriers: Vec<String>,
    routes: Vec<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<CleanedShipmentRecord>) -> Self {
        let carriers = distinct(records.iter().map(|r| r.carrier_name.as_str()));
        let routes = distinct(records.iter().map(|r| r.route.as_str()));
        Self {
            records,
            carriers,
            routes,
        }
    }

    pub fn records(&self) -> &[CleanedShipmentRecord] {
        &self.records
    }

    /// Distinct carriers, in order of first appearance.
    pub fn carriers(&self) -> &[String] {
        &self.carriers
    }

    /// Distinct routes, in order of first appearance.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Process-wide handle on the interchange dataset.
///
/// Share it behind an `Arc`; concurrent first accesses are serialized by
/// the cell and every later read is lock-free.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceCell<Dataset>,
}

impl DatasetCache {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cell: OnceCell::new(),
        }
    }

    /// The dataset, loading it on first call.
    ///
    /// A failed load leaves the cache empty, so the next call retries.
    pub fn get(&self) -> LoadResult<&Dataset> {
        self.cell.get_or_try_init(|| {
            let records = load_records(&self.path)?;
            tracing::info!(
                path = %self.path.display(),
                records = records.len(),
                "interchange dataset loaded"
            );
            Ok(Dataset::from_records(records))
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
