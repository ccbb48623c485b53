//! Indexed view of the master parts list.
//!
//! The original workflow re-scanned the whole parts list for every BOM line;
//! the index builds one keyed map after loading so lookups are cheap no
//! matter how many line items a design produces. Part numbers are assumed
//! unique in the source data; when they are not, the first row wins and the
//! later rows are ignored, never silently overwritten.

use crate::catalog::model::{PartRecord, load_parts_from_path};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Master parts list keyed by company part number.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    by_part_number: BTreeMap<String, PartRecord>,
}

impl CatalogIndex {
    /// Load the parts list from disk and index it.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::build(load_parts_from_path(path)?))
    }

    /// Index already-loaded records, first-seen-wins on duplicate keys.
    pub fn build(records: Vec<PartRecord>) -> Self {
        let mut by_part_number = BTreeMap::new();
        for record in records {
            by_part_number
                .entry(record.part_number.clone())
                .or_insert(record);
        }
        Self { by_part_number }
    }

    /// Look up a part by its full catalog key.
    pub fn lookup(&self, part_number: &str) -> Option<&PartRecord> {
        self.by_part_number.get(part_number)
    }

    /// Number of distinct part numbers in the index.
    pub fn len(&self) -> usize {
        self.by_part_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_part_number.is_empty()
    }
}
