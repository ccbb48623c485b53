//! Records and CSV loading for the master parts list.
//!
//! The parts list is a hand-maintained CSV keyed by company part number.
//! Required columns are located by header name so the file may carry any
//! number of extra columns (comments, symbol names) in any order. The price
//! column is matched by the `Price Each` prefix because its full header
//! embeds the quote quantity, e.g. `Price Each (qty 25)`.
//!
//! Prices stay as display strings on the record; [`PartRecord::unit_price`]
//! parses on demand so a malformed price aborts the run with the offending
//! part number, rather than corrupting cost totals or failing on catalog
//! rows no design ever references.

use anyhow::{Context, Result, anyhow, bail};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

const COL_PART_NUMBER: &str = "Part Number";
const COL_VENDOR: &str = "Vendor";
const COL_VENDOR_PN: &str = "Vendor P/N";
const COL_PACKAGE: &str = "Package";
const COL_QTY_ON_HAND: &str = "Quantity On Hand";
const COL_DESCRIPTION: &str = "Description";
const COL_PRICE_PREFIX: &str = "Price Each";

/// One row of the master parts list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartRecord {
    /// Company part number; the catalog key.
    pub part_number: String,
    pub vendor: String,
    pub vendor_part_number: String,
    pub package: String,
    /// Stock count, kept verbatim as entered in the parts list.
    pub quantity_on_hand: String,
    /// Display price, possibly with a currency symbol, e.g. `$0.0523`.
    pub price: String,
    pub description: String,
}

impl PartRecord {
    /// Parse the display price into a unit cost.
    ///
    /// A price that is not numeric after currency-symbol stripping is a data
    /// error in the parts list; the caller is expected to abort the run.
    pub fn unit_price(&self) -> Result<f64> {
        parse_price(&self.price)
            .with_context(|| format!("catalog part {}", self.part_number))
    }
}

/// Strip any surrounding currency symbols and parse a price string.
pub fn parse_price(display: &str) -> Result<f64> {
    let bare = display.trim().trim_matches('$').trim();
    if bare.is_empty() {
        bail!("price field is empty");
    }
    bare.parse::<f64>()
        .map_err(|_| anyhow!("price {display:?} is not numeric"))
}

/// Read and parse the master parts list from disk.
pub fn load_parts_from_path(path: &Path) -> Result<Vec<PartRecord>> {
    let file =
        File::open(path).with_context(|| format!("opening parts list {}", path.display()))?;
    load_parts(BufReader::new(file))
        .with_context(|| format!("reading parts list {}", path.display()))
}

/// Parse the master parts list from any reader.
///
/// The first row must be the header row. Rows shorter than the header are
/// padded with empty fields rather than rejected.
pub fn load_parts<R: io::Read>(reader: R) -> Result<Vec<PartRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers().context("reading header row")?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        // Header is row 1, so data rows report as 2-based.
        let row = row.with_context(|| format!("row {}", idx + 2))?;
        records.push(columns.record(&row));
    }
    Ok(records)
}

/// Positions of the required columns within the header row.
struct ColumnMap {
    part_number: usize,
    vendor: usize,
    vendor_part_number: usize,
    package: usize,
    quantity_on_hand: usize,
    price: usize,
    description: usize,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let price = headers
            .iter()
            .position(|h| h.trim().starts_with(COL_PRICE_PREFIX));

        let mut missing = Vec::new();
        let mut require = |name: &'static str, position: Option<usize>| {
            if position.is_none() {
                missing.push(name);
            }
            position.unwrap_or(0)
        };

        let resolved = Self {
            part_number: require(COL_PART_NUMBER, find(COL_PART_NUMBER)),
            vendor: require(COL_VENDOR, find(COL_VENDOR)),
            vendor_part_number: require(COL_VENDOR_PN, find(COL_VENDOR_PN)),
            package: require(COL_PACKAGE, find(COL_PACKAGE)),
            quantity_on_hand: require(COL_QTY_ON_HAND, find(COL_QTY_ON_HAND)),
            price: require("Price Each (qty N)", price),
            description: require(COL_DESCRIPTION, find(COL_DESCRIPTION)),
        };

        if !missing.is_empty() {
            bail!("missing required columns: {}", missing.join(", "));
        }
        Ok(resolved)
    }

    fn record(&self, row: &csv::StringRecord) -> PartRecord {
        let field = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();
        PartRecord {
            part_number: field(self.part_number),
            vendor: field(self.vendor),
            vendor_part_number: field(self.vendor_part_number),
            package: field(self.package),
            quantity_on_hand: field(self.quantity_on_hand),
            price: field(self.price),
            description: field(self.description),
        }
    }
}
