//! Matches line items against the parts catalog and prices them.
//!
//! Every group produces exactly one output line. A group whose key has no
//! catalog row is not an error: its vendor fields degrade to the `????`
//! sentinel and its cost to zero, so the gap is visible in the finished BOM
//! for a human to fix. A catalog price that will not parse is fatal for the
//! whole run; a silently-zero cost would corrupt the total.

use crate::aggregate::LineItemGroup;
use crate::catalog::CatalogIndex;
use anyhow::Result;

/// Sentinel for catalog fields of an unmatched line item.
pub const UNMATCHED: &str = "????";

/// One finished BOM row.
#[derive(Clone, Debug, PartialEq)]
pub struct BomLine {
    /// Full catalog key for the line.
    pub part_number: String,
    pub count: u32,
    /// Reference designators in natural order.
    pub references: Vec<String>,
    pub vendor_part_number: String,
    pub value: String,
    pub vendor: String,
    pub package: String,
    pub description: String,
    /// Unit price times count; exactly zero for unmatched lines.
    pub extended_cost: f64,
    pub quantity_on_hand: String,
}

/// Price every group against the catalog.
pub fn price_groups(groups: Vec<LineItemGroup>, catalog: &CatalogIndex) -> Result<Vec<BomLine>> {
    groups
        .into_iter()
        .map(|group| price_group(group, catalog))
        .collect()
}

fn price_group(group: LineItemGroup, catalog: &CatalogIndex) -> Result<BomLine> {
    let line = match catalog.lookup(&group.part_number) {
        Some(record) => {
            let extended_cost = record.unit_price()? * f64::from(group.count);
            BomLine {
                part_number: group.part_number,
                count: group.count,
                references: group.references,
                vendor_part_number: record.vendor_part_number.clone(),
                value: group.value,
                vendor: record.vendor.clone(),
                package: record.package.clone(),
                description: record.description.clone(),
                extended_cost,
                quantity_on_hand: record.quantity_on_hand.clone(),
            }
        }
        None => BomLine {
            part_number: group.part_number,
            count: group.count,
            references: group.references,
            vendor_part_number: UNMATCHED.to_string(),
            value: group.value,
            vendor: UNMATCHED.to_string(),
            package: UNMATCHED.to_string(),
            description: UNMATCHED.to_string(),
            extended_cost: 0.0,
            quantity_on_hand: UNMATCHED.to_string(),
        },
    };
    Ok(line)
}

/// Final ordering for the report: plain lexical by part number.
pub fn assemble(mut lines: Vec<BomLine>) -> Vec<BomLine> {
    lines.sort_by(|a, b| a.part_number.cmp(&b.part_number));
    lines
}
