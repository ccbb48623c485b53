//! Shared library for the kibom BOM generator.
//!
//! The crate turns a KiCad XML netlist export plus a master parts-price CSV
//! into a purchasing BOM: one row per distinct orderable part with
//! aggregated counts, naturally-sorted reference designators, vendor data,
//! and extended cost. The pipeline is a single linear pass:
//!
//! raw components → resolved catalog keys → grouped line items →
//! catalog-matched lines → sorted report rows
//!
//! Modules follow the stages: `netlist` reads components, `catalog` loads
//! and indexes the parts list, `aggregate` resolves keys and groups,
//! `bom` matches and prices, `report` renders the CSV. `refdes` carries the
//! natural ordering used for designator lists.

use anyhow::Result;

pub mod aggregate;
pub mod bom;
pub mod catalog;
pub mod netlist;
pub mod refdes;
pub mod report;

pub use aggregate::{LineItemGroup, VALUE_SUFFIX_CLASSES, aggregate, effective_part_number};
pub use bom::{BomLine, UNMATCHED, assemble, price_groups};
pub use catalog::{CatalogIndex, PartRecord, load_parts, load_parts_from_path, parse_price};
pub use netlist::{Component, Netlist};
pub use refdes::{natural_cmp, natural_key, sort_natural};
pub use report::{COLUMNS, write_bom, write_bom_file};

/// Run the whole pipeline on already-loaded inputs.
///
/// Returns the finished, sorted BOM lines. Unmatched parts come back with
/// sentinel vendor fields; a malformed catalog price is the only per-line
/// failure and aborts the run.
pub fn generate_bom(netlist: &Netlist, catalog: &CatalogIndex) -> Result<Vec<BomLine>> {
    let groups = aggregate(&netlist.components);
    let lines = price_groups(groups, catalog)?;
    Ok(assemble(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(reference: &str, part_number: &str, value: &str) -> Component {
        Component {
            reference: reference.to_string(),
            value: value.to_string(),
            part_number: part_number.to_string(),
        }
    }

    #[test]
    fn pipeline_counts_are_conserved() {
        let netlist = Netlist {
            source: "demo.kicad_sch".to_string(),
            date: "today".to_string(),
            components: vec![
                component("R1", "B-1000", "10k"),
                component("R2", "B-1000", "10k"),
                component("C1", "D-3000", "100n"),
                component("U1", "A-2000-0", "LM317"),
            ],
        };
        let catalog = CatalogIndex::build(vec![]);
        let lines = generate_bom(&netlist, &catalog).unwrap();
        assert_eq!(lines.len(), 3);
        let total: u32 = lines.iter().map(|l| l.count).sum();
        assert_eq!(total, netlist.components.len() as u32);
    }
}
