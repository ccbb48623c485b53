//! Groups schematic components into BOM line items.
//!
//! Two jobs happen here. First, each component's stored part number is
//! resolved into its full catalog key: passive classes (capacitors,
//! inductors, resistors, oscillators) keep only a family prefix in their
//! symbol's `PN` field and get the electrical value appended, so `B-1000`
//! with value `10k` becomes `B-1000-10k`. Second, components sharing a
//! resolved key collapse into one line item carrying the total count and
//! every reference designator, sorted naturally.

use crate::netlist::Component;
use crate::refdes::natural_key;
use std::collections::BTreeMap;

/// Reference-designator prefixes whose catalog entries are shared families
/// specialized by value: capacitor, inductor, resistor, oscillator/crystal.
pub const VALUE_SUFFIX_CLASSES: [char; 4] = ['C', 'L', 'R', 'Y'];

/// Resolve a component's full catalog key.
///
/// No validation is applied to the value; an empty or odd value yields a key
/// that simply finds no catalog match downstream.
pub fn effective_part_number(component: &Component) -> String {
    match component.reference.chars().next() {
        Some(prefix) if VALUE_SUFFIX_CLASSES.contains(&prefix) => {
            format!("{}-{}", component.part_number, component.value)
        }
        _ => component.part_number.clone(),
    }
}

/// One BOM line item before catalog matching.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineItemGroup {
    /// Full catalog key shared by every component in the group.
    pub part_number: String,
    /// Representative value, taken from the first component seen.
    pub value: String,
    pub count: u32,
    /// Reference designators of every component in the group, in natural
    /// order after aggregation completes.
    pub references: Vec<String>,
}

/// Collapse components into line items, one per distinct catalog key.
///
/// Single pass over the input with a keyed map; input order does not affect
/// the result beyond which component donates the representative value.
/// Groups come back ordered by part number.
pub fn aggregate(components: &[Component]) -> Vec<LineItemGroup> {
    let mut groups: BTreeMap<String, LineItemGroup> = BTreeMap::new();

    for component in components {
        let key = effective_part_number(component);
        match groups.get_mut(&key) {
            Some(group) => {
                group.count += 1;
                group.references.push(component.reference.clone());
            }
            None => {
                groups.insert(
                    key.clone(),
                    LineItemGroup {
                        part_number: key,
                        value: component.value.clone(),
                        count: 1,
                        references: vec![component.reference.clone()],
                    },
                );
            }
        }
    }

    let mut groups: Vec<LineItemGroup> = groups.into_values().collect();
    for group in &mut groups {
        group.references.sort_by_cached_key(|r| natural_key(r));
    }
    groups
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
    fn passive_classes_append_value_suffix() {
        for prefix in ["C1", "L3", "R12", "Y1"] {
            let c = component(prefix, "B-1000", "10k");
            assert_eq!(effective_part_number(&c), "B-1000-10k");
        }
    }

    #[test]
    fn other_classes_keep_stored_key() {
        let c = component("U1", "A-2000", "ignored");
        assert_eq!(effective_part_number(&c), "A-2000");
        let c = component("J4", "L-1000-10", "Conn_01x10");
        assert_eq!(effective_part_number(&c), "L-1000-10");
    }

    #[test]
    fn identical_parts_collapse_into_one_group() {
        let components = [
            component("R1", "B-1000", "10k"),
            component("R2", "B-1000", "10k"),
        ];
        let groups = aggregate(&components);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].part_number, "B-1000-10k");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].references, ["R1", "R2"]);
    }

    #[test]
    fn distinct_values_stay_separate() {
        let components = [
            component("R1", "B-1000", "10k"),
            component("R2", "B-1000", "4k7"),
            component("R3", "B-1000", "10k"),
        ];
        let groups = aggregate(&components);
        assert_eq!(groups.len(), 2);
        let total: u32 = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, components.len() as u32);
    }

    #[test]
    fn references_sort_naturally_within_a_group() {
        let components = [
            component("C10", "D-3000", "100n"),
            component("C2", "D-3000", "100n"),
        ];
        let groups = aggregate(&components);
        assert_eq!(groups[0].references, ["C2", "C10"]);
    }

    #[test]
    fn every_designator_appears_exactly_once() {
        let components = [
            component("R5", "B-1000", "1k"),
            component("R1", "B-1000", "1k"),
            component("U1", "A-2000-0", "LM317"),
            component("R3", "B-1000", "1k"),
        ];
        let groups = aggregate(&components);
        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.references.iter().map(String::as_str))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, ["R1", "R3", "R5", "U1"]);
    }

    #[test]
    fn groups_come_back_ordered_by_part_number() {
        let components = [
            component("U2", "Z-9000", "x"),
            component("U1", "A-2000", "y"),
        ];
        let groups = aggregate(&components);
        assert_eq!(groups[0].part_number, "A-2000");
        assert_eq!(groups[1].part_number, "Z-9000");
    }
}
