//! Reader for KiCad XML netlist exports.
//!
//! The pipeline only needs a small slice of the export: the design source
//! and date from `<design>`, and for each `<comp>` the reference designator,
//! the `Value` element, and the `PN` field carrying the catalog part number.
//! Components marked `exclude_from_bom` are dropped here so downstream
//! stages never see them. Missing values or `PN` fields degrade to empty
//! strings; a malformed part number simply fails catalog lookup later
//! instead of aborting the read.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Field name carrying the catalog part number on each schematic symbol.
const PART_NUMBER_FIELD: &str = "PN";

/// KiCad property marking a component as not for the BOM.
const EXCLUDE_PROPERTY: &str = "exclude_from_bom";

/// One schematic component relevant to BOM generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Component {
    /// Reference designator, e.g. `R12`.
    pub reference: String,
    /// Electrical value, e.g. `10k`; empty when the symbol has none.
    pub value: String,
    /// Stored catalog key from the `PN` field; may be a bare family prefix
    /// for value-suffixed part classes.
    pub part_number: String,
}

/// Parsed netlist: design metadata plus the orderable components.
#[derive(Clone, Debug)]
pub struct Netlist {
    /// Path of the schematic the netlist was exported from, as recorded in
    /// the export itself.
    pub source: String,
    /// Export timestamp recorded by KiCad.
    pub date: String,
    pub components: Vec<Component>,
}

impl Netlist {
    /// Read and parse a netlist export from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading netlist {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("parsing netlist {}", path.display()))
    }

    /// Parse a netlist export from its XML text.
    pub fn parse(xml: &str) -> Result<Self> {
        let export: Export =
            quick_xml::de::from_str(xml).context("input is not a KiCad XML netlist export")?;

        let components = export
            .components
            .comps
            .into_iter()
            .filter(|comp| !comp.excluded_from_bom())
            .map(|comp| {
                let part_number = comp.part_number_field().unwrap_or_default();
                Component {
                    reference: comp.reference,
                    value: comp.value,
                    part_number,
                }
            })
            .collect();

        Ok(Self {
            source: export.design.source,
            date: export.design.date,
            components,
        })
    }

    /// Design name for the report header: the source file stem, extension
    /// stripped.
    pub fn design_name(&self) -> String {
        Path::new(&self.source)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.clone())
    }
}

// Deserialization mirror of the export schema; only the elements the
// pipeline consumes are modeled, everything else is ignored.

#[derive(Debug, Deserialize)]
struct Export {
    design: Design,
    #[serde(default)]
    components: CompList,
}

#[derive(Debug, Deserialize)]
struct Design {
    #[serde(default)]
    source: String,
    #[serde(default)]
    date: String,
}

#[derive(Debug, Default, Deserialize)]
struct CompList {
    #[serde(rename = "comp", default)]
    comps: Vec<Comp>,
}

#[derive(Debug, Deserialize)]
struct Comp {
    #[serde(rename = "@ref")]
    reference: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    fields: FieldList,
    #[serde(rename = "property", default)]
    properties: Vec<Property>,
}

impl Comp {
    fn part_number_field(&self) -> Option<String> {
        self.fields
            .fields
            .iter()
            .find(|field| field.name == PART_NUMBER_FIELD)
            .map(|field| field.value.clone())
    }

    fn excluded_from_bom(&self) -> bool {
        self.properties
            .iter()
            .any(|property| property.name == EXCLUDE_PROPERTY)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FieldList {
    #[serde(rename = "field", default)]
    fields: Vec<Field>,
}

#[derive(Debug, Deserialize)]
struct Field {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct Property {
    #[serde(rename = "@name")]
    name: String,
}
