use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// On-disk fixture set for one pipeline run.
pub struct Fixture {
    pub dir: TempDir,
    pub netlist: PathBuf,
    pub parts_db: PathBuf,
    pub output: PathBuf,
}

pub fn fixture(netlist_xml: &str, parts_csv: &str) -> Fixture {
    let dir = TempDir::new().expect("failed to allocate fixture dir");
    let netlist = dir.path().join("design.xml");
    let parts_db = dir.path().join("partsdb.csv");
    let output = dir.path().join("bom.csv");
    fs::write(&netlist, netlist_xml).expect("failed to write netlist fixture");
    fs::write(&parts_db, parts_csv).expect("failed to write parts list fixture");
    Fixture {
        dir,
        netlist,
        parts_db,
        output,
    }
}

pub fn read_rows(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("failed to read output BOM")
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Wrap component snippets in the export scaffolding shared by every test.
pub fn netlist_xml(source: &str, date: &str, comps: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<export version="E">
  <design>
    <source>{source}</source>
    <date>{date}</date>
    <tool>Eeschema 6.0.4</tool>
  </design>
  <components>
{comps}
  </components>
</export>
"#
    )
}

pub fn comp(reference: &str, part_number: &str, value: &str) -> String {
    format!(
        "    <comp ref=\"{reference}\">\n      <value>{value}</value>\n      <fields>\n        <field name=\"PN\">{part_number}</field>\n      </fields>\n    </comp>\n"
    )
}
