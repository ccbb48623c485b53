//! Renders priced line items as the final BOM CSV.
//!
//! Row 1 is a short metadata header naming the design and the netlist
//! export date; row 2 carries the fixed column headers; every following row
//! is one line item. Reference designators collapse into a single
//! space-delimited field. The writer is flexible because the metadata row is
//! shorter than the data rows.

use crate::bom::BomLine;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Fixed output columns, in order.
pub const COLUMNS: [&str; 10] = [
    "Part Number",
    "count",
    "RefDesList",
    "Vendor P/N",
    "Value",
    "Vendor",
    "Package",
    "Description",
    "ext. cost",
    "Qty on hand",
];

/// Write the finished BOM to a file.
///
/// The file is only created here, after the whole pipeline has succeeded, so
/// a failed run never leaves a partial report behind.
pub fn write_bom_file(
    path: &Path,
    design_name: &str,
    date: &str,
    lines: &[BomLine],
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating BOM file {}", path.display()))?;
    write_bom(BufWriter::new(file), design_name, date, lines)
        .with_context(|| format!("writing BOM file {}", path.display()))
}

/// Write the finished BOM to any writer.
pub fn write_bom<W: io::Write>(
    writer: W,
    design_name: &str,
    date: &str,
    lines: &[BomLine],
) -> Result<()> {
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    out.write_record(["Design file:", design_name, "Date:", date])?;
    out.write_record(COLUMNS)?;
    for line in lines {
        out.write_record(render_line(line))?;
    }
    out.flush()?;
    Ok(())
}

fn render_line(line: &BomLine) -> [String; 10] {
    [
        line.part_number.clone(),
        line.count.to_string(),
        line.references.join(" "),
        line.vendor_part_number.clone(),
        line.value.clone(),
        line.vendor.clone(),
        line.package.clone(),
        line.description.clone(),
        line.extended_cost.to_string(),
        line.quantity_on_hand.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(part_number: &str, count: u32, references: &[&str], cost: f64) -> BomLine {
        BomLine {
            part_number: part_number.to_string(),
            count,
            references: references.iter().map(|r| r.to_string()).collect(),
            vendor_part_number: "71-XYZ".to_string(),
            value: "10k".to_string(),
            vendor: "Mouser".to_string(),
            package: "0805".to_string(),
            description: "resistor".to_string(),
            extended_cost: cost,
            quantity_on_hand: "120".to_string(),
        }
    }

    fn render(design: &str, date: &str, lines: &[BomLine]) -> String {
        let mut buffer = Vec::new();
        write_bom(&mut buffer, design, date, lines).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn report_has_metadata_then_headers_then_lines() {
        let output = render(
            "widget",
            "2022-05-10 14:02:11",
            &[line("B-1000-10k", 2, &["R1", "R2"], 0.1046)],
        );
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "Design file:,widget,Date:,2022-05-10 14:02:11");
        assert_eq!(rows[1], COLUMNS.join(","));
        assert_eq!(
            rows[2],
            "B-1000-10k,2,R1 R2,71-XYZ,10k,Mouser,0805,resistor,0.1046,120"
        );
    }

    #[test]
    fn zero_cost_renders_as_plain_zero() {
        let output = render("widget", "today", &[line("X-1", 1, &["U1"], 0.0)]);
        let last = output.lines().last().unwrap();
        assert!(last.ends_with(",0,120"), "got: {last}");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mut priced = line("X-1", 1, &["U1"], 1.0);
        priced.description = "header, 4 pin".to_string();
        let output = render("widget", "today", &[priced]);
        assert!(output.contains("\"header, 4 pin\""));
    }
}
