//! Generates a purchasing BOM from a KiCad netlist export.
//!
//! Usage mirrors the KiCad BOM-plugin convention of positional arguments:
//!
//! `kibom <netlist.xml> <output.csv> <partsdb.csv>`
//!
//! Progress goes to stderr; the only file written is the output BOM, and
//! only once the whole pipeline has succeeded.

use anyhow::{Context, Result};
use kibom::{CatalogIndex, Netlist, generate_bom, write_bom_file};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    eprintln!("Reading netlist {}", cli.netlist.display());
    let netlist = Netlist::load(&cli.netlist)?;

    eprintln!("Reading parts list {}", cli.parts_db.display());
    let catalog = CatalogIndex::load(&cli.parts_db)?;

    let lines = generate_bom(&netlist, &catalog)
        .with_context(|| format!("generating BOM for {}", netlist.design_name()))?;

    let unmatched = lines.iter().filter(|l| l.vendor == kibom::UNMATCHED).count();
    eprintln!(
        "{} components -> {} line items ({} without a catalog match)",
        netlist.components.len(),
        lines.len(),
        unmatched
    );

    write_bom_file(&cli.output, &netlist.design_name(), &netlist.date, &lines)?;
    eprintln!("Wrote {}", cli.output.display());
    Ok(())
}

struct Cli {
    netlist: PathBuf,
    output: PathBuf,
    parts_db: PathBuf,
}

impl Cli {
    fn parse() -> Self {
        let mut positional = Vec::new();
        for arg in env::args_os().skip(1) {
            match arg.to_str() {
                Some("--help") | Some("-h") => usage(0),
                Some(s) if s.starts_with('-') => {
                    eprintln!("Unknown option: {s}");
                    usage(1);
                }
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        let [netlist, output, parts_db] = match <[PathBuf; 3]>::try_from(positional) {
            Ok(args) => args,
            Err(_) => usage(1),
        };
        Self {
            netlist,
            output,
            parts_db,
        }
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: kibom <netlist.xml> <output.csv> <partsdb.csv>\n\n\
         Arguments:\n  \
         netlist.xml   KiCad XML netlist export of the design.\n  \
         output.csv    BOM file to write.\n  \
         partsdb.csv   Master parts list keyed by Part Number.\n\n\
         Example (as a KiCad BOM plugin):\n  \
         kibom \"%I\" \"%O.csv\" /path/to/partsdb.csv"
    );
    std::process::exit(code);
}
