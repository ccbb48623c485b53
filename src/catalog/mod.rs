//! Master parts list wiring.
//!
//! This module wraps the hand-maintained parts-price CSV so the pipeline can
//! load it once and resolve part numbers quickly. Types here mirror the
//! required CSV columns; callers use `CatalogIndex` for lookups and the
//! `model` helpers when raw records are enough.

pub mod index;
pub mod model;

pub use index::CatalogIndex;
pub use model::{PartRecord, load_parts, load_parts_from_path, parse_price};
