//! Core library for laying out print-production jobs on roll media.
//!
//! - Algorithm: greedy bottom-left Skyline strip packing (fixed sheet width,
//!   unbounded length, optional inter-item spacing, 90° rotation fallback)
//! - Pipeline: `pack` expands quantities, sorts, places, and aggregates
//! - Data model is serde-serializable; a JSON exporter for the downstream
//!   contract lives in `export`, the CLI crate adds file handling on top.
//!
//! Quick example:
//! ```
//! use sheet_packer_core::{pack, DesignSpec, SheetConfig};
//!
//! let items = vec![DesignSpec::new("card", "Business card", 9.0, 5.0, 24)];
//! let cfg = SheetConfig::builder(58.0).spacing(0.2).build();
//! let result = pack(&items, &cfg);
//! println!("length: {:.1}", result.total_length);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sheet_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{SheetConfig, SheetConfigBuilder};
    pub use crate::model::{DesignSpec, LayoutStats, PackingResult, PlacedUnit};
    pub use crate::packer::skyline::{SkylinePacker, SkylineSegment};
    pub use crate::packer::TOLERANCE;
    pub use crate::{pack, to_json_string, to_json_string_pretty, to_json_value};
}
