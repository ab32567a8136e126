//! rcscan - policy `rc.type` registry checker
//!
//! rcscan walks a directory of policy files, pulls out every `rc.type is "<value>"`
//! declaration and checks each value against a registry of known provider resource
//! types. Results are written to a color-coded spreadsheet and printed as JSON.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, registry loading and classification
//! - `export`: Spreadsheet and JSON outputs, viewer launch
//! - `pipeline`: The end-to-end scan run

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod pipeline;
