//! Core scan engine.
//!
//! - `extractor`: walk the policy directory and pull out `rc.type` values
//! - `registry`: load the reference registry (flat list or titled map)
//! - `compare`: classify each occurrence against the registry
//! - `types`: data shared by the phases and the reporters

pub mod compare;
pub mod extractor;
pub mod registry;
pub mod types;

pub use compare::{classify, compare};
pub use extractor::{ExtractResult, SkippedFile, extract_from_text, extract_occurrences};
pub use registry::{Registry, load_registry, parse_registry};
pub use types::{ClassifiedResult, Comparison, MatchStatus, NO_MATCH_TITLE, Occurrence};
