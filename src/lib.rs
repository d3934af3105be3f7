//! CLONALG-PR: clonal selection over biological sequences.
//!
//! A population of random antibodies is scored against an antigen corpus
//! through an [`AffinityMetric`], cloned in proportion to affinity,
//! hypermutated, and distilled into a bounded set of memory cells.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use config::{AppConfig, ConfigManager};
pub use engines::evaluation::AffinityMetric;
pub use engines::generation::{ClonalgEngine, EngineConfig, MemoryCells, ProgressCallback};
pub use error::{ClonalgError, Result};
pub use types::{Antibody, BioSequenceType, ReplacementOrder};
