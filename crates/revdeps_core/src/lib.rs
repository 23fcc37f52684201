//! Core utilities for revdeps tools.
//!
//! This crate provides the pure building blocks of the used-by analysis:
//! - Extracting `import x = require('./y')` targets from source text
//! - Normalizing import targets into canonical file paths
//! - Reading file contents through a swappable [`FileReader`]

mod constants;
mod parser;
mod reader;
mod resolver;

// Re-export public API
pub use constants::{IMPORT_SUFFIX, RELATIVE_PREFIXES};
pub use parser::extract_imports;
pub use reader::{FileReader, FsReader, MemoryReader, ReadError};
pub use resolver::{absolutize, normalize};
