//! Reverse ("used-by") dependency graphs for TypeScript-style imports.
//!
//! Starting from a set of entry files, this crate follows every
//! `import x = require('./y')` declaration breadth-first and reports, for each
//! file reached, the files that import it directly.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use revdeps_used_by::{Config, run_used_by_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::new(vec![std::path::PathBuf::from("src/index.ts")]);
//!
//! let result = run_used_by_check(cfg)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! revdeps_used_by::print_report(&mut stdout, &result.graph)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory files
//!
//! ```
//! use revdeps_core::MemoryReader;
//! use revdeps_used_by::{render_report, resolve_used_by};
//! use std::path::PathBuf;
//!
//! let reader = MemoryReader::new()
//!     .with_file("/src/a.ts", "import b = require('./b');")
//!     .with_file("/src/b.ts", "");
//! let graph = resolve_used_by(&[PathBuf::from("/src/a.ts")], &reader);
//! assert_eq!(render_report(&graph), "/src/b.ts <- /src/a.ts\n/src/a.ts <- ");
//! ```

mod checker;
mod config;
mod graph;
mod reporter;
mod types;

// Re-export public API
pub use checker::{run_used_by_check, run_used_by_check_with};
pub use config::Config;
pub use graph::{UsedByGraph, resolve_used_by, resolve_used_by_parallel};
pub use reporter::{format_line, print_report, print_summary, render_report};
pub use types::CheckResult;
