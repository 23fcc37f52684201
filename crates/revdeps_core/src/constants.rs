//! Constants shared by import extraction and path handling.

/// Suffix appended to import targets that are written without one.
///
/// `require('../lib/util')` and `require('../lib/util.ts')` name the same file.
pub const IMPORT_SUFFIX: &str = ".ts";

/// Prefixes an import target must start with to be followed.
///
/// Absolute paths and bare module names are never treated as imports.
pub const RELATIVE_PREFIXES: &[&str] = &["./", "../"];
