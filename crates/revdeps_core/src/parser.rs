use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{IMPORT_SUFFIX, RELATIVE_PREFIXES};

/// Matches `import <name> = require('<relative path>')` anchored at column zero.
///
/// Whitespace is allowed between every token after the `import` keyword. Quotes
/// may be single or double. The captured path keeps its separators verbatim.
static IMPORT_EQUALS_REQUIRE: LazyLock<Regex> = LazyLock::new(|| {
    let prefixes =
        RELATIVE_PREFIXES.iter().map(|p| regex::escape(p)).collect::<Vec<_>>().join("|");
    let pattern = format!(
        r#"(?m)^import\s+\w+\s*=\s*require\s*\(\s*['"](?P<target>(?:{prefixes})\S+)['"]\s*\)"#
    );
    Regex::new(&pattern).expect("import pattern is a valid regex")
});

/// Extracts the import targets declared in a block of source text.
///
/// Targets come back in declaration order, duplicates included. A target that
/// does not end in [`IMPORT_SUFFIX`] gets it appended. Text without any
/// recognizable declaration yields an empty list.
pub fn extract_imports(text: &str) -> Vec<String> {
    let targets: Vec<String> = IMPORT_EQUALS_REQUIRE
        .captures_iter(text)
        .filter_map(|caps| caps.name("target"))
        .map(|m| {
            let raw = m.as_str();
            trace!("Found import target: '{}'", raw);
            with_suffix(raw)
        })
        .collect();

    debug!("Extracted {} import targets", targets.len());
    targets
}

fn with_suffix(target: &str) -> String {
    if target.ends_with(IMPORT_SUFFIX) {
        target.to_string()
    } else {
        trace!("Appending '{}' to '{}'", IMPORT_SUFFIX, target);
        format!("{}{}", target, IMPORT_SUFFIX)
    }
}
