//! Python extraction rules
//!
//! Surfaces import statements, `def` signatures and `class` declarations
//! with plain pattern matching. Nothing is parsed, so matches inside
//! docstrings and comments are reported like any other.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{collect_signatures, collect_verbatim};

/// `import <dotted.name>`
static IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"import\s+([\w\.]+)").expect("valid python import pattern"));

/// `from <dotted.name> import <rest of line>`, keyword captured in group 2
static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"from\s+([\w\.]+)\s+(import)\s+(.+)").expect("valid python from-import pattern")
});

static FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def\s+(\w+)\s*\(").expect("valid python def pattern"));

static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("valid python class pattern"));

/// Extract import statements.
///
/// All `import x` matches come first, then all `from x import y` matches.
/// The `import` keyword of a `from ... import` statement belongs to that
/// statement and is not reported a second time as a plain import. Any other
/// `import` on the same line still is.
pub fn extract_imports(content: &str) -> Vec<String> {
    let from_keywords: Vec<usize> = FROM_IMPORT
        .captures_iter(content)
        .filter_map(|c| c.get(2).map(|k| k.start()))
        .collect();

    let plain = IMPORT
        .find_iter(content)
        .filter(|m| !from_keywords.contains(&m.start()))
        .map(|m| m.as_str().trim().to_string());

    let from = FROM_IMPORT
        .find_iter(content)
        .map(|m| m.as_str().trim().to_string());

    plain.chain(from).collect()
}

/// Extract `def name(` prefixes, each suffixed with `...)`
pub fn extract_functions(content: &str) -> Vec<String> {
    collect_signatures(&[&*FUNCTION], content)
}

/// Extract `class Name` declarations
pub fn extract_classes(content: &str) -> Vec<String> {
    collect_verbatim(&CLASS, content)
}
