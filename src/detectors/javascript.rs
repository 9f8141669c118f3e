//! JavaScript/TypeScript extraction rules
//!
//! Shared by `.js`, `.ts`, `.jsx` and `.tsx`. Covers ES module imports,
//! CommonJS `require` calls, three function declaration shapes and `class`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::{collect_signatures, collect_trimmed, collect_verbatim};

/// `import ... from '<module>'`
static ES_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+.*?from\s+['"](.+?)['"]"#).expect("valid es import pattern")
});

/// `require('<module>')`
static REQUIRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"require\(['"](.+?)['"]\)"#).expect("valid require pattern"));

/// `function name(`
static FUNCTION_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+(\w+)\s*\(").expect("valid function pattern"));

/// `const name = (...) =>`
static ARROW_CONST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"const\s+(\w+)\s*=\s*\([^)]*\)\s*=>").expect("valid arrow function pattern")
});

/// `name: function(`
static OBJECT_METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*:\s*function\s*\(").expect("valid object method pattern")
});

static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("valid class pattern"));

/// Extract ES module imports, then CommonJS requires
pub fn extract_imports(content: &str) -> Vec<String> {
    collect_trimmed(&[&*ES_IMPORT, &*REQUIRE], content)
}

/// Extract function declarations, arrow-function constants and object
/// methods, in that group order, each suffixed with `...)`
pub fn extract_functions(content: &str) -> Vec<String> {
    collect_signatures(&[&*FUNCTION_DECL, &*ARROW_CONST, &*OBJECT_METHOD], content)
}

/// Extract `class Name` declarations
pub fn extract_classes(content: &str) -> Vec<String> {
    collect_verbatim(&CLASS, content)
}
