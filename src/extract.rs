//! Structural extraction orchestration
//!
//! Dispatches file content to the rules of its language family. Families
//! without rules produce nothing, which callers surface as absent keys
//! rather than empty lists.

use crate::detectors::{javascript, python};
use crate::lang::{Lang, LangFamily};

/// Imports, function signatures and class declarations of one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralFacts {
    pub imports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
}

/// Run all three extractors, or return `None` if `lang` has no rules
pub fn extract(content: &str, lang: Lang) -> Option<StructuralFacts> {
    if !lang.supports_extraction() {
        return None;
    }

    Some(StructuralFacts {
        imports: extract_imports(content, lang),
        functions: extract_functions(content, lang),
        classes: extract_classes(content, lang),
    })
}

/// Extract import/require statements; empty for unsupported languages
pub fn extract_imports(content: &str, lang: Lang) -> Vec<String> {
    match lang.family() {
        LangFamily::Python => python::extract_imports(content),
        LangFamily::JavaScript => javascript::extract_imports(content),
        _ => Vec::new(),
    }
}

/// Extract function signatures; empty for unsupported languages
pub fn extract_functions(content: &str, lang: Lang) -> Vec<String> {
    match lang.family() {
        LangFamily::Python => python::extract_functions(content),
        LangFamily::JavaScript => javascript::extract_functions(content),
        _ => Vec::new(),
    }
}

/// Extract class declarations; empty for unsupported languages
pub fn extract_classes(content: &str, lang: Lang) -> Vec<String> {
    match lang.family() {
        LangFamily::Python => python::extract_classes(content),
        LangFamily::JavaScript => javascript::extract_classes(content),
        _ => Vec::new(),
    }
}
