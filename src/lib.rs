//! source-inspector: lightweight static source-file inspector
//!
//! Given a file path, classifies the language from its extension and, for
//! Python and the JavaScript/TypeScript family, pulls out import statements,
//! function signatures and class declarations with regular expressions.
//! This is not a parser: no syntax tree is built, and matches inside comments
//! or strings are reported like real code.
//!
//! # Supported Languages
//!
//! - Extraction: Python, JavaScript, TypeScript, JSX, TSX
//! - Classification only: HTML, CSS, SCSS, JSON, Markdown, Java, Ruby, Go,
//!   Rust, PHP, C, C++, C#
//!
//! # Example
//!
//! ```no_run
//! use source_inspector::analyze_file;
//!
//! let outcome = analyze_file("src/app.ts");
//! println!("{}", outcome.to_json_pretty().unwrap());
//! ```

pub mod analysis;
pub mod cli;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod lang;
pub mod schema;

// Re-export commonly used types
pub use analysis::{analyze_file, count_lines, inspect_file};
pub use cli::Cli;
pub use error::{InspectError, Result};
pub use extract::{extract, extract_classes, extract_functions, extract_imports, StructuralFacts};
pub use lang::{Lang, LangFamily, EXTENSION_TABLE};
pub use schema::{AnalysisOutcome, AnalysisResult, ErrorRecord};
