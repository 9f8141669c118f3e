//! Output records
//!
//! Field order in [`AnalysisResult`] is the key order of the emitted JSON.

use serde::{Deserialize, Serialize};

use crate::extract::StructuralFacts;
use crate::lang::Lang;

/// Shallow facts about one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The input path exactly as given
    pub file_path: String,

    /// On-disk byte length at read time
    pub size_bytes: u64,

    /// Line terminators plus one
    pub line_count: usize,

    /// Display label, `"Unknown"` when the extension is not recognized
    pub language: String,

    /// Present only for the Python and JavaScript families
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
}

impl AnalysisResult {
    /// Assemble a record, attaching structural facts when there are any
    pub fn new(
        file_path: impl Into<String>,
        size_bytes: u64,
        line_count: usize,
        lang: Lang,
        facts: Option<StructuralFacts>,
    ) -> Self {
        let (imports, functions, classes) = match facts {
            Some(f) => (Some(f.imports), Some(f.functions), Some(f.classes)),
            None => (None, None, None),
        };

        Self {
            file_path: file_path.into(),
            size_bytes,
            line_count,
            language: lang.name().to_string(),
            imports,
            functions,
            classes,
        }
    }

    /// Whether the structural keys are attached
    pub fn has_structure(&self) -> bool {
        self.imports.is_some() && self.functions.is_some() && self.classes.is_some()
    }
}

/// Single-field record emitted in place of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// Either a full record or an error, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Failure(ErrorRecord),
}

impl AnalysisOutcome {
    /// Build the failure variant from any displayable error
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self::Failure(ErrorRecord {
            error: error.to_string(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The successful record, if any
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success(r) => Some(r),
            Self::Failure(_) => None,
        }
    }

    /// The error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(&e.error),
        }
    }

    /// Render as two-space indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render as single-line JSON
    pub fn to_json_compact(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<crate::error::InspectError> for AnalysisOutcome {
    fn from(e: crate::error::InspectError) -> Self {
        Self::failure(e)
    }
}
