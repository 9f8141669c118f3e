//! Single-file inspection
//!
//! Reads one file, classifies it and attaches structural facts. The public
//! entry point [`analyze_file`] never returns an `Err`: failures are folded
//! into an [`AnalysisOutcome::Failure`] so callers always get one record.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{InspectError, Result};
use crate::extract::extract;
use crate::lang::Lang;
use crate::schema::{AnalysisOutcome, AnalysisResult};

/// Inspect a file and return either its record or an error record
pub fn analyze_file(path: impl AsRef<Path>) -> AnalysisOutcome {
    let path = path.as_ref();
    match inspect_file(path) {
        Ok(result) => AnalysisOutcome::Success(result),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "analysis failed");
            AnalysisOutcome::from(e)
        }
    }
}

/// Inspect a file, propagating the first failure
///
/// `file_path` is the path as given. JSON carries only strings, so bytes of a
/// non-UTF-8 path are replaced with U+FFFD.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<AnalysisResult> {
    let path = path.as_ref();
    let file_path = path.to_string_lossy().into_owned();

    // 1. Point-in-time existence check
    if !path.exists() {
        return Err(InspectError::FileNotFound { path: file_path });
    }

    // 2. Read and decode; the handle is closed before extraction starts
    let raw = fs::read_to_string(path)?;
    let content = normalize_newlines(&raw);

    // 3. On-disk size, independent of the decoded length
    let size_bytes = fs::metadata(path)?.len();

    let line_count = count_lines(&content);
    let lang = Lang::from_path(path);

    debug!(
        path = %file_path,
        size_bytes,
        line_count,
        language = lang.name(),
        family = lang.family().name(),
        "read source file"
    );

    let facts = extract(&content, lang);

    if let Some(f) = &facts {
        debug!(
            imports = f.imports.len(),
            functions = f.functions.len(),
            classes = f.classes.len(),
            "extracted structure"
        );
    }

    Ok(AnalysisResult::new(file_path, size_bytes, line_count, lang, facts))
}

/// Count `\n` terminators plus one, so empty text is one line
pub fn count_lines(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Rewrite `\r\n` and lone `\r` as `\n`
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}
