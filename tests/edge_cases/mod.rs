//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs, error conditions, and boundary cases:
//! - Empty files and line-count boundaries
//! - Missing paths, directories and undecodable content
//! - Unknown and missing extensions
//! - Pattern matches inside non-code content

pub mod error_handling_tests;
