//! Output Format Tests
//!
//! Tests for the JSON contract of the binary:
//! - key order and conditional keys
//! - pretty (default) and compact rendering
//! - exit status and idempotence
