//! Language-specific extraction rules
//!
//! Each module holds the regular expressions for one language family and
//! exposes `extract_imports`, `extract_functions` and `extract_classes`.
//!
//! # Ordering
//!
//! A family may carry several rules per construct. Rules are applied one
//! after another and each is scanned over the whole text before the next
//! begins, so output is grouped by rule and in source order within a group.
//! Matches are not filtered for comments or string literals.
//!
//! - `python`: Python
//! - `javascript`: JS, TS, JSX, TSX

pub mod common;
pub mod javascript;
pub mod python;

pub use common::SIGNATURE_SUFFIX;
