//! Helpers shared by the family detectors

use regex::Regex;

/// Appended to every extracted function prefix to mark the elided parameter list
pub const SIGNATURE_SUFFIX: &str = "...)";

/// Collect the trimmed text of every match of each rule, rule by rule
pub fn collect_trimmed(rules: &[&Regex], content: &str) -> Vec<String> {
    rules
        .iter()
        .flat_map(|re| re.find_iter(content))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Collect every match of each rule with [`SIGNATURE_SUFFIX`] appended, rule by rule
pub fn collect_signatures(rules: &[&Regex], content: &str) -> Vec<String> {
    rules
        .iter()
        .flat_map(|re| re.find_iter(content))
        .map(|m| format!("{}{}", m.as_str(), SIGNATURE_SUFFIX))
        .collect()
}

/// Collect the verbatim text of every match of one rule
pub fn collect_verbatim(rule: &Regex, content: &str) -> Vec<String> {
    rule.find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}
