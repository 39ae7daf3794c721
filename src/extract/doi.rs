use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// A `doi:` field line, optionally a YAML list item.
    /// Captures the value up to the first quote or end of line.
    pub static ref DOI_FIELD_PATTERN: Regex = Regex::new(
        r#"(?m)^[ \t]*(?:-[ \t]+)?doi:[ \t]*["']?([^"'\r\n]+)["']?"#
    ).unwrap();
}

/// Trim whitespace and stray quote characters from a captured DOI value
pub fn clean_doi(raw: &str) -> &str {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim()
}

/// Extract every DOI field value in document order.
///
/// Duplicates are kept; values are not validated against the DOI grammar.
pub fn extract_dois(text: &str) -> Vec<String> {
    DOI_FIELD_PATTERN
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| clean_doi(m.as_str()))
        .filter(|doi| !doi.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deduplicate DOIs, keeping the first occurrence of each
pub fn unique_dois(dois: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    dois.iter()
        .filter(|doi| seen.insert(doi.as_str()))
        .cloned()
        .collect()
}
