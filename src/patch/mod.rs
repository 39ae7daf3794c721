//! Text-level patching of the record store.
//!
//! Only `citations:` lines are touched; every other byte of the file is kept as is.
//! Matching is by literal DOI string, so two records that share a DOI both receive
//! the same count.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Resolved citation counts keyed by DOI. Unresolved DOIs are simply absent.
pub type CitationMap = BTreeMap<String, u64>;

lazy_static! {
    /// A whole `citations: <n>` line, trailing `# comment` included, together with the
    /// line break before it. The line's own trailing `\r` is captured so CRLF files keep
    /// their endings.
    static ref CITATION_FIELD_PATTERN: Regex = Regex::new(
        r"(?m)\r?\n[ \t]*citations:[ \t]*\d+[ \t]*(?:#[^\r\n]*)?(\r?)$"
    ).unwrap();
}

/// Result of patching the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub text: String,
    /// DOIs that received a citations field
    pub updated: usize,
}

/// Remove every `citations: <n>` line
pub fn strip_citation_fields(text: &str) -> String {
    CITATION_FIELD_PATTERN.replace_all(text, "${1}").into_owned()
}

/// Pattern for the `doi:` line(s) carrying exactly `doi`, quoted or bare
fn doi_line_pattern(doi: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?m)^(?P<indent>[ \t]*)(?P<dash>-[ \t]+)?doi:[ \t]*["']?[ \t]*{}[ \t]*(?:["'][^\r\n]*)?(?P<cr>\r?)$"#,
        regex::escape(doi)
    ))
}

/// Insert `citations: <count>` on the line after each `doi:` field holding `doi`,
/// aligned with the record's other fields. Returns the new text and the number of
/// lines patched.
pub fn insert_citation_field(
    text: &str,
    doi: &str,
    count: u64,
) -> Result<(String, usize), regex::Error> {
    let pattern = doi_line_pattern(doi)?;
    let mut occurrences = 0;

    let patched = pattern.replace_all(text, |caps: &Captures| {
        occurrences += 1;

        let whole = &caps[0];
        let cr = &caps["cr"];
        let line = &whole[..whole.len() - cr.len()];
        let dash_width = caps.name("dash").map_or(0, |m| m.as_str().len());
        let indent = format!("{}{}", &caps["indent"], " ".repeat(dash_width));

        format!("{line}{cr}\n{indent}citations: {count}{cr}")
    });

    Ok((patched.into_owned(), occurrences))
}

/// Strip all existing citation fields, then insert one for every resolved DOI.
///
/// Running it again with the same map yields the same text.
pub fn patch_citations(text: &str, citations: &CitationMap) -> Result<PatchOutcome, regex::Error> {
    let mut patched = strip_citation_fields(text);
    let mut updated = 0;

    for (doi, &count) in citations {
        let (next, occurrences) = insert_citation_field(&patched, doi, count)?;
        if occurrences > 0 {
            updated += 1;
        }
        patched = next;
    }

    Ok(PatchOutcome {
        text: patched,
        updated,
    })
}
