use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A paper returned by the search collaborator.
///
/// `id` is derived by [`resolve_paper_id`] when the record is received and is
/// the only identity used for selection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub year: Option<String>,
    pub venue: Option<String>,
    pub url: Option<String>,
    pub pdf_url: Option<String>,
    pub source: String,
}

/// Derive a paper's selection id.
///
/// Priority: the backend paper identifier, then the alternate (arXiv)
/// identifier, then the title. Blank values are skipped.
#[must_use]
pub fn resolve_paper_id(primary: Option<&str>, alternate: Option<&str>, title: &str) -> String {
    [primary, alternate, Some(title)]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::resolve_paper_id;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, "Only A Title", "Only A Title")]
    #[case(Some("ss-123"), None, "Title", "ss-123")]
    #[case(Some("ss-123"), Some("2101.00001v1"), "Title", "ss-123")]
    #[case(None, Some("2101.00001v1"), "Title", "2101.00001v1")]
    #[case(Some(""), Some("2101.00001v1"), "Title", "2101.00001v1")]
    #[case(Some("  "), None, "Title", "Title")]
    #[case(None, None, "", "")]
    fn id_priority(
        #[case] primary: Option<&str>,
        #[case] alternate: Option<&str>,
        #[case] title: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(resolve_paper_id(primary, alternate, title), expected);
    }
}
