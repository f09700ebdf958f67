use paper_config::GeneralConfig;
use paper_core::enums::{MaxResults, SourceFilter};
use paper_core::requests::SearchQuery;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Build a search query from command-line values, filling gaps from config.
pub fn search_query(
    text: &str,
    source: Option<&str>,
    max_results: Option<u32>,
    defaults: &GeneralConfig,
) -> anyhow::Result<SearchQuery> {
    let source = source
        .map(|raw| parse_enum::<SourceFilter>(raw, "source"))
        .transpose()?
        .unwrap_or(defaults.default_source);
    let max_results = max_results
        .map(MaxResults::try_from)
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(defaults.default_max_results);
    Ok(SearchQuery {
        query: text.to_string(),
        source,
        max_results,
    })
}
