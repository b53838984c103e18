use polars::prelude::*;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Matches the `name` entries of a Python-literal dump row, e.g.
// [{'id': 28, 'name': 'Action'}, {'id': 12, 'name': "Pirate's Cove"}]
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'name':\s*(?:'([^']*)'|"([^"]*)")"#).unwrap());

fn json_names(raw: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(|item| item.get("name").and_then(Value::as_str))
                .map(str::to_owned)
                .collect(),
        ),
        // Decoded, but not a sequence.
        Ok(_) => Some(Vec::new()),
        Err(_) => None,
    }
}

fn literal_names(raw: &str) -> Vec<String> {
    if !raw.trim_start().starts_with('[') {
        return Vec::new();
    }
    NAME_RE
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Decodes a string column whose cells encode a list of tagged objects into
/// the ordered `name` values per row. Null or malformed cells decode to an
/// empty vector, never an error.
pub fn decode_names(column: &Column) -> Result<Vec<Vec<String>>, PolarsError> {
    Ok(column
        .str()?
        .into_iter()
        .map(|cell| match cell {
            None => Vec::new(),
            Some(raw) => json_names(raw).unwrap_or_else(|| literal_names(raw)),
        })
        .collect())
}

/// Decodes `src` per [`decode_names`] and attaches the result to `df` as a
/// `List(String)` column named `dst`, overwriting any existing `dst`.
pub fn with_decoded_names(df: &mut DataFrame, src: &str, dst: &str) -> Result<(), PolarsError> {
    let rows = decode_names(df.column(src)?)?;
    let decoded: ListChunked = rows
        .iter()
        .map(|names| Some(Series::new(PlSmallStr::EMPTY, names.as_slice())))
        .collect();
    df.with_column(decoded.into_series().with_name(dst.into()))?;
    Ok(())
}
