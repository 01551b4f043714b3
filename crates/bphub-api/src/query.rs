//! Raw query string decoding.
//!
//! `application/x-www-form-urlencoded` semantics: `+` is a space, percent
//! sequences are decoded, the last occurrence of a repeated key wins.
//! Percent sequences that decode to invalid UTF-8 make the whole query
//! malformed — the handler then fails open and renders unfiltered.

use std::collections::HashMap;

use tracing::warn;

use bphub_core::{Error, Result, SearchFilter};

/// Build the search filter from a raw query string, failing open.
///
/// A query that does not decode (invalid UTF-8 in a percent sequence) is
/// logged and treated as no query at all, so the page renders the default
/// unfiltered listing instead of erroring.
pub fn filter_or_default(raw: Option<&str>, known_versions: &[&str]) -> SearchFilter {
    match parse_query(raw.unwrap_or("")) {
        Ok(params) => SearchFilter::from_params(&params, known_versions),
        Err(err) => {
            warn!(
                subsystem = "api",
                component = "search",
                op = "parse_query",
                error = %err,
                "Malformed query string, rendering unfiltered"
            );
            SearchFilter::default()
        }
    }
}

/// Decode a raw query string into a key → value map.
pub fn parse_query(raw: &str) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(params)
}

fn decode_component(component: &str) -> Result<String> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::MalformedQuery(e.to_string()))
}
