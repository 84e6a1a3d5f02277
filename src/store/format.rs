/// On-disk store format
///
/// The data file is UTF-8 text in two segments separated by a CRLF: the
/// browser path on the first line, then the engine map as pretty-printed
/// JSON keyed by the 32-bit alias hash (stringified, as JSON requires).

use crate::core::{alias_key, SearchEngine};
use crate::error::{Result, SearchError};
use std::collections::BTreeMap;

/// Separator between the browser path segment and the engine map segment
const SEGMENT_SEPARATOR: &str = "\r\n";

/// Encode the full store state into the data file text
pub fn encode(
    browser_path: Option<&str>,
    engines: &BTreeMap<u32, SearchEngine>,
) -> Result<String> {
    let mut out = String::new();
    out.push_str(browser_path.unwrap_or(""));
    out.push_str(SEGMENT_SEPARATOR);
    out.push_str(&serde_json::to_string_pretty(engines)?);
    Ok(out)
}

/// Decode data file text back into browser path and engine map
///
/// An empty first segment means no browser path is configured. Every
/// decoded entry's key is re-derived from its alias; a mismatch means the
/// file was edited by hand and is rejected rather than trusted.
///
/// # Returns
/// * `Ok((browser_path, engines))` - Decoded store state
/// * `Err(SearchError::MalformedStore)` - Missing separator, invalid JSON,
///   or a stored key that does not match its entry's alias
pub fn decode(text: &str) -> Result<(Option<String>, BTreeMap<u32, SearchEngine>)> {
    let (first_line, map_json) = text.split_once(SEGMENT_SEPARATOR).ok_or_else(|| {
        SearchError::MalformedStore(
            "missing CRLF separating the browser path from the engine map".to_string(),
        )
    })?;

    let browser_path = if first_line.is_empty() {
        None
    } else {
        Some(first_line.to_string())
    };

    let engines: BTreeMap<u32, SearchEngine> = serde_json::from_str(map_json)
        .map_err(|e| SearchError::MalformedStore(format!("engine map is not valid JSON: {}", e)))?;

    for (key, engine) in &engines {
        let derived = alias_key(&engine.short_name);
        if *key != derived {
            return Err(SearchError::MalformedStore(format!(
                "stored key {} does not match alias \"{}\" (expected {})",
                key, engine.short_name, derived
            )));
        }
    }

    Ok((browser_path, engines))
}
