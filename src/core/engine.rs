/// Search engine records
///
/// A search engine is a named URL template keyed by a short alias. Engines
/// are entered in one of two textual forms and render query URLs by
/// substituting the search text into the template.

use crate::error::{Result, SearchError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Placeholder token replaced by the encoded search text in `query_format`
pub const QUERY_PLACEHOLDER: &str = "%s";

/// Represents one searchable destination
///
/// Field names are serialized in PascalCase; that is both the canonical
/// input form and the shape of the entries in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    /// Display name, free-form
    #[serde(rename = "Name")]
    pub name: String,
    /// Alias used for dispatch; stored as given, looked up lower-cased
    #[serde(rename = "ShortName")]
    pub short_name: String,
    /// URL template containing the `%s` placeholder
    #[serde(rename = "QueryFormat")]
    pub query_format: String,
}

impl SearchEngine {
    pub fn new(name: &str, short_name: &str, query_format: &str) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            query_format: query_format.to_string(),
        }
    }

    /// Parse an engine literal in either accepted form
    ///
    /// Two grammars are accepted, told apart by a structural probe on the
    /// trimmed input:
    /// - canonical JSON: `{"Name":"Google","ShortName":"g","QueryFormat":"..."}`
    /// - compact triple: `{Google, g, https://www.google.com/search?q=%s}`
    ///
    /// # Arguments
    /// * `literal` - Raw engine literal, e.g. the argument of an add command
    ///
    /// # Returns
    /// * `Ok(SearchEngine)` - Parsed engine
    /// * `Err(SearchError::Parse)` - Neither grammar matched
    pub fn parse(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        if looks_like_json_object(trimmed) {
            serde_json::from_str(trimmed)
                .map_err(|e| SearchError::Parse(format!("{}: {}", trimmed, e)))
        } else {
            Self::parse_compact(trimmed)
        }
    }

    // Parses the compact `{Name, ShortName, QueryFormat}` form. Quotes around
    // individual fields are optional; commas inside quotes don't split.
    fn parse_compact(literal: &str) -> Result<Self> {
        let inner = literal
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| SearchError::Parse(literal.to_string()))?
            .trim();

        // Scan once, toggling an inside-quotes flag on each unescaped quote.
        // Quote characters never reach the output; an escaped quote drops
        // both the backslash and the quote.
        let mut fields: Vec<String> = Vec::new();
        let mut buf = String::new();
        let mut inside = false;
        let mut prev = '\0';
        for c in inner.chars() {
            match c {
                ',' if !inside => {
                    fields.push(buf.trim().to_string());
                    buf.clear();
                }
                '"' if prev != '\\' => inside = !inside,
                '"' => {
                    buf.pop();
                }
                _ => buf.push(c),
            }
            prev = c;
        }
        if !buf.is_empty() {
            fields.push(buf.trim().to_string());
        }

        match <[String; 3]>::try_from(fields) {
            Ok([name, short_name, query_format]) => Ok(Self {
                name,
                short_name,
                query_format,
            }),
            Err(fields) => Err(SearchError::Parse(format!(
                "{} (expected 3 fields, got {})",
                literal,
                fields.len()
            ))),
        }
    }

    /// Build the launch URL for a search
    ///
    /// Percent-encodes the search text, then replaces every `%s` occurrence
    /// in the template with it. No validation that the result is a
    /// well-formed URL.
    pub fn query_url(&self, search: &str) -> String {
        let encoded = urlencoding::encode(search);
        self.query_format.replace(QUERY_PLACEHOLDER, &encoded)
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Search Engine object: [name: \"{}\", shortName: \"{}\", queryFormat: \"{}\"]",
            self.name, self.short_name, self.query_format
        )
    }
}

// True when the trimmed literal opens like a JSON object: a brace followed
// by a quoted key and a colon. Compact literals never match because their
// first field is followed by a comma.
fn looks_like_json_object(literal: &str) -> bool {
    static PROBE: OnceLock<Regex> = OnceLock::new();
    let probe = PROBE
        .get_or_init(|| Regex::new(r#"^\{\s*"(?:[^"\\]|\\.)*"\s*:"#).expect("probe regex is valid"));
    probe.is_match(literal)
}
