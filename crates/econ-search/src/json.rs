//! Recursive search over JSON reports.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::score;

/// A keyword occurrence in a JSON leaf value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonMatch {
    /// The keyword that matched.
    pub keyword: String,
    /// Location of the leaf: `.key` for object members, `[i]` for array items.
    pub path: String,
    /// The leaf value as a string, in its original case.
    pub value: String,
    /// Relevance of the value for the keyword.
    pub relevance_score: f64,
}

/// Result of searching a JSON report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JsonResults {
    /// Keywords derived from the query.
    pub keywords: Vec<String>,
    /// Matches ordered by descending relevance, at most one per (path, keyword).
    pub matches: Vec<JsonMatch>,
}

impl JsonResults {
    /// Returns true if the query had no searchable keywords.
    pub fn is_empty_query(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Renders a JSON leaf as text.
///
/// Strings are returned without quotes; numbers, booleans and null use their JSON
/// spelling.
pub fn leaf_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Searches every leaf of `document`.
///
/// Objects are walked in document order and arrays in index order. Candidates are sorted
/// by descending relevance and then reduced to the first match for each (path, keyword)
/// pair.
pub fn search_json(document: &JsonValue, keywords: Vec<String>) -> JsonResults {
    if keywords.is_empty() {
        return JsonResults::default();
    }

    let mut candidates = Vec::new();
    walk(document, "", &keywords, &mut candidates);
    candidates.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

    let mut seen = HashSet::new();
    let matches: Vec<JsonMatch> = candidates
        .into_iter()
        .filter(|m| seen.insert((m.path.clone(), m.keyword.clone())))
        .collect();

    debug!(keywords = ?keywords, matches = matches.len(), "json search complete");
    JsonResults { keywords, matches }
}

/// Visits `node` at `path`, pushing a candidate for each keyword found in a leaf.
fn walk(node: &JsonValue, path: &str, keywords: &[String], out: &mut Vec<JsonMatch>) {
    match node {
        JsonValue::Object(members) => {
            for (key, child) in members {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, &child_path, keywords, out);
            }
        }
        JsonValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, &format!("{path}[{index}]"), keywords, out);
            }
        }
        leaf => {
            let value = leaf_text(leaf);
            let lowered = value.to_lowercase();
            for keyword in keywords {
                if lowered.contains(keyword.as_str()) {
                    out.push(JsonMatch {
                        keyword: keyword.clone(),
                        path: path.to_string(),
                        value: value.clone(),
                        relevance_score: score(&lowered, keyword),
                    });
                }
            }
        }
    }
}
