//! Tolerant parsing of the service's answer.
//!
//! The service is asked for `{"description": string, "complexity": number}`
//! but may answer with fenced JSON, partial objects, wrong types, or prose.
//! Each field falls back to its default on its own.

use cg_core::entities::Analysis;
use serde_json::Value;

/// Turn raw message content into an [`Analysis`]. Never fails.
#[must_use]
pub fn parse_analysis(content: &str) -> Analysis {
    parse_analysis_or(content, &Analysis::default())
}

/// Like [`parse_analysis`], with `fallback` supplying missing fields.
#[must_use]
pub fn parse_analysis_or(content: &str, fallback: &Analysis) -> Analysis {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(strip_fences(content)) else {
        tracing::warn!(preview = %preview(content), "judge response is not a JSON object");
        return fallback.clone();
    };

    let description = fields
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map_or_else(|| fallback.description.clone(), str::to_string);

    let complexity = fields
        .get("complexity")
        .and_then(Value::as_f64)
        .map_or(fallback.complexity, Analysis::normalize_complexity);

    Analysis {
        description,
        complexity,
    }
}

/// Remove a surrounding markdown code fence (with optional info string).
fn strip_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn preview(content: &str) -> String {
    content.chars().take(80).collect()
}
