//! Utilities for extracting structured data from LLM responses.
//!
//! Scene-splitting responses often arrive as JSON wrapped in markdown code
//! fences or mixed with explanatory prose. These helpers pull the JSON
//! payload out of common response patterns before parsing.

use fabula_error::{ChapterError, ChapterErrorKind, FabulaResult, JsonError};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Strategies, in order:
/// 1. Markdown code fences: ```` ```json ... ``` ````
/// 2. The first balanced `[ ... ]` or `{ ... }` span, whichever opens first
///
/// # Errors
///
/// Returns an error when no JSON payload is found in the response.
///
/// # Examples
///
/// ```
/// use fabula_chapter::extract_json;
///
/// let response = "Here are the scenes:\n```json\n[{\"scene_number\": 1, \"action\": \"X\"}]\n```\n";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn extract_json(response: &str) -> FabulaResult<String> {
    if let Some(json) = fenced_block(response) {
        return Ok(json);
    }

    // Scene lists are arrays; prefer whichever structure opens first so a
    // leading object in the prose does not shadow the payload.
    let candidates = match (response.find('['), response.find('{')) {
        (Some(a), Some(o)) if a < o => [('[', ']'), ('{', '}')],
        (Some(_), None) => [('[', ']'), ('[', ']')],
        _ => [('{', '}'), ('[', ']')],
    };

    for (open, close) in candidates {
        if let Some(json) = balanced_span(response, open, close) {
            return Ok(json.to_string());
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in provider response"
    );

    Err(ChapterError::new(ChapterErrorKind::MalformedResponse(format!(
        "no JSON found in response of {} bytes",
        response.len()
    )))
    .into())
}

/// Parse extracted JSON into a concrete type.
///
/// # Errors
///
/// Returns an error when the JSON string does not deserialize into `T`.
///
/// # Examples
///
/// ```
/// use fabula_chapter::parse_json;
/// use fabula_core::SceneRecord;
///
/// let json = r#"[{"scene_number": 1, "action": "The gates open"}]"#;
/// let scenes: Vec<SceneRecord> = parse_json(json).unwrap();
/// assert_eq!(scenes.len(), 1);
/// ```
pub fn parse_json<T>(json: &str) -> FabulaResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| {
        let preview: String = json.chars().take(100).collect();
        tracing::error!(error = %e, json_preview = %preview, "JSON parsing failed");
        JsonError::new(format!("failed to parse JSON: {e} (payload: {preview}...)")).into()
    })
}

/// Pull the contents of the first markdown code fence, preferring a
/// `json`-tagged fence over an untagged one.
fn fenced_block(response: &str) -> Option<String> {
    for tag in ["```json", "```"] {
        let Some(start) = response.find(tag) else {
            continue;
        };
        let body = &response[start + tag.len()..];
        // Skip a language tag on a bare fence
        let body = match body.find('\n') {
            Some(newline) if tag == "```" => &body[newline + 1..],
            _ => body,
        };
        // A missing closing fence usually means a truncated response; take
        // everything that remains.
        let content = match body.find("```") {
            Some(end) => &body[..end],
            None => body,
        };
        return Some(content.trim().to_string());
    }
    None
}

/// Find the first span balanced between `open` and `close`, honoring JSON
/// string literals and escapes so braces inside strings do not miscount.
fn balanced_span(response: &str, open: char, close: char) -> Option<&str> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in response[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            c if c == open => depth += 1,
            c if c == close => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&response[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_fence() {
        let response = "Here you go:\n\n```json\n[{\"scene_number\": 1, \"action\": \"X\"}]\n```\nEnjoy!";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn extracts_from_untagged_fence() {
        let response = "```\n{\"scene_number\": 2, \"action\": \"Y\"}\n```";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
    }

    #[test]
    fn extracts_balanced_array_from_prose() {
        let response = "Sure! The scenes are: [{\"scene_number\": 1, \"action\": \"X\"}] as requested.";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "[{\"scene_number\": 1, \"action\": \"X\"}]");
    }

    #[test]
    fn nested_structures_stay_balanced() {
        let response = r#"{"outer": {"inner": [1, 2, 3]}}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn braces_inside_strings_do_not_miscount() {
        let response = r#"{"action": "She said \"go {now}\" and left"}"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("go {now}"));
    }

    #[test]
    fn plain_text_is_an_error() {
        assert!(extract_json("No structured data here at all").is_err());
    }

    #[test]
    fn truncated_fence_recovers_remaining_content() {
        let response = "```json\n[{\"scene_number\": 1, \"action\": \"X\"}]";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn parse_json_reports_invalid_payload() {
        let result: FabulaResult<Vec<i32>> = parse_json("[1, 2, oops]");
        assert!(result.is_err());
    }
}
