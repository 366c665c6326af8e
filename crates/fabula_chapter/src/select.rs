//! Scene-source selection policy.
//!
//! An upstream cache may supply an expanded chapter outline that already
//! contains a scene breakdown. When it does, the pipeline reuses those scenes
//! instead of paying for a fresh scene-splitting call.

use serde_json::Value;

/// Returns true when the expanded outline carries directly usable scene data.
///
/// Usable means: a JSON object whose `scenes` key holds a non-empty array.
/// Anything else (absent outline, wrong top-level type, missing key, empty
/// array) sends the pipeline down the scene-splitting fallback path.
///
/// # Examples
///
/// ```
/// use fabula_chapter::has_usable_scenes;
/// use serde_json::json;
///
/// let outline = json!({"scenes": [{"action": "The gates open"}]});
/// assert!(has_usable_scenes(Some(&outline)));
///
/// assert!(!has_usable_scenes(Some(&json!({"scenes": []}))));
/// assert!(!has_usable_scenes(None));
/// ```
pub fn has_usable_scenes(outline: Option<&Value>) -> bool {
    let Some(Value::Object(map)) = outline else {
        tracing::debug!("No expanded chapter outline available");
        return false;
    };

    match map.get("scenes") {
        Some(Value::Array(scenes)) if !scenes.is_empty() => {
            tracing::info!(
                scene_count = scenes.len(),
                "Reusing scene data from expanded chapter outline"
            );
            true
        }
        _ => {
            tracing::debug!("Expanded chapter outline has no usable scene data");
            false
        }
    }
}
