//! Scene extraction adapter.
//!
//! Converts the heterogeneous `scenes` sequence of a cached expanded outline
//! into uniform [`SceneRecord`]s. Extraction is partial-failure tolerant:
//! a malformed element is skipped with a diagnostic and never aborts the
//! chapter.

use fabula_core::{SceneRecord, SceneSource};
use serde::Deserialize;
use serde_json::Value;

/// Loose mapping shape for scenes persisted without all fields.
///
/// `description` is accepted as a fallback key for `action`, matching what
/// older outline caches wrote.
#[derive(Debug, Deserialize)]
struct MappingScene {
    scene_number: Option<u32>,
    setting: Option<String>,
    characters_present: Option<Vec<String>>,
    action: Option<String>,
    description: Option<String>,
    purpose: Option<String>,
    estimated_word_count: Option<u32>,
}

/// Normalize a sequence of cached scene representations into scene records.
///
/// Each element is classified into a [`SceneSource`] variant and converted:
/// typed records pass through, mappings fill absent fields with planning
/// defaults, bare strings become minimal records, and anything else is
/// skipped with a logged diagnostic. Output preserves input order minus
/// skipped elements; this function never fails.
///
/// # Examples
///
/// ```
/// use fabula_chapter::extract_scenes;
/// use serde_json::json;
///
/// let elements = vec![
///     json!({"action": "X"}),
///     json!({"scene_number": 9, "setting": "Cave", "action": "Y"}),
/// ];
///
/// let scenes = extract_scenes(&elements);
/// assert_eq!(scenes.len(), 2);
/// assert_eq!(*scenes[0].scene_number(), 1);
/// assert_eq!(scenes[0].setting(), "Unknown setting");
/// assert_eq!(*scenes[1].scene_number(), 9);
/// assert_eq!(scenes[1].setting(), "Cave");
/// ```
#[tracing::instrument(skip(elements), fields(element_count = elements.len()))]
pub fn extract_scenes(elements: &[Value]) -> Vec<SceneRecord> {
    let mut records = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        let position = index + 1;
        match SceneSource::from(element.clone()) {
            SceneSource::Typed(record) => records.push(record),
            SceneSource::Mapping(map) => match scene_from_mapping(map, position) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(position, "Skipping malformed scene mapping");
                }
            },
            SceneSource::Text(text) => records.push(scene_from_text(text, position)),
            SceneSource::Other(value) => {
                tracing::warn!(
                    position,
                    element = %value,
                    "Skipping scene element with unsupported shape"
                );
            }
        }
    }

    tracing::debug!(extracted = records.len(), "Scene extraction complete");
    records
}

/// Convert a loose mapping into a scene record, filling absent fields with
/// planning defaults. Returns `None` when a present field has an
/// incompatible value.
fn scene_from_mapping(
    map: serde_json::Map<String, Value>,
    position: usize,
) -> Option<SceneRecord> {
    let mapping: MappingScene = serde_json::from_value(Value::Object(map)).ok()?;

    let mut builder = SceneRecord::builder();
    builder
        .scene_number(mapping.scene_number.unwrap_or(position as u32))
        .action(
            mapping
                .action
                .or(mapping.description)
                .unwrap_or_else(|| "Scene action".to_string()),
        );
    if let Some(setting) = mapping.setting {
        builder.setting(setting);
    }
    if let Some(characters) = mapping.characters_present {
        builder.characters_present(characters);
    }
    if let Some(purpose) = mapping.purpose {
        builder.purpose(purpose);
    }
    if let Some(count) = mapping.estimated_word_count {
        builder.estimated_word_count(count);
    }

    builder.build().ok()
}

/// Convert a bare string into a minimal scene record with the string as the
/// action text.
fn scene_from_text(text: String, position: usize) -> SceneRecord {
    SceneRecord::from_action(position as u32, text, "From expanded outline")
}
