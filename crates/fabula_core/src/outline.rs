//! Tagged variants for ingesting cached expanded outlines.
//!
//! Upstream caches persist scene breakdowns in heterogeneous shapes:
//! already-typed records, loose key-value mappings, or bare strings. Each
//! element is classified into a [`SceneSource`] variant once at the ingestion
//! boundary, and the extraction adapter dispatches on the variant with an
//! exhaustive match instead of scattering runtime type checks.

use crate::SceneRecord;
use serde_json::Value;

/// One element of an expanded outline's `scenes` sequence, classified by shape.
///
/// Classification is total: every JSON value maps to exactly one variant.
///
/// # Examples
///
/// ```
/// use fabula_core::SceneSource;
/// use serde_json::json;
///
/// let typed = SceneSource::from(json!({"scene_number": 1, "action": "X"}));
/// assert!(matches!(typed, SceneSource::Typed(_)));
///
/// let mapping = SceneSource::from(json!({"description": "Y"}));
/// assert!(matches!(mapping, SceneSource::Mapping(_)));
///
/// let text = SceneSource::from(json!("Z happens"));
/// assert!(matches!(text, SceneSource::Text(_)));
///
/// let other = SceneSource::from(json!(42));
/// assert!(matches!(other, SceneSource::Other(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SceneSource {
    /// A complete scene record (all required fields present)
    Typed(SceneRecord),
    /// A key-value mapping missing some scene fields
    Mapping(serde_json::Map<String, Value>),
    /// A bare string describing the scene action
    Text(String),
    /// Anything else; skipped by the extraction adapter
    Other(Value),
}

impl From<Value> for SceneSource {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => SceneSource::Text(text),
            Value::Object(map) => {
                // A mapping promotes to a typed record when its required
                // fields are present and well-typed.
                match serde_json::from_value::<SceneRecord>(Value::Object(map.clone())) {
                    Ok(record) => SceneSource::Typed(record),
                    Err(_) => SceneSource::Mapping(map),
                }
            }
            other => SceneSource::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_mapping_promotes_to_typed() {
        let source = SceneSource::from(json!({
            "scene_number": 9,
            "setting": "Cave",
            "action": "Y",
        }));

        match source {
            SceneSource::Typed(record) => {
                assert_eq!(*record.scene_number(), 9);
                assert_eq!(record.setting(), "Cave");
            }
            other => panic!("expected Typed, got {other:?}"),
        }
    }

    #[test]
    fn partial_mapping_stays_mapping() {
        let source = SceneSource::from(json!({"action": "X"}));
        assert!(matches!(source, SceneSource::Mapping(_)));
    }

    #[test]
    fn mistyped_field_stays_mapping() {
        let source = SceneSource::from(json!({
            "scene_number": "not a number",
            "action": "X",
        }));
        assert!(matches!(source, SceneSource::Mapping(_)));
    }

    #[test]
    fn scalars_classify_as_other() {
        assert!(matches!(SceneSource::from(json!(7)), SceneSource::Other(_)));
        assert!(matches!(
            SceneSource::from(json!(null)),
            SceneSource::Other(_)
        ));
        assert!(matches!(
            SceneSource::from(json!([1, 2])),
            SceneSource::Other(_)
        ));
    }
}
