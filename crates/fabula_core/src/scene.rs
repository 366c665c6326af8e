//! The canonical scene-outline record.

use serde::{Deserialize, Serialize};

fn default_setting() -> String {
    "Unknown setting".to_string()
}

fn default_purpose() -> String {
    "Advance plot".to_string()
}

fn default_word_count() -> u32 {
    200
}

/// One planned scene within a chapter.
///
/// Records are immutable once constructed; transformations produce new
/// records. The `action` field is the identity key for deduplication:
/// two records with equal trimmed, lowercased `action` text are duplicates
/// regardless of the other fields.
///
/// Missing optional fields deserialize to planning defaults, so records
/// round-trip through the mapping representation used by external state
/// stores.
///
/// # Examples
///
/// ```
/// use fabula_core::SceneRecord;
///
/// let scene = SceneRecord::builder()
///     .scene_number(1u32)
///     .setting("The harbor at dawn")
///     .action("The smugglers unload their cargo")
///     .build()
///     .unwrap();
///
/// assert_eq!(*scene.scene_number(), 1);
/// assert_eq!(scene.purpose(), "Advance plot");
/// assert_eq!(*scene.estimated_word_count(), 200);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SceneRecord {
    /// 1-based position hint within the chapter (order-significant, not
    /// required to be contiguous)
    scene_number: u32,
    /// Where the scene takes place
    #[serde(default = "default_setting")]
    #[builder(default = "default_setting()")]
    setting: String,
    /// Characters appearing in the scene, in order of mention
    #[serde(default)]
    #[builder(default)]
    characters_present: Vec<String>,
    /// What happens in the scene; identity key for deduplication
    action: String,
    /// Narrative function of the scene
    #[serde(default = "default_purpose")]
    #[builder(default = "default_purpose()")]
    purpose: String,
    /// Planning hint for prose length, not binding
    #[serde(default = "default_word_count")]
    #[builder(default = "default_word_count()")]
    estimated_word_count: u32,
}

impl SceneRecord {
    /// Create a builder for a new scene record.
    pub fn builder() -> SceneRecordBuilder {
        SceneRecordBuilder::default()
    }

    /// Create a minimal record from a position, free-form action text, and
    /// purpose; the remaining fields take the planning defaults.
    pub fn from_action(
        scene_number: u32,
        action: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            scene_number,
            setting: default_setting(),
            characters_present: Vec::new(),
            action: action.into(),
            purpose: purpose.into(),
            estimated_word_count: default_word_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_planning_defaults() {
        let scene = SceneRecord::builder()
            .scene_number(3u32)
            .action("The duel begins")
            .build()
            .unwrap();

        assert_eq!(scene.setting(), "Unknown setting");
        assert!(scene.characters_present().is_empty());
        assert_eq!(scene.purpose(), "Advance plot");
        assert_eq!(*scene.estimated_word_count(), 200);
    }

    #[test]
    fn from_action_applies_planning_defaults() {
        let scene = SceneRecord::from_action(2, "The bridge collapses", "Cut off retreat");

        assert_eq!(*scene.scene_number(), 2);
        assert_eq!(scene.action(), "The bridge collapses");
        assert_eq!(scene.purpose(), "Cut off retreat");
        assert_eq!(scene.setting(), "Unknown setting");
        assert!(scene.characters_present().is_empty());
        assert_eq!(*scene.estimated_word_count(), 200);
    }

    #[test]
    fn builder_requires_action() {
        let result = SceneRecord::builder().scene_number(1u32).build();
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let scene: SceneRecord =
            serde_json::from_str(r#"{"scene_number": 2, "action": "A storm hits"}"#).unwrap();

        assert_eq!(*scene.scene_number(), 2);
        assert_eq!(scene.action(), "A storm hits");
        assert_eq!(scene.setting(), "Unknown setting");
        assert_eq!(*scene.estimated_word_count(), 200);
    }

    #[test]
    fn serialize_round_trips_through_mapping() {
        let scene = SceneRecord::builder()
            .scene_number(5u32)
            .setting("Cave")
            .characters_present(vec!["Mira".to_string()])
            .action("Mira lights the torch")
            .purpose("Reveal the mural")
            .estimated_word_count(350u32)
            .build()
            .unwrap();

        let json = serde_json::to_string(&scene).unwrap();
        let back: SceneRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }
}
