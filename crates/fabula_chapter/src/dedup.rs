//! Scene-outline deduplication.
//!
//! Non-deterministic scene planning produces near-identical scene outlines
//! across runs. This module removes them before prose generation, using the
//! `action` text as the identity key: exact match after trim/lowercase, or a
//! word-set Jaccard similarity above 0.8 when both actions are longer than
//! five words. The thresholds are fixed policy, not tuning knobs.

use fabula_core::SceneRecord;
use std::collections::HashSet;

/// Minimum word count before fuzzy comparison applies.
const FUZZY_MIN_WORDS: usize = 5;

/// Jaccard similarity above which two long actions are duplicates.
const FUZZY_THRESHOLD: f64 = 0.8;

/// Remove duplicate scenes, preserving the first occurrence and the relative
/// order of survivors.
///
/// Each candidate is compared against every already-accepted record, not
/// against rejected candidates, so a discarded near-duplicate never becomes
/// a comparison target itself. The scan is quadratic; chapter-level scene
/// counts are small enough that indexing would be overkill.
///
/// # Examples
///
/// ```
/// use fabula_chapter::dedup_scenes;
/// use fabula_core::SceneRecord;
///
/// let scene = |n: u32, action: &str| {
///     SceneRecord::builder()
///         .scene_number(n)
///         .action(action)
///         .build()
///         .unwrap()
/// };
///
/// let scenes = vec![
///     scene(1, "Hero finds treasure in the cave"),
///     scene(2, "  hero finds treasure in the cave  "),
///     scene(3, "Hero exits victorious"),
/// ];
///
/// let deduped = dedup_scenes(scenes);
/// assert_eq!(deduped.len(), 2);
/// assert_eq!(*deduped[0].scene_number(), 1);
/// assert_eq!(*deduped[1].scene_number(), 3);
/// ```
#[tracing::instrument(skip(scenes), fields(input_count = scenes.len()))]
pub fn dedup_scenes(scenes: Vec<SceneRecord>) -> Vec<SceneRecord> {
    let mut accepted: Vec<SceneRecord> = Vec::with_capacity(scenes.len());
    let mut accepted_actions: Vec<String> = Vec::with_capacity(scenes.len());

    for scene in scenes {
        let action = normalize_action(scene.action());
        let duplicate_of = accepted_actions
            .iter()
            .position(|kept| *kept == action || is_fuzzy_duplicate(kept, &action));

        match duplicate_of {
            Some(index) => {
                tracing::debug!(
                    scene_number = scene.scene_number(),
                    kept_scene_number = accepted[index].scene_number(),
                    "Discarding duplicate scene outline"
                );
            }
            None => {
                accepted_actions.push(action);
                accepted.push(scene);
            }
        }
    }

    tracing::debug!(output_count = accepted.len(), "Deduplication complete");
    accepted
}

/// Normalize an action string for comparison: trim surrounding whitespace
/// and lowercase.
fn normalize_action(action: &str) -> String {
    action.trim().to_lowercase()
}

/// Fuzzy duplicate test over normalized action strings.
///
/// Applies only when both actions tokenize to more than [`FUZZY_MIN_WORDS`]
/// whitespace-separated words; short actions are too ambiguous for word-set
/// comparison.
fn is_fuzzy_duplicate(a: &str, b: &str) -> bool {
    // The length gate counts tokens, not distinct words, so actions with
    // repeated words are still eligible for word-set comparison.
    if a.split_whitespace().count() <= FUZZY_MIN_WORDS
        || b.split_whitespace().count() <= FUZZY_MIN_WORDS
    {
        return false;
    }

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    jaccard(&words_a, &words_b) > FUZZY_THRESHOLD
}

/// Jaccard similarity of two word sets: |intersection| / |union|.
fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
