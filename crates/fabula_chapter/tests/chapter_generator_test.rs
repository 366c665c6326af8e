use async_trait::async_trait;
use fabula_chapter::ChapterGenerator;
use fabula_core::SceneRecord;
use fabula_error::{ChapterError, ChapterErrorKind, FabulaResult};
use fabula_interface::{ChapterContext, SceneSplitter, SceneWriter};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

fn scene(n: u32, action: &str) -> SceneRecord {
    SceneRecord::builder()
        .scene_number(n)
        .action(action)
        .build()
        .unwrap()
}

fn ctx() -> ChapterContext {
    ChapterContext::builder()
        .chapter_number(2u32)
        .chapter_count(10u32)
        .chapter_outline("The heist goes wrong.")
        .story_outline("A crew of thieves against a corrupt senate.")
        .build()
        .unwrap()
}

/// Mock splitter that returns a fixed scene list and counts invocations.
struct StaticSplitter {
    scenes: Vec<SceneRecord>,
    calls: AtomicUsize,
}

impl StaticSplitter {
    fn new(scenes: Vec<SceneRecord>) -> Self {
        Self {
            scenes,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SceneSplitter for StaticSplitter {
    async fn split_scenes(&self, _ctx: &ChapterContext) -> FabulaResult<Vec<SceneRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scenes.clone())
    }
}

/// Mock writer that echoes scene metadata into deterministic prose.
struct EchoWriter;

#[async_trait]
impl SceneWriter for EchoWriter {
    async fn write_scene(
        &self,
        scene: &SceneRecord,
        scene_number: usize,
        scene_count: usize,
        _ctx: &ChapterContext,
    ) -> FabulaResult<String> {
        Ok(format!(
            "[{scene_number}/{scene_count}] {}",
            scene.action()
        ))
    }
}

/// Mock writer that fails at a given post-dedup scene position.
struct FailingWriter {
    fail_at: usize,
}

#[async_trait]
impl SceneWriter for FailingWriter {
    async fn write_scene(
        &self,
        _scene: &SceneRecord,
        scene_number: usize,
        _scene_count: usize,
        _ctx: &ChapterContext,
    ) -> FabulaResult<String> {
        if scene_number == self.fail_at {
            return Err(ChapterError::new(ChapterErrorKind::ProseGeneration {
                scene: scene_number,
                message: "mock failure".to_string(),
            })
            .into());
        }
        Ok(format!("Scene {scene_number}"))
    }
}

#[tokio::test]
async fn usable_expanded_outline_skips_the_splitter() {
    let splitter = StaticSplitter::new(vec![scene(1, "should not be used")]);
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    let expanded = json!({
        "title": "Chapter 2",
        "scenes": [
            {"action": "The vault door jams"},
            {"scene_number": 9, "setting": "Vault", "action": "Alarms sound"},
        ],
    });

    let execution = generator.execute(&ctx(), Some(&expanded)).await.unwrap();

    assert_eq!(generator.splitter().call_count(), 0);
    assert_eq!(execution.scenes.len(), 2);
    assert_eq!(execution.scenes[0].action(), "The vault door jams");
    assert_eq!(*execution.scenes[1].scene_number(), 9);
    assert_eq!(
        execution.text,
        "[1/2] The vault door jams\n\n[2/2] Alarms sound"
    );
}

#[tokio::test]
async fn empty_scenes_array_falls_back_to_splitter() {
    let splitter = StaticSplitter::new(vec![scene(1, "The crew regroups")]);
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    let expanded = json!({"scenes": []});
    let execution = generator.execute(&ctx(), Some(&expanded)).await.unwrap();

    assert_eq!(generator.splitter().call_count(), 1);
    assert_eq!(execution.scenes.len(), 1);
    assert_eq!(execution.text, "[1/1] The crew regroups");
}

#[tokio::test]
async fn absent_outline_falls_back_to_splitter() {
    let splitter = StaticSplitter::new(vec![scene(1, "Opening move")]);
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    let execution = generator.execute(&ctx(), None).await.unwrap();

    assert_eq!(generator.splitter().call_count(), 1);
    assert_eq!(execution.scenes.len(), 1);
}

#[tokio::test]
async fn duplicate_scenes_are_removed_before_writing() {
    let splitter = StaticSplitter::new(vec![
        scene(1, "Hero finds treasure in the cave"),
        scene(2, "Hero finds treasure in the cave"),
        scene(3, "Hero exits victorious"),
    ]);
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    let execution = generator.execute(&ctx(), None).await.unwrap();

    // The writer sees post-dedup numbering: two scenes, numbered 1 and 2.
    assert_eq!(execution.scenes.len(), 2);
    assert_eq!(
        execution.text,
        "[1/2] Hero finds treasure in the cave\n\n[2/2] Hero exits victorious"
    );
}

#[tokio::test]
async fn writer_failure_propagates_without_partial_chapter() {
    let splitter = StaticSplitter::new(vec![
        scene(1, "First scene"),
        scene(2, "Second scene"),
        scene(3, "Third scene"),
    ]);
    let generator = ChapterGenerator::new(splitter, FailingWriter { fail_at: 2 });

    let result = generator.execute(&ctx(), None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn all_elements_skipped_yields_empty_chapter() {
    let splitter = StaticSplitter::new(vec![scene(1, "unused fallback")]);
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    // Usable per the selection policy (non-empty array), but every element
    // is malformed, so extraction yields nothing and the chapter is empty.
    let expanded = json!({"scenes": [17, null, [1, 2]]});
    let execution = generator.execute(&ctx(), Some(&expanded)).await.unwrap();

    assert_eq!(generator.splitter().call_count(), 0);
    assert!(execution.scenes.is_empty());
    assert_eq!(execution.text, "");
}

#[tokio::test]
async fn malformed_elements_are_skipped_in_the_reuse_path() {
    let splitter = StaticSplitter::new(Vec::new());
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    let expanded = json!({
        "scenes": [
            {"action": "valid one"},
            42,
            {"action": "valid two"},
        ],
    });

    let execution = generator.execute(&ctx(), Some(&expanded)).await.unwrap();
    assert_eq!(execution.scenes.len(), 2);
}

#[tokio::test]
async fn generate_chapter_returns_assembled_text() {
    let splitter = StaticSplitter::new(vec![scene(1, "Only scene")]);
    let generator = ChapterGenerator::new(splitter, EchoWriter);

    let text = generator.generate_chapter(&ctx(), None).await.unwrap();
    assert_eq!(text, "[1/1] Only scene");
}

#[tokio::test]
async fn assembled_text_never_contains_triple_newlines() {
    /// Writer that pads its prose with sloppy whitespace.
    struct SloppyWriter;

    #[async_trait]
    impl SceneWriter for SloppyWriter {
        async fn write_scene(
            &self,
            scene: &SceneRecord,
            _scene_number: usize,
            _scene_count: usize,
            _ctx: &ChapterContext,
        ) -> FabulaResult<String> {
            Ok(format!("\n\n{}\n\n\n", scene.action()))
        }
    }

    let splitter = StaticSplitter::new(vec![scene(1, "Scene A text"), scene(2, "Scene B text")]);
    let generator = ChapterGenerator::new(splitter, SloppyWriter);

    let execution = generator.execute(&ctx(), None).await.unwrap();
    assert_eq!(execution.text, "Scene A text\n\nScene B text");
    assert!(!execution.text.contains("\n\n\n"));
}
