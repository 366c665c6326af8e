//! LLM-backed scene collaborators.
//!
//! Driver-generic implementations of the scene-splitting and prose-writing
//! seams. The splitter retries until the provider yields a parseable scene
//! list; the writer makes a single call per scene and leaves retry policy to
//! the driver.

use crate::{extract_json, parse_json};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, MessageBuilder, Role, SceneRecord};
use fabula_error::{BuilderError, ChapterError, ChapterErrorKind, FabulaResult};
use fabula_interface::{ChapterContext, SceneSplitter, SceneWriter, StoryDriver};

const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Splits a chapter outline into scenes by prompting an LLM driver.
///
/// Providers do not reliably emit valid JSON, so the splitter retries the
/// full call up to `max_attempts` times until the response parses into a
/// non-empty scene list.
pub struct LlmSceneSplitter<D: StoryDriver> {
    driver: D,
    max_attempts: usize,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl<D: StoryDriver> LlmSceneSplitter<D> {
    /// Create a splitter over the given driver with default settings.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the maximum number of generation attempts (minimum 1).
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the sampling temperature for scene splitting.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the token budget for scene splitting.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Get a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

#[async_trait]
impl<D: StoryDriver> SceneSplitter for LlmSceneSplitter<D> {
    #[tracing::instrument(
        skip(self, ctx),
        fields(chapter = *ctx.chapter_number(), provider = self.driver.provider_name())
    )]
    async fn split_scenes(&self, ctx: &ChapterContext) -> FabulaResult<Vec<SceneRecord>> {
        let request = self.build_request(ctx)?;
        let mut last_failure = String::new();

        for attempt in 1..=self.max_attempts {
            // Driver failures propagate unchanged; only malformed output
            // earns another attempt.
            let response = self.driver.generate(&request).await?;

            match extract_json(response.text())
                .and_then(|json| parse_json::<Vec<SceneRecord>>(&json))
            {
                Ok(scenes) if !scenes.is_empty() => {
                    tracing::info!(attempt, scene_count = scenes.len(), "Scene split succeeded");
                    return Ok(scenes);
                }
                Ok(_) => {
                    last_failure = "provider returned an empty scene list".to_string();
                    tracing::warn!(attempt, "Scene split returned empty list, retrying");
                }
                Err(e) => {
                    last_failure = e.to_string();
                    tracing::warn!(attempt, error = %e, "Scene split response unparseable, retrying");
                }
            }
        }

        Err(ChapterError::new(ChapterErrorKind::SceneSplit(format!(
            "no valid scene list after {} attempts: {}",
            self.max_attempts, last_failure
        )))
        .into())
    }
}

impl<D: StoryDriver> LlmSceneSplitter<D> {
    fn build_request(&self, ctx: &ChapterContext) -> FabulaResult<GenerateRequest> {
        let prompt = format!(
            "You are planning chapter {} of {} for a novel.\n\n\
             Full story outline:\n{}\n\n{}\
             Chapter outline:\n{}\n\n\
             Break this chapter into an ordered list of scenes. Output ONLY a JSON \
             array where each element has the fields: scene_number (integer), \
             setting (string), characters_present (array of strings), action \
             (string), purpose (string), estimated_word_count (integer).",
            ctx.chapter_number(),
            ctx.chapter_count(),
            ctx.story_outline(),
            ctx.base_context()
                .as_ref()
                .map(|base| format!("Base context:\n{base}\n\n"))
                .unwrap_or_default(),
            ctx.chapter_outline(),
        );

        let message = MessageBuilder::default()
            .role(Role::User)
            .content(prompt)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        GenerateRequest::builder()
            .messages(vec![message])
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()).into())
    }
}

/// Writes prose for one scene by prompting an LLM driver.
pub struct LlmSceneWriter<D: StoryDriver> {
    driver: D,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl<D: StoryDriver> LlmSceneWriter<D> {
    /// Create a writer over the given driver with default settings.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature for prose generation.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the token budget for prose generation.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Get a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

#[async_trait]
impl<D: StoryDriver> SceneWriter for LlmSceneWriter<D> {
    #[tracing::instrument(
        skip(self, scene, ctx),
        fields(
            chapter = *ctx.chapter_number(),
            scene = scene_number,
            provider = self.driver.provider_name()
        )
    )]
    async fn write_scene(
        &self,
        scene: &SceneRecord,
        scene_number: usize,
        scene_count: usize,
        ctx: &ChapterContext,
    ) -> FabulaResult<String> {
        let prompt = format!(
            "Write scene {scene_number} of {scene_count} for chapter {} of {}.\n\n\
             Full story outline:\n{}\n\n{}\
             Setting: {}\n\
             Characters present: {}\n\
             Action: {}\n\
             Purpose: {}\n\
             Target length: about {} words.\n\n\
             Write the scene as polished narrative prose. Output ONLY the prose.",
            ctx.chapter_number(),
            ctx.chapter_count(),
            ctx.story_outline(),
            ctx.base_context()
                .as_ref()
                .map(|base| format!("Base context:\n{base}\n\n"))
                .unwrap_or_default(),
            scene.setting(),
            scene.characters_present().join(", "),
            scene.action(),
            scene.purpose(),
            scene.estimated_word_count(),
        );

        let message = MessageBuilder::default()
            .role(Role::User)
            .content(prompt)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let request = GenerateRequest::builder()
            .messages(vec![message])
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let response = self.driver.generate(&request).await?;
        let text = response.text().trim();

        if text.is_empty() {
            return Err(ChapterError::new(ChapterErrorKind::ProseGeneration {
                scene: scene_number,
                message: "provider returned empty prose".to_string(),
            })
            .into());
        }

        Ok(text.to_string())
    }
}
