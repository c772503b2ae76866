//! Model-backed story generator.

use crate::{advance_prompt, parse_story_node, start_prompt, story_node_schema, system_instruction};
use async_trait::async_trait;
use borboleta_core::{
    BorboletaConfig, GameTheme, GenerateRequest, HistoryItem, Message, PlayerIdentity, Role,
    StoryNode,
};
use borboleta_error::{GenerationError, GenerationResult, StoryError, StoryErrorKind};
use borboleta_interface::{BorboletaDriver, StoryGenerator};
use tracing::{debug, error, instrument};

/// [`StoryGenerator`] that prompts a model through any [`BorboletaDriver`].
///
/// Each call sends the Game Master system instruction plus one user prompt,
/// asks for JSON matching [`story_node_schema`], and validates the node
/// before returning it. Nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use borboleta_core::{BorboletaConfig, GameTheme, PlayerIdentity};
/// use borboleta_interface::StoryGenerator;
/// use borboleta_models::GeminiClient;
/// use borboleta_narrative::LlmStoryGenerator;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BorboletaConfig::load()?;
/// let generator = LlmStoryGenerator::from_config(GeminiClient::from_config(config.gemini())?, &config);
/// let node = generator
///     .request_start(GameTheme::ClimaAmbiental, PlayerIdentity::Mulher)
///     .await?;
/// println!("{}", node.story_text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LlmStoryGenerator<D> {
    driver: D,
    model: Option<String>,
    temperature: f32,
    max_tokens: Option<u32>,
    choices_per_node: usize,
    history_excerpt_chars: usize,
}

impl<D: BorboletaDriver> LlmStoryGenerator<D> {
    /// Generator with default settings (3 choices, 50-char excerpts, temperature 0.9).
    pub fn new(driver: D) -> Self {
        Self::from_config(driver, &BorboletaConfig::default())
    }

    /// Generator using the `[gemini]` and `[story]` configuration sections.
    pub fn from_config(driver: D, config: &BorboletaConfig) -> Self {
        Self {
            driver,
            model: Some(config.gemini().model().clone()),
            temperature: config.gemini().temperature(),
            max_tokens: config.gemini().max_output_tokens(),
            choices_per_node: config.story().choices_per_node(),
            history_excerpt_chars: config.story().history_excerpt_chars(),
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn request(&self, theme: GameTheme, prompt: String) -> GenerationResult<GenerateRequest> {
        GenerateRequest::builder()
            .messages(vec![
                Message::text(
                    Role::System,
                    system_instruction(theme, self.choices_per_node),
                ),
                Message::text(Role::User, prompt),
            ])
            .model(self.model.clone())
            .temperature(Some(self.temperature))
            .max_tokens(self.max_tokens)
            .response_schema(Some(story_node_schema(self.choices_per_node)))
            .build()
            .map_err(|e| GenerationError::transport(format!("Failed to build request: {}", e)))
    }

    async fn generate_node(&self, request: GenerateRequest) -> GenerationResult<StoryNode> {
        let response = self.driver.generate(&request).await.map_err(|e| {
            error!(error = %e, provider = self.driver.provider_name(), "Model request failed");
            GenerationError::transport(e.to_string())
        })?;

        let text = response.first_text().ok_or_else(|| {
            error!("Model response carried no text output");
            StoryError::new(StoryErrorKind::NoText)
        })?;
        debug!(chars = text.chars().count(), "Parsing story node");

        Ok(parse_story_node(text, self.choices_per_node)?)
    }
}

#[async_trait]
impl<D: BorboletaDriver> StoryGenerator for LlmStoryGenerator<D> {
    #[instrument(skip(self), fields(model = self.driver.model_name()))]
    async fn request_start(
        &self,
        theme: GameTheme,
        identity: PlayerIdentity,
    ) -> GenerationResult<StoryNode> {
        let request = self.request(theme, start_prompt(theme, identity, self.choices_per_node))?;
        let node = self.generate_node(request).await?;
        if node.is_end() {
            error!("Model ended the story on its opening node");
            return Err(StoryError::new(StoryErrorKind::TerminalOpening).into());
        }
        Ok(node)
    }

    #[instrument(skip(self, history), fields(model = self.driver.model_name(), history_len = history.len()))]
    async fn request_advance(
        &self,
        history: &[HistoryItem],
        identity: PlayerIdentity,
        theme: GameTheme,
    ) -> GenerationResult<StoryNode> {
        let Some(prompt) = advance_prompt(
            history,
            identity,
            self.history_excerpt_chars,
            self.choices_per_node,
        ) else {
            error!("Advance requested with an empty history");
            return Err(GenerationError::transport(
                "cannot advance a story without any history",
            ));
        };

        let request = self.request(theme, prompt)?;
        self.generate_node(request).await
    }
}
