//! Generation gateway: compose, call, normalize.
//!
//! Every public operation returns a value, never an `Err` — provider and
//! transport failures are folded into [`GenerationOutcome::Failure`] with
//! synthesized fallback text, and a missing credential fails fast without
//! touching the network.

use postpilot_core::app_config::AppConfig;
use postpilot_core::modes;
use postpilot_prompt::composer::{self, ComposedPrompt};
use postpilot_prompt::profile::UserProfile;
use postpilot_prompt::topics;

use crate::client::AnthropicClient;
use crate::error::AiError;

/// Provider identifier stamped on successful outcomes.
const PROVIDER: &str = "anthropic";

/// How much of the source prompt survives into fallback text.
const FALLBACK_EXCERPT_CHARS: usize = 100;

/// The outcome of a generation call. Callers must handle both variants;
/// there is no panicking accessor.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    Success {
        content: String,
        tokens_used: u32,
        provider: &'static str,
        model: String,
    },
    Failure {
        error: String,
        /// Locally synthesized text so the user still gets something usable.
        fallback_content: String,
    },
}

impl GenerationOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }
}

/// Gateway to the text-generation API, configured once at startup.
pub struct ContentGenerator {
    client: Option<AnthropicClient>,
    model: String,
    max_tokens: u32,
}

impl ContentGenerator {
    /// Builds the gateway from application config. A missing API key is not
    /// an error here — generation calls will fail fast with fallback text.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AiError> {
        let client = config
            .anthropic_api_key
            .as_deref()
            .map(|key| AnthropicClient::new(key, config.ai_request_timeout_secs))
            .transpose()?;

        Ok(Self {
            client,
            model: config.ai_model.clone(),
            max_tokens: config.ai_max_tokens,
        })
    }

    /// Builds a gateway around an existing client (or none). Used by tests
    /// to point at a mock server or simulate a missing credential.
    #[must_use]
    pub fn new(client: Option<AnthropicClient>, model: &str, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.to_string(),
            max_tokens,
        }
    }

    /// Generates a post for the user.
    ///
    /// `content_mode` defaults to the profile's own mode; when `prompt` is
    /// absent a topic is auto-selected from the mode's pool extended with
    /// skill-derived suggestions.
    pub async fn generate_post(
        &self,
        profile: &UserProfile,
        prompt: Option<&str>,
        platform: Option<&str>,
        content_mode: Option<&str>,
    ) -> GenerationOutcome {
        let mode = content_mode.unwrap_or(&profile.content_mode);
        let topic = match prompt {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => auto_topic(mode, &profile.skills),
        };

        let pair = composer::generation_prompt(profile, &topic, mode, platform);
        self.dispatch(&pair, &topic, platform).await
    }

    /// Asks for three distinct post ideas grounded in free-text context.
    pub async fn generate_suggestions(
        &self,
        profile: &UserProfile,
        context: &str,
    ) -> GenerationOutcome {
        let pair = composer::suggestion_prompt(profile, context);
        self.dispatch(&pair, context, None).await
    }

    /// Improves existing content. Degrades to the original text on any
    /// failure — the user never loses their draft.
    pub async fn optimize_content(&self, content: &str) -> String {
        let pair = composer::optimization_prompt(content);
        match self.dispatch(&pair, content, None).await {
            GenerationOutcome::Success { content, .. } => content,
            GenerationOutcome::Failure { .. } => content.to_string(),
        }
    }

    /// One attempt against the API; all failure shapes collapse into
    /// `Failure` with fallback text.
    async fn dispatch(
        &self,
        pair: &ComposedPrompt,
        source_text: &str,
        platform: Option<&str>,
    ) -> GenerationOutcome {
        let Some(client) = &self.client else {
            tracing::warn!("generation requested without a configured API credential");
            return GenerationOutcome::Failure {
                error: AiError::MissingApiKey.to_string(),
                fallback_content: fallback_content(source_text, platform),
            };
        };

        match client
            .complete(&self.model, self.max_tokens, &pair.system, &pair.user)
            .await
        {
            Ok(completion) => GenerationOutcome::Success {
                content: completion.text,
                tokens_used: completion.output_tokens,
                provider: PROVIDER,
                model: self.model.clone(),
            },
            Err(err) => {
                tracing::warn!(error = %err, model = %self.model, "content generation failed");
                GenerationOutcome::Failure {
                    error: err.to_string(),
                    fallback_content: fallback_content(source_text, platform),
                }
            }
        }
    }
}

/// Picks an auto topic for the mode, falling back to the business pool for
/// unregistered modes so topicless generation still works.
fn auto_topic(mode_key: &str, skills: &[String]) -> String {
    match modes::definition_for(mode_key).or_else(|| modes::definition_for("business")) {
        Some(mode) => topics::select_topic(mode, skills),
        None => "Share an insight from your recent work".to_string(),
    }
}

/// Synthesizes placeholder text from the first [`FALLBACK_EXCERPT_CHARS`]
/// characters of the source prompt.
fn fallback_content(source_text: &str, platform: Option<&str>) -> String {
    let platform_text = platform.map_or_else(String::new, |p| format!(" for {p}"));
    let excerpt: String = source_text.chars().take(FALLBACK_EXCERPT_CHARS).collect();
    format!(
        "Here's your post{platform_text}: {excerpt}... \
         [Please customize this message to match your voice and add relevant details]"
    )
}
