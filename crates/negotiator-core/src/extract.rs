//! Brain-dump extraction.
//!
//! The [`Extractor`] turns free-form text into [`Task`] records by asking
//! an ordered cascade of text models. Each tier gets the identical prompt;
//! the first one whose output survives normalization and parsing wins.
//! A tier failure -- transport, HTTP, or unparseable output -- feeds the
//! fallback decision and is never raised past [`Extractor::extract`].

use serde_json::Value;

use crate::config::Config;
use crate::error::{Attempt, CoreError, ExtractError, TierError};
use crate::model::{GeminiModel, TextModel};
use crate::prompts;
use crate::task::Task;

/// Result of a successful extraction.
#[derive(Debug)]
pub struct Extraction {
    /// Decoded records, in model order; malformed records already dropped
    pub tasks: Vec<Task>,
    /// Which tier of the cascade produced the list
    pub model: String,
}

/// Ordered model cascade for task extraction.
pub struct Extractor {
    models: Vec<Box<dyn TextModel>>,
}

impl Extractor {
    /// Build an extractor over an explicit cascade. Order matters: the
    /// first model is the cheap tier, later ones are fallbacks.
    pub fn new(models: Vec<Box<dyn TextModel>>) -> Self {
        Self { models }
    }

    /// Build the configured Gemini cascade.
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let api_key = crate::model::api_key()?;
        let models = config
            .models
            .extract
            .iter()
            .map(|id| {
                Box::new(
                    GeminiModel::new(id, &api_key)
                        .with_base_url(&config.models.api_base_url)
                        .with_generation(&config.generation),
                ) as Box<dyn TextModel>
            })
            .collect();
        Ok(Self::new(models))
    }

    /// Extract tasks from a brain dump.
    ///
    /// On success the returned [`Extraction`] names the model that
    /// answered. On failure every attempt is listed in the error; the
    /// caller should treat that as "no tasks available", not a crash.
    pub async fn extract(&self, text: &str) -> Result<Extraction, ExtractError> {
        if self.models.is_empty() {
            return Err(ExtractError::NoModels);
        }

        let prompt = prompts::extraction_prompt(text);
        let mut attempts = Vec::new();

        for model in &self.models {
            match try_model(model.as_ref(), &prompt).await {
                Ok(tasks) => {
                    return Ok(Extraction {
                        tasks,
                        model: model.id().to_string(),
                    })
                }
                Err(error) => attempts.push(Attempt {
                    model: model.id().to_string(),
                    error,
                }),
            }
        }

        Err(ExtractError::AllModelsFailed(attempts))
    }
}

async fn try_model(model: &dyn TextModel, prompt: &str) -> Result<Vec<Task>, TierError> {
    let raw = model.generate(prompt).await?;
    parse_task_list(&raw)
}

/// Parse normalized model output into task records.
///
/// The payload must be a JSON array; individual records that fail the
/// record invariant are dropped silently, so a well-formed array of junk
/// still "succeeds" with a shorter (possibly empty) list.
pub fn parse_task_list(raw: &str) -> Result<Vec<Task>, TierError> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(cleaned)?;
    let records = value.as_array().ok_or(TierError::NotAnArray)?;
    Ok(records.iter().filter_map(Task::from_value).collect())
}

/// Strip markdown code fences the model may wrap the payload in.
///
/// Handles ```json and bare ``` fencing, with or without a newline after
/// the opening fence. Unfenced input passes through trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
