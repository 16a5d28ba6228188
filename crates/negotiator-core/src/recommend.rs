//! Single-task recommendation.
//!
//! Given the current task list, a time budget, and the user's energy, one
//! fixed model is asked to pick exactly one task and justify it. The
//! answer is free-form prose, a soft contract: nothing checks that the
//! named task appears verbatim in the input list.

use crate::config::Config;
use crate::error::{CoreError, RecommendError};
use crate::model::{GeminiModel, TextModel};
use crate::prompts;
use crate::task::{Task, UserEnergy};

/// Lower bound of the selectable time budget, minutes.
pub const MIN_TIME_BUDGET_MIN: u32 = 5;
/// Upper bound of the selectable time budget, minutes.
pub const MAX_TIME_BUDGET_MIN: u32 = 120;

/// What the user has to give right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Minutes available, clamped to 5..=120
    pub time_budget_min: u32,
    /// Current energy level
    pub energy: UserEnergy,
}

impl Constraints {
    /// Build constraints, clamping the time budget into the selectable
    /// range.
    pub fn new(time_budget_min: u32, energy: UserEnergy) -> Self {
        Self {
            time_budget_min: time_budget_min.clamp(MIN_TIME_BUDGET_MIN, MAX_TIME_BUDGET_MIN),
            energy,
        }
    }
}

/// Recommendation engine over one fixed model. No fallback, no retry.
pub struct Recommender {
    model: Box<dyn TextModel>,
}

impl Recommender {
    pub fn new(model: Box<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Build the configured Gemini recommender.
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let api_key = crate::model::api_key()?;
        let model = GeminiModel::new(&config.models.recommend, api_key)
            .with_base_url(&config.models.api_base_url)
            .with_generation(&config.generation);
        Ok(Self::new(Box::new(model)))
    }

    /// Recommend one task from the list.
    ///
    /// An empty list is a typed error -- no prompt is ever built from
    /// zero tasks. A model failure comes back as
    /// [`RecommendError::Model`]; callers flatten it into user-facing
    /// text rather than propagating it.
    pub async fn recommend(
        &self,
        tasks: &[Task],
        constraints: &Constraints,
    ) -> Result<String, RecommendError> {
        if tasks.is_empty() {
            return Err(RecommendError::NoTasks);
        }

        let tasks_json = serde_json::to_string(tasks)?;
        let prompt = prompts::recommendation_prompt(
            &tasks_json,
            constraints.time_budget_min,
            constraints.energy,
        );

        let text = self.model.generate(&prompt).await?;
        Ok(text.trim().to_string())
    }
}
