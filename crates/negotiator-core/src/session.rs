//! Caller-held session state.
//!
//! One [`Session`] per interactive user. It owns the task list and the
//! last recommendation; the engines stay stateless and are passed in by
//! reference, so there is no global storage anywhere. Cross-session
//! isolation is the caller's concern.

use chrono::{DateTime, Utc};

use crate::error::{ExtractError, RecommendError};
use crate::extract::Extractor;
use crate::recommend::{Constraints, Recommender};
use crate::task::Task;

/// In-memory state for one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    tasks: Vec<Task>,
    recommendation: Option<String>,
    extracted_at: Option<DateTime<Utc>>,
    extracted_with: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current task list, empty until the first successful capture.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Last recommendation text, if any.
    pub fn recommendation(&self) -> Option<&str> {
        self.recommendation.as_deref()
    }

    /// When the current task list was extracted.
    pub fn extracted_at(&self) -> Option<DateTime<Utc>> {
        self.extracted_at
    }

    /// Which model tier produced the current task list.
    pub fn extracted_with(&self) -> Option<&str> {
        self.extracted_with.as_deref()
    }

    /// Run an extraction and replace the task list wholesale.
    ///
    /// On failure the list is emptied (never left partially mutated) and
    /// the error is returned for display. A stale recommendation is
    /// cleared either way. Returns the number of tasks captured.
    pub async fn capture(
        &mut self,
        extractor: &Extractor,
        text: &str,
    ) -> Result<usize, ExtractError> {
        self.recommendation = None;
        match extractor.extract(text).await {
            Ok(extraction) => {
                self.tasks = extraction.tasks;
                self.extracted_with = Some(extraction.model);
                self.extracted_at = Some(Utc::now());
                Ok(self.tasks.len())
            }
            Err(e) => {
                self.tasks.clear();
                self.extracted_with = None;
                self.extracted_at = None;
                Err(e)
            }
        }
    }

    /// Ask for a recommendation against the captured tasks and store it.
    ///
    /// A model failure is flattened into stored user-facing text, so from
    /// the caller's perspective this is total once tasks exist. An empty
    /// task list is returned as [`RecommendError::NoTasks`] so the caller
    /// can gate the action instead of prompting over nothing.
    pub async fn focus(
        &mut self,
        recommender: &Recommender,
        constraints: &Constraints,
    ) -> Result<&str, RecommendError> {
        if self.tasks.is_empty() {
            return Err(RecommendError::NoTasks);
        }

        let text = match recommender.recommend(&self.tasks, constraints).await {
            Ok(text) => text,
            Err(RecommendError::NoTasks) => return Err(RecommendError::NoTasks),
            Err(e) => format!("The recommendation service is unavailable right now. ({e})"),
        };

        self.recommendation = Some(text);
        Ok(self.recommendation.as_deref().unwrap_or_default())
    }

    /// Clear tasks and recommendation back to the initial state.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.recommendation = None;
        self.extracted_at = None;
        self.extracted_with = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::TextModel;
    use crate::task::{TaskEnergy, UserEnergy};
    use async_trait::async_trait;

    struct CannedModel {
        id: String,
        response: Result<String, ()>,
    }

    impl CannedModel {
        fn ok(id: &str, body: &str) -> Box<dyn TextModel> {
            Box::new(Self {
                id: id.to_string(),
                response: Ok(body.to_string()),
            })
        }

        fn failing(id: &str) -> Box<dyn TextModel> {
            Box::new(Self {
                id: id.to_string(),
                response: Err(()),
            })
        }
    }

    #[async_trait]
    impl TextModel for CannedModel {
        fn id(&self) -> &str {
            &self.id
        }

        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(()) => Err(ModelError::Api {
                    model: self.id.clone(),
                    status: 500,
                    body: "boom".to_string(),
                }),
            }
        }
    }

    const TASK_JSON: &str =
        r#"[{"task": "Finish slides", "time_min": 45, "energy": "High"}]"#;

    #[tokio::test]
    async fn test_capture_replaces_tasks_wholesale() {
        let mut session = Session::new();
        let extractor = Extractor::new(vec![CannedModel::ok("m", TASK_JSON)]);

        let count = session.capture(&extractor, "dump one").await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(session.tasks()[0].name, "Finish slides");
        assert_eq!(session.tasks()[0].energy, TaskEnergy::High);
        assert_eq!(session.extracted_with(), Some("m"));
        assert!(session.extracted_at().is_some());

        let replacement =
            Extractor::new(vec![CannedModel::ok("m", r#"[{"task": "Other", "time_min": 5, "energy": "low"}]"#)]);
        session.capture(&replacement, "dump two").await.unwrap();
        assert_eq!(session.tasks().len(), 1);
        assert_eq!(session.tasks()[0].name, "Other");
    }

    #[tokio::test]
    async fn test_failed_capture_empties_the_list() {
        let mut session = Session::new();
        let good = Extractor::new(vec![CannedModel::ok("m", TASK_JSON)]);
        session.capture(&good, "dump").await.unwrap();
        assert!(!session.tasks().is_empty());

        let bad = Extractor::new(vec![CannedModel::failing("m")]);
        assert!(session.capture(&bad, "dump").await.is_err());
        assert!(session.tasks().is_empty());
        assert!(session.extracted_with().is_none());
    }

    #[tokio::test]
    async fn test_focus_stores_recommendation() {
        let mut session = Session::new();
        let extractor = Extractor::new(vec![CannedModel::ok("m", TASK_JSON)]);
        session.capture(&extractor, "dump").await.unwrap();

        let recommender = Recommender::new(CannedModel::ok("r", "Do the slides."));
        let constraints = Constraints::new(60, UserEnergy::High);
        session.focus(&recommender, &constraints).await.unwrap();

        assert_eq!(session.recommendation(), Some("Do the slides."));
    }

    #[tokio::test]
    async fn test_focus_flattens_model_failure_into_text() {
        let mut session = Session::new();
        let extractor = Extractor::new(vec![CannedModel::ok("m", TASK_JSON)]);
        session.capture(&extractor, "dump").await.unwrap();

        let recommender = Recommender::new(CannedModel::failing("r"));
        let constraints = Constraints::new(30, UserEnergy::Neutral);
        let text = session.focus(&recommender, &constraints).await.unwrap();

        assert!(text.contains("unavailable"));
        assert!(text.contains("500"));
        assert!(session.recommendation().is_some());
    }

    #[tokio::test]
    async fn test_focus_without_tasks_is_gated() {
        let mut session = Session::new();
        let recommender = Recommender::new(CannedModel::ok("r", "never"));
        let constraints = Constraints::new(30, UserEnergy::Neutral);

        let err = session.focus(&recommender, &constraints).await.unwrap_err();
        assert!(matches!(err, RecommendError::NoTasks));
        assert!(session.recommendation().is_none());
    }

    #[tokio::test]
    async fn test_reset_restores_initial_state() {
        let mut session = Session::new();
        let extractor = Extractor::new(vec![CannedModel::ok("m", TASK_JSON)]);
        session.capture(&extractor, "dump").await.unwrap();
        let recommender = Recommender::new(CannedModel::ok("r", "Do it."));
        session
            .focus(&recommender, &Constraints::new(30, UserEnergy::Neutral))
            .await
            .unwrap();

        session.reset();

        assert!(session.tasks().is_empty());
        assert!(session.recommendation().is_none());
        assert!(session.extracted_at().is_none());
        assert!(session.extracted_with().is_none());
    }
}
