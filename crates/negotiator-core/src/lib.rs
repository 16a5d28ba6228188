//! # Negotiator Core Library
//!
//! Core logic for Negotiator, a brain-dump-to-focus assistant. It follows
//! a CLI-first philosophy: everything is available through this library
//! and the standalone CLI binary, and any GUI shell would be a thin layer
//! over the same two operations.
//!
//! ## Architecture
//!
//! - **Extractor**: turns free-form text into task records by asking an
//!   ordered cascade of text-generation models; the first model whose
//!   output parses wins
//! - **Recommender**: asks one fixed model to pick a single task given a
//!   time budget and an energy level
//! - **Session**: the only mutable state -- the current task list and the
//!   last recommendation, owned by the caller and passed by reference
//! - **Model layer**: [`TextModel`] trait with a Gemini REST
//!   implementation; credentials from the environment or the OS keyring
//!
//! Both operations are total from the caller's perspective: they return
//! typed errors or flattened user-facing text, and never panic.
//!
//! ## Key Components
//!
//! - [`Extractor`]: two-tier (configurable) extraction cascade
//! - [`Recommender`]: single-model task selection
//! - [`Session`]: per-user in-memory state
//! - [`Config`]: TOML configuration for models and generation settings

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod prompts;
pub mod recommend;
pub mod session;
pub mod task;

pub use config::{Config, GenerationSettings, ModelsConfig};
pub use error::{
    ConfigError, CoreError, CredentialError, ExtractError, ModelError, RecommendError, TierError,
};
pub use extract::{Extraction, Extractor};
pub use model::{GeminiModel, TextModel};
pub use recommend::{Constraints, Recommender, MAX_TIME_BUDGET_MIN, MIN_TIME_BUDGET_MIN};
pub use session::Session;
pub use task::{Task, TaskEnergy, UserEnergy};
