//! Core error types for negotiator-core.
//!
//! This module defines the error hierarchy using thiserror. The two public
//! operations (extraction and recommendation) report failure through these
//! types instead of panicking; callers decide how to present them.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for negotiator-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model call errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Extraction errors
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Recommendation errors
    #[error("Recommendation error: {0}")]
    Recommend(#[from] RecommendError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential lookup errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from a single text-generation call.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The request never produced an HTTP response
    #[error("request to '{model}' failed: {source}")]
    Transport {
        model: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("'{model}' returned HTTP {status}: {body}")]
    Api {
        model: String,
        status: u16,
        body: String,
    },

    /// The service answered 2xx but the body was not the expected shape
    #[error("could not decode response from '{model}': {message}")]
    Decode { model: String, message: String },

    /// The response carried no candidate text at all
    #[error("'{model}' returned no usable candidate text")]
    EmptyResponse { model: String },
}

/// Failure of one tier of the extraction cascade.
///
/// A parse failure feeds the fallback decision exactly like a transport
/// failure does; neither escapes [`crate::extract::Extractor::extract`].
#[derive(Error, Debug)]
pub enum TierError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Output (after fence stripping) was not valid JSON
    #[error("model output was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Output was valid JSON but not an array of records
    #[error("model output was not a JSON array")]
    NotAnArray,
}

/// One failed attempt in the extraction cascade, kept for the error report.
#[derive(Debug)]
pub struct Attempt {
    pub model: String,
    pub error: TierError,
}

fn summarize_attempts(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.model, a.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The cascade has no models to try
    #[error("no extraction models configured")]
    NoModels,

    /// Every tier of the cascade failed; attempts are listed in order
    #[error("all extraction models failed: {}", summarize_attempts(.0))]
    AllModelsFailed(Vec<Attempt>),
}

/// Recommendation errors.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// There is nothing to choose from; no prompt is sent in this case
    #[error("no tasks to recommend from")]
    NoTasks,

    /// Task list could not be serialized into the prompt
    #[error("failed to serialize tasks for the prompt: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not resolve the configuration directory
    #[error("Could not resolve configuration directory: {0}")]
    NoConfigDir(String),
}

/// Credential lookup errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// No key in the environment and none stored in the keyring
    #[error("no Gemini API key found: set {env_var} or run `negotiator auth login`")]
    Missing { env_var: &'static str },

    /// The OS keyring itself failed
    #[error("keyring error: {0}")]
    Keyring(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
