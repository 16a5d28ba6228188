//! Text-generation model layer.
//!
//! [`TextModel`] is the seam between the extraction/recommendation logic
//! and whatever serves completions; [`GeminiModel`] is the one production
//! implementation. Credentials come from the environment first, then the
//! OS keyring.

pub mod gemini;
pub mod traits;

pub use gemini::GeminiModel;
pub use traits::TextModel;

use crate::error::CredentialError;

/// Environment variable checked first for the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Keyring entry used when the environment variable is absent.
pub const API_KEY_ENTRY: &str = "gemini_api_key";

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    const SERVICE: &str = "negotiator";

    pub fn get(key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Resolve the Gemini API key: `GEMINI_API_KEY` wins, keyring is the
/// fallback.
pub fn api_key() -> Result<String, CredentialError> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }

    match keyring_store::get(API_KEY_ENTRY) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => Err(CredentialError::Missing {
            env_var: API_KEY_ENV,
        }),
        Err(e) => Err(CredentialError::Keyring(e.to_string())),
    }
}
