//! API key management for the Gemini backend.

use clap::Subcommand;

use negotiator_core::model::{self, keyring_store};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Gemini API key in the OS keyring
    Login {
        /// The API key
        #[arg(long)]
        key: String,
    },
    /// Remove the stored API key
    Logout,
    /// Check whether an API key is available
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { key } => {
            if key.trim().is_empty() {
                return Err("refusing to store an empty API key".into());
            }
            keyring_store::set(model::API_KEY_ENTRY, key.trim())?;
            println!("API key stored");
        }
        AuthAction::Logout => {
            keyring_store::delete(model::API_KEY_ENTRY)?;
            println!("API key removed");
        }
        AuthAction::Status => match model::api_key() {
            Ok(_) => println!("authenticated (API key available)"),
            Err(e) => println!("not authenticated: {e}"),
        },
    }
    Ok(())
}
