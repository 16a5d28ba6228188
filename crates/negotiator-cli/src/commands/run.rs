//! Full pipeline: capture a brain dump, then ask for a recommendation,
//! through one in-memory session.

use clap::Args;
use std::path::PathBuf;

use negotiator_core::{
    Config, Constraints, CoreError, Extractor, Recommender, Session, UserEnergy,
};

#[derive(Args)]
pub struct RunArgs {
    /// Brain-dump text (reads stdin when neither this nor --file is given)
    pub text: Option<String>,
    /// Read the brain dump from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Time budget in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(5..=120))]
    pub time: u32,
    /// Current energy level (resting/low/neutral/high/peak)
    #[arg(long)]
    pub energy: UserEnergy,
    /// Print the session result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_text_input(args.text, args.file)?;
    if text.trim().is_empty() {
        return Err("no input text: write down what's on your mind first".into());
    }

    let config = Config::load();
    let extractor = Extractor::from_config(&config)?;
    let recommender = Recommender::from_config(&config)?;
    let constraints = Constraints::new(args.time, args.energy);

    let mut session = Session::new();
    super::block_on(async {
        session.capture(&extractor, &text).await?;
        session.focus(&recommender, &constraints).await?;
        Ok::<(), CoreError>(())
    })??;

    if args.json {
        let result = serde_json::json!({
            "tasks": session.tasks(),
            "model": session.extracted_with(),
            "recommendation": session.recommendation(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "=== Tasks ({}) ===\n",
        session.extracted_with().unwrap_or("unknown")
    );
    super::print_tasks(session.tasks());
    println!("\n=== Recommendation ===\n");
    println!("{}", session.recommendation().unwrap_or_default());
    Ok(())
}
