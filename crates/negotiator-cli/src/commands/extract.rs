//! Brain-dump extraction command.

use clap::Args;
use std::path::PathBuf;

use negotiator_core::{Config, Extractor};

#[derive(Args)]
pub struct ExtractArgs {
    /// Brain-dump text (reads stdin when neither this nor --file is given)
    pub text: Option<String>,
    /// Read the brain dump from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Print the extracted tasks as JSON (pipes into `negotiator recommend`)
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExtractArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_text_input(args.text, args.file)?;
    if text.trim().is_empty() {
        return Err("no input text: write down what's on your mind first".into());
    }

    let config = Config::load();
    let extractor = Extractor::from_config(&config)?;
    let extraction = super::block_on(extractor.extract(&text))??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&extraction.tasks)?);
        return Ok(());
    }

    if extraction.tasks.is_empty() {
        println!("No tasks found in the input.");
        return Ok(());
    }

    println!("=== Extracted Tasks ({}) ===\n", extraction.model);
    super::print_tasks(&extraction.tasks);
    Ok(())
}
