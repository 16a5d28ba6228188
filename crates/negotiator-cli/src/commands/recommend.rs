//! Recommendation command against an existing task list.

use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use negotiator_core::{Config, Constraints, RecommendError, Recommender, Task, UserEnergy};

#[derive(Args)]
pub struct RecommendArgs {
    /// Time budget in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(5..=120))]
    pub time: u32,
    /// Current energy level (resting/low/neutral/high/peak)
    #[arg(long)]
    pub energy: UserEnergy,
    /// Read the task list JSON from a file (stdin when omitted)
    #[arg(long)]
    pub tasks_file: Option<PathBuf>,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match args.tasks_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let tasks: Vec<Task> = serde_json::from_str(&raw)?;
    if tasks.is_empty() {
        return Err("no tasks to recommend from: run `negotiator extract` first".into());
    }

    let config = Config::load();
    let recommender = Recommender::from_config(&config)?;
    let constraints = Constraints::new(args.time, args.energy);

    match super::block_on(recommender.recommend(&tasks, &constraints))? {
        Ok(text) => {
            println!("=== Recommendation ===\n");
            println!("{text}");
        }
        Err(e @ RecommendError::NoTasks) => return Err(e.into()),
        Err(e) => {
            // Failure stands in for the recommendation, it is not a crash.
            println!("The recommendation service is unavailable right now. ({e})");
        }
    }
    Ok(())
}
