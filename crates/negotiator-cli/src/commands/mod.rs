pub mod auth;
pub mod config;
pub mod extract;
pub mod recommend;
pub mod run;

use std::future::Future;
use std::io::Read;
use std::path::PathBuf;

/// Drive a core future to completion on a fresh runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(future))
}

/// Resolve input text: positional argument, then --file, then stdin.
pub(crate) fn read_text_input(
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Print a task list the same way everywhere.
pub(crate) fn print_tasks(tasks: &[negotiator_core::Task]) {
    for (i, task) in tasks.iter().enumerate() {
        println!(
            "{}. {} ({} min, {} energy)",
            i + 1,
            task.name,
            task.duration_min,
            task.energy
        );
    }
}
