use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "negotiator",
    version,
    about = "Turn a brain dump into a task list, then pick the one thing to do"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured tasks from free-form text
    Extract(commands::extract::ExtractArgs),
    /// Recommend one task given a time budget and an energy level
    Recommend(commands::recommend::RecommendArgs),
    /// Capture a brain dump and get a recommendation in one go
    Run(commands::run::RunArgs),
    /// API key management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "negotiator",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
