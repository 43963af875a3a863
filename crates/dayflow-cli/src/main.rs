use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayflow", version, about = "Dayflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Review metrics for a day or week
    Review {
        #[command(subcommand)]
        action: commands::review::ReviewAction,
    },
    /// Completion streak tracking
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Review { action } => commands::review::run(action),
        Commands::Streak { action } => commands::streak::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
