use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "labquest-cli", version, about = "Labquest progression CLI")]
struct Cli {
    /// Override the JSON store directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Level and streak queries
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Badge catalog and evaluation
    Badges {
        #[command(subcommand)]
        action: commands::badges::BadgesAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Progress { action } => commands::progress::run(action, cli.data_dir.as_deref()),
        Commands::Badges { action } => commands::badges::run(action, cli.data_dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
