//! Student portal: entry point.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use student_portal_server::cli::{clear_cmd, scrape_cmd, serve, show_cmd};

#[derive(Parser)]
#[command(
    name = "student-portal",
    about = "Log in to the college ERP portal once and get the whole dashboard as JSON",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API (default).
    Serve {
        /// Listen address (host:port). Also reads STUDENT_PORTAL_ADDR.
        #[arg(long)]
        addr: Option<String>,

        /// Portal base URL. Also reads STUDENT_PORTAL_BASE_URL.
        #[arg(long)]
        portal: Option<String>,
    },

    /// Log in, scrape every report and save a local snapshot.
    Scrape {
        /// Register number.
        #[arg(long)]
        uid: String,

        /// Portal password.
        #[arg(long, env = "STUDENT_PORTAL_PASSWORD", hide_env_values = true)]
        password: String,

        /// Portal base URL. Also reads STUDENT_PORTAL_BASE_URL.
        #[arg(long)]
        portal: Option<String>,

        /// Snapshot file. Also reads STUDENT_PORTAL_SNAPSHOT.
        #[arg(long)]
        snapshot: Option<String>,

        /// Write the dashboard JSON here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Summarise the saved snapshot.
    Show {
        /// Snapshot file. Also reads STUDENT_PORTAL_SNAPSHOT.
        #[arg(long)]
        snapshot: Option<String>,

        /// Semester to report on (defaults to the profile's current one).
        #[arg(long)]
        sem: Option<String>,
    },

    /// Delete the saved snapshot.
    Clear {
        /// Snapshot file. Also reads STUDENT_PORTAL_SNAPSHOT.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   student-portal completions bash > ~/.local/share/bash-completion/completions/student-portal
    ///   student-portal completions zsh > ~/.zfunc/_student-portal
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve {
        addr: None,
        portal: None,
    }) {
        Commands::Serve { addr, portal } => serve::run(addr.as_deref(), portal.as_deref()).await,

        Commands::Scrape {
            uid,
            password,
            portal,
            snapshot,
            out,
        } => {
            scrape_cmd::run(
                &uid,
                &password,
                portal.as_deref(),
                snapshot.as_deref(),
                out.as_deref(),
            )
            .await
        }

        Commands::Show { snapshot, sem } => {
            show_cmd::run(snapshot.as_deref(), sem.as_deref(), cli.json)
        }

        Commands::Clear { snapshot } => clear_cmd::run(snapshot.as_deref()),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "student-portal", &mut std::io::stdout());
            Ok(())
        }
    }
}
