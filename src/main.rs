use balvatika::cli::{resolve::ResolveArgs, submit::SubmitArgs};
use balvatika::models::{Decision, RequestStatus};
use balvatika::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::env;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "balvatika")]
#[command(author = "Balvatika Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Coaching Center Request Desk", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding the request slot (overrides config and BALVATIKA_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboards (default)
    App,

    /// Write balvatika/config.toml in the current directory
    Init {
        /// Seed the slot with demo requests
        #[arg(long)]
        demo: bool,

        /// Rewrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Submit a student request as a manager
    Submit(SubmitArgs),

    /// Approve a request as an admin
    Approve(ResolveArgs),

    /// Reject a request as an admin
    Reject(ResolveArgs),

    /// List requests
    List {
        /// Only requests submitted by this manager
        #[arg(long)]
        submitted_by: Option<String>,

        /// Only requests with this status (pending, approved, rejected)
        #[arg(short, long)]
        status: Option<RequestStatus>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Show dashboard figures
    Stats {
        /// Manager figures for this submitter instead of the admin overview
        #[arg(long)]
        submitted_by: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    balvatika::cli::logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = env::current_dir()?;
    let data_dir = cli.data_dir.as_deref();

    match cli.command.unwrap_or(Commands::App) {
        Commands::App => {
            balvatika::cli::app::run(&project_root, data_dir)?;
        }

        Commands::Init { demo, force } => {
            println!("{}", "🚀 Initializing Balvatika...".cyan());
            balvatika::cli::init::run(&project_root, data_dir, demo, force)?;
        }

        Commands::Submit(args) => {
            balvatika::cli::submit::run(&project_root, data_dir, args)?;
        }

        Commands::Approve(args) => {
            balvatika::cli::resolve::run(&project_root, data_dir, args, Decision::Approved)?;
        }

        Commands::Reject(args) => {
            balvatika::cli::resolve::run(&project_root, data_dir, args, Decision::Rejected)?;
        }

        Commands::List {
            submitted_by,
            status,
            json,
        } => {
            balvatika::cli::list::run(&project_root, data_dir, submitted_by.as_deref(), status, json)?;
        }

        Commands::Stats { submitted_by, json } => {
            balvatika::cli::stats::run(&project_root, data_dir, submitted_by.as_deref(), json)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "balvatika", &mut io::stdout());
        }
    }

    Ok(())
}
