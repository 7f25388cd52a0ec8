mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::open::Document;
use commands::{AddArgs, EditArgs};
use nextstep::logging::{self, LogFormat};

#[derive(Parser)]
#[command(name = "nextstep")]
#[command(about = "Track job applications and their documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: $NEXTSTEP_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log format: compact or json
    #[arg(long, global = true, default_value = "compact")]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Where to write it (default: platform config dir)
        path: Option<PathBuf>,
    },

    /// List tracked jobs
    List {
        /// Hide rejected applications
        #[arg(long, conflicts_with = "show_rejected")]
        hide_rejected: bool,

        /// Show rejected applications even if the config hides them
        #[arg(long)]
        show_rejected: bool,

        /// Only jobs with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Match position, company or id
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Track a new job
    Add(AddArgs),

    /// Change fields of a job
    Edit(EditArgs),

    /// Copy a job, its id suffixed, with copies of its documents
    Duplicate {
        /// Row number as shown by `list`
        row: usize,
    },

    /// Set the application status of a job
    Status {
        /// Row number as shown by `list`
        row: usize,

        /// not-started, applied, interview, rejection or offer
        status: String,
    },

    /// Stop tracking a job
    Delete {
        /// Row number as shown by `list`
        row: usize,

        /// Also delete the job's document directory
        #[arg(long)]
        purge: bool,
    },

    /// Open a job's document or folder
    Open {
        /// Row number as shown by `list`
        row: usize,

        #[arg(value_enum)]
        document: Document,
    },

    /// Open the candidate home link of a job
    Link {
        /// Row number as shown by `list`
        row: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_format, cli.verbose)?;

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init { path } => commands::init::execute(path, cli.json),
        Commands::List {
            hide_rejected,
            show_rejected,
            status,
            search,
        } => commands::list::execute(
            config,
            hide_rejected,
            show_rejected,
            status,
            search,
            cli.json,
        ),
        Commands::Add(args) => commands::add::execute(config, args, cli.json),
        Commands::Edit(args) => commands::edit::execute(config, args, cli.json),
        Commands::Duplicate { row } => commands::duplicate::execute(config, row, cli.json),
        Commands::Status { row, status } => commands::status::execute(config, row, &status, cli.json),
        Commands::Delete { row, purge } => commands::delete::execute(config, row, purge, cli.json),
        Commands::Open { row, document } => commands::open::execute(config, row, document),
        Commands::Link { row } => commands::open::execute_link(config, row),
    }
}
