use clap::{Parser, Subcommand};
use fleet_dashboard::application::dto::OutputFormat;
use std::path::PathBuf;

/// Browse fleet sales, connectivity and live vehicle telemetry
#[derive(Parser, Debug)]
#[command(name = "fleet-dashboard")]
#[command(version)]
#[command(about = "Browse fleet sales, connectivity and live vehicle telemetry", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./fleet-dashboard.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the fleet API
    #[arg(long, global = true, env = "FLEET_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Where the login session is stored
    #[arg(long, global = true, env = "FLEET_SESSION_FILE", value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session
    Login {
        /// User name
        #[arg(short, long)]
        user: String,

        /// Password (read from stdin when omitted)
        #[arg(short, long, env = "FLEET_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Render the dashboard once
    Dashboard {
        /// Select a vehicle model (case-insensitive)
        #[arg(short, long)]
        model: Option<String>,

        /// Filter rows by vehicle code substring
        #[arg(short = 'q', long)]
        code: Option<String>,

        /// Output format: text, markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search models interactively; one query per stdin line
    Search {
        /// Output format: text, markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Format requested on the command line, if the subcommand takes one
    pub fn format(&self) -> Option<OutputFormat> {
        match &self.command {
            Command::Dashboard { format, .. } | Command::Search { format } => *format,
            _ => None,
        }
    }
}
