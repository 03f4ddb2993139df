//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use stepconf::config::Config;
use stepconf::output::OutputMode;

/// stepconf - User task step to engine XML converter
#[derive(Parser, Debug)]
#[command(
    name = "stepconf",
    version,
    about = "Convert process-editor user tasks into engine XML",
    long_about = "Convert a user task exported by the process editor into XML.\n\n\
                  The engine task fragment carries the assignment and outgoing transitions.\n\
                  The widget configuration describes the task's form for the UI store."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./stepconf.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a user task into task XML and widget configuration XML
    Convert {
        /// Task JSON file ("-" for stdin)
        input: String,

        /// JSON array of pre-rendered outgoing transitions
        #[arg(short, long)]
        transitions: Option<PathBuf>,

        /// Write the engine task fragment to this file
        #[arg(long)]
        task_out: Option<PathBuf>,

        /// Write the widget configuration to this file
        #[arg(long)]
        widgets_out: Option<PathBuf>,
    },

    /// Check that a user task converts cleanly without rendering it
    Validate {
        /// Task JSON file ("-" for stdin)
        input: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Convert {
            input,
            transitions,
            task_out,
            widgets_out,
        }) => {
            let config = Config::load(cli.config.as_deref())?;
            let args = commands::ConvertArgs {
                input,
                transitions,
                task_out,
                widgets_out,
            };
            commands::convert(&args, &config, output_mode)
        },
        Some(Command::Validate { input }) => commands::validate(&input, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("stepconf v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("stepconf v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'stepconf --help' for usage");
                println!("Run 'stepconf convert <task.json>' to convert a task");
            }
            Ok(())
        },
    }
}
