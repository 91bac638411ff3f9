//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod ask;
pub mod settings;
pub mod topics;
pub mod validate;


use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::ask::{run_ask, run_quick, AskFormat};
use crate::cli::settings::{apply_set, apply_unset};
use crate::cli::topics::run_topics;
use crate::cli::validate::run_validate;
use crate::core::config::data::Config;
use crate::core::quick_action::QuickAction;
use crate::logging::{init_tracing, TraceTarget};
use crate::ui::chat_loop::run_chat;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "psico-assist")]
#[command(version = VERSION)]
#[command(about = "Terminal help assistant for the Psico Assist patient-management app")]
#[command(
    long_about = "Psico Assist is a full-screen terminal help desk for psychologists using the \
Psico Assist patient-management app. The assistant answers common questions about registering, \
editing, removing and searching patients, and about session scheduling.\n\n\
Controls:\n\
  ? or F1           Open the help dialog\n\
  Esc               Close the dialog (or dismiss the latest notification)\n\
  Enter             Send the message\n\
  Alt+1..4          Quick questions\n\
  Ctrl+Y            Copy the last answer to the clipboard\n\
  Ctrl+L            Pause/resume the transcript log\n\
  q / Ctrl+C        Quit\n\n\
Diagnostics:\n\
  RUST_LOG          Log filter for --trace-file and non-interactive commands (default: warn)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Append every chat message to this file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub trace_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive help screen (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the HTML form of the answer when it has one
        #[arg(long, conflicts_with = "json")]
        html: bool,
        /// Print the exchange as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a quick question by tag (cadastrar, editar, agenda, duvidas)
    Quick {
        tag: QuickAction,
        /// Print the exchange as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the topics the assistant knows about
    Topics {
        /// Only show topics whose name or keywords contain this text
        filter: Option<String>,
    },
    /// Check a treatment-plan form file and report invalid fields
    Validate {
        /// TOML file with `[[field]]` entries
        form: PathBuf,
        /// Date used as "today" for past-date checks (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        today: Option<chrono::NaiveDate>,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set (theme, rich-responses, toast-ttl)
        key: String,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Show the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    let trace_target = match (&args.trace_file, &command) {
        (Some(path), _) => TraceTarget::File(path.clone()),
        (None, Commands::Chat) => TraceTarget::Off,
        (None, _) => TraceTarget::Stderr,
    };
    init_tracing(trace_target)?;
    debug!(?command, "parsed command line");

    match command {
        Commands::Chat => {
            let config = Config::load()?;
            run_chat(config, args.log).await
        }
        Commands::Ask { text, html, json } => {
            let config = Config::load()?;
            let format = AskFormat::from_flags(html, json);
            run_ask(&text.join(" "), format, &config)
        }
        Commands::Quick { tag, json } => {
            let config = Config::load()?;
            let format = AskFormat::from_flags(false, json);
            run_quick(tag, format, &config)
        }
        Commands::Topics { filter } => {
            run_topics(filter.as_deref());
            Ok(())
        }
        Commands::Validate { form, today } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            if !run_validate(&form, today)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let Some(value) = value else {
                config.print_all();
                return Ok(());
            };
            match apply_set(&mut config, &key, &value) {
                Ok(message) => {
                    config.save()?;
                    println!("✅ {message}");
                    Ok(())
                }
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            match apply_unset(&mut config, &key) {
                Ok(message) => {
                    config.save()?;
                    println!("✅ {message}");
                    Ok(())
                }
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
        }
        Commands::Config => {
            let config = Config::load()?;
            config.print_all();
            if let Ok(path) = Config::get_config_path() {
                println!();
                println!(
                    "Config file: {}",
                    crate::core::config::data::path_display(path)
                );
            }
            Ok(())
        }
    }
}
