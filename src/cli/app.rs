//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, AppContext};
use chatshield::config::Config;
use chatshield::output::OutputMode;

/// chatshield - WhatsApp and SMS phishing awareness, in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "chatshield",
    version,
    about = "Interactive presentation on WhatsApp and SMS phishing risks",
    long_about = "Walk through a security-awareness presentation on WhatsApp and SMS fraud.\n\n\
                  Sections can be presented interactively, printed, or served to a browser.\n\
                  The quiz, checklist, bingo, PIN simulator and link analyzer can also be \
                  played on their own."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip every feedback and reveal delay
    #[arg(long, global = true)]
    pub instant: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Present the deck interactively
    Present,

    /// List the sections
    Sections,

    /// Print one section
    Show {
        /// Section id (e.g. "quiz") or number (1-based)
        section: String,
    },

    /// Check a link for common phishing red flags
    CheckUrl {
        /// Link as received (scheme optional)
        url: String,
    },

    /// Play the true/false quiz
    Quiz,

    /// Play "safe or phishing?" with sample messages
    Classify,

    /// Go through the good-practices checklist
    Checklist,

    /// Play red-flag bingo
    Bingo,

    /// Run the PIN-sharing simulator
    Pin,

    /// Write the printable page to a file
    Export {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the printable page and open it for printing
    Print,

    /// Serve the printable page over HTTP
    #[cfg(feature = "ui")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Open the page in the default browser
        #[arg(long)]
        open: bool,
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

    let mut config = cli.config.as_deref().map_or_else(Config::load, Config::load_from);
    if cli.instant {
        config = config.instant();
    }
    if !config.display.color || output_mode == OutputMode::Json {
        colored::control::set_override(false);
    }
    let ctx = AppContext::new(config, output_mode, cli.instant);

    match cli.command {
        Some(Command::Present) => commands::present(&ctx),
        Some(Command::Sections) => {
            commands::sections(&ctx);
            Ok(())
        },
        Some(Command::Show { section }) => commands::show(&ctx, &section),
        Some(Command::CheckUrl { url }) => commands::check_url(&ctx, &url),
        Some(Command::Quiz) => commands::quiz(&ctx),
        Some(Command::Classify) => commands::classify(&ctx),
        Some(Command::Checklist) => commands::checklist(&ctx),
        Some(Command::Bingo) => commands::bingo(&ctx),
        Some(Command::Pin) => commands::pin(&ctx),
        Some(Command::Export { output }) => commands::export(&ctx, output),
        Some(Command::Print) => commands::print(&ctx),
        #[cfg(feature = "ui")]
        Some(Command::Serve { port, open }) => commands::serve(port, open),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": chatshield::VERSION
                    })
                );
            } else {
                println!("chatshield v{}", chatshield::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": chatshield::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("chatshield v{}", chatshield::VERSION);
                println!("\nRun 'chatshield --help' for usage");
                println!("Run 'chatshield present' to start the presentation");
            }
            Ok(())
        },
    }
}
