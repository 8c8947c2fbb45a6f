//! pocket-calc CLI
//!
//! Four-function calculator: an interactive terminal keypad, or a
//! headless replay of button presses.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use pocket_calc::calculator::Calculator;
use pocket_calc::display::render_display;
use pocket_calc::error::Result;
use pocket_calc::logging::{self, default_log_file, LogTarget};
use pocket_calc::tui;
use pocket_calc::types::{Button, OutputFormat};

#[derive(Parser)]
#[command(name = "pocket-calc")]
#[command(about = "Four-function calculator with a clickable terminal keypad")]
#[command(version)]
struct Cli {
    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive keypad (default)
    Tui,

    /// Press buttons by label and print the display
    Press {
        /// Button labels: 0-9 . + - * ÷ (or / ×) DEL = AC
        #[arg(required = true, allow_hyphen_values = true)]
        buttons: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Print the display after every press, not just the last
        #[arg(long)]
        trace: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => cmd_tui(cli.log_file, cli.verbose),
        Commands::Press { buttons, format, trace } => {
            cmd_press(&buttons, format.into(), trace, cli.log_file, cli.verbose)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(log_file: Option<PathBuf>, verbose: u8) -> Result<()> {
    // The keypad owns the terminal, so logs must go to a file.
    let log_file = match log_file {
        Some(path) => Some(path),
        None => default_log_file().ok(),
    };
    if let Some(path) = log_file {
        logging::init(&LogTarget::File(path), verbose)?;
    }

    tui::run()?;
    Ok(())
}

fn cmd_press(
    labels: &[String],
    format: OutputFormat,
    trace: bool,
    log_file: Option<PathBuf>,
    verbose: u8,
) -> Result<()> {
    let target = log_file.map_or(LogTarget::Stderr, LogTarget::File);
    logging::init(&target, verbose)?;

    // Validate every label before pressing anything.
    let buttons = labels
        .iter()
        .map(|label| label.parse::<Button>())
        .collect::<Result<Vec<_>>>()?;

    let mut calculator = Calculator::new();

    for button in &buttons {
        calculator.press(*button);
        debug!(%button, "pressed");

        if trace {
            if format == OutputFormat::Human {
                println!("> {}", button);
            }
            print!("{}", render_display(&calculator, format)?);
        }
    }

    if !trace {
        print!("{}", render_display(&calculator, format)?);
    }

    Ok(())
}
