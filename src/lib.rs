//! qrclip library crate
//!
//! This crate provides the core functionality for the `qrclip` CLI, which
//! turns a URL into a QR code printed in the terminal and, on request, saved
//! as an image. It is organized into small modules, one per stage of a run:
//! `input` (argument / clipboard / prompt resolution), `validate` (URL
//! acceptance), `clipboard` (clipboard capability), `encode` (QR encoding),
//! `render` (terminal output), `export` (image output) and `error`. The
//! binary `src/main.rs` calls `qrclip_lib::run()`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `execute()` — one full run against injected clipboard and I/O, used by
//!   `run()` and by the integration tests.

pub mod clipboard;
pub mod encode;
pub mod error;
pub mod export;
pub mod input;
pub mod render;
pub mod validate;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::clipboard::{ClipboardSource, SystemClipboard};
use crate::error::{QrError, Unavailable};

const RULE_WIDTH: usize = 50;

/// Command-line arguments. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a QR code from a URL", long_about = None)]
pub struct Cli {
    /// URL to generate a QR code for (used as given, without validation)
    pub url: Option<String>,

    /// Use the URL from the clipboard
    #[arg(short = 'c', long = "clipboard", action = ArgAction::SetTrue)]
    pub clipboard: bool,

    /// Prompt for the URL
    #[arg(short = 'i', long = "input", action = ArgAction::SetTrue)]
    pub input: bool,

    /// Also save the QR code as an image
    #[arg(short = 's', long = "save", action = ArgAction::SetTrue)]
    pub save: bool,

    /// Output filename for the saved image
    #[arg(short = 'o', long = "output", default_value = "qrcode.png")]
    pub output: PathBuf,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated { url: String, saved: Option<PathBuf> },
    /// Nothing to encode; the reason has been printed.
    NoUrl(Unavailable),
}

/// Run the qrclip CLI.
///
/// Parses the arguments, sets up logging and performs one run against the
/// real clipboard and terminal. Errors are printed to stderr and exit the
/// process with status 1; a missing URL is not an error.
///
/// Example:
///
/// ```no_run
/// qrclip_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let result = execute(
        &cli,
        &mut SystemClipboard,
        io::stdin().lock(),
        stdout.lock(),
        color,
    );
    if let Err(e) = &result {
        eprintln!("Error generating QR code: {}", e);
    }
    std::process::exit(exit_code(&result));
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Exit status for a finished run: 0 when a code was generated or there was
/// nothing to encode, 1 on failure.
pub fn exit_code(result: &Result<Outcome, QrError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Resolve, encode, render and optionally save, writing all user-facing
/// text to `out`.
///
/// `reader` feeds the interactive prompt. `color` enables ANSI colors in
/// the terminal rendering.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    clipboard: &mut dyn ClipboardSource,
    reader: R,
    mut out: W,
    color: bool,
) -> Result<Outcome, QrError> {
    let plan = input::plan(cli.url.as_deref(), cli.clipboard, cli.input);
    let url = match input::resolve(&plan, clipboard, reader, &mut out) {
        Ok(url) => url,
        Err(QrError::Unavailable(reason)) => {
            log::info!("no URL to encode: {:?}", reason);
            writeln!(out, "{}", reason)?;
            return Ok(Outcome::NoUrl(reason));
        }
        Err(e) => return Err(e),
    };

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\nGenerating QR code for: {}", url)?;
    writeln!(out, "{}", rule)?;

    let qr = encode::encode(&url)?;
    write!(out, "{}", render::to_terminal(&qr, color))?;
    writeln!(out, "{}", rule)?;

    let saved = if cli.save {
        export::save(&qr, &cli.output)?;
        writeln!(out, "QR code saved as: {}", cli.output.display())?;
        Some(cli.output.clone())
    } else {
        None
    };

    writeln!(out, "QR code generated successfully!")?;
    log::info!("generated version {} symbol for {}", qr.version(), url);
    Ok(Outcome::Generated { url, saved })
}
