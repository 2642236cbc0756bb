//! Interactive email address validator.
//!
//! Reads addresses line by line from standard input and prints a green or
//! red verdict for each, with the specific parse error when invalid.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::io::{self, BufRead};

use clap::Parser;
use crossterm::style::Stylize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Validate email addresses read from standard input, one per line.
#[derive(Debug, Parser)]
#[command(name = "emailaddr", version)]
struct Cli {
    /// Print only the verdict, without the specific parse error.
    #[arg(long)]
    quiet: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> io::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emailaddr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "starting interactive validator");

    println!("type an email address to validate, one per line (Ctrl-D to exit)");
    for line in io::stdin().lock().lines() {
        let input = line?;
        report(&cli, &input);
    }
    Ok(())
}

/// Prints the verdict for one input line.
fn report(cli: &Cli, input: &str) {
    match emailaddr::validate(input) {
        Ok(()) => {
            let verdict = format!("{input} is a valid email address");
            if cli.no_color {
                println!("{verdict}");
            } else {
                println!("{}", verdict.green());
            }
        }
        Err(err) => {
            if !cli.quiet {
                println!("{err}");
            }
            let verdict = format!("{input} is an invalid email address");
            if cli.no_color {
                println!("{verdict}");
            } else {
                println!("{}", verdict.red());
            }
        }
    }
}
