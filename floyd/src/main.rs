//! # floyd
//!
//! Prints Floyd's triangle to the console.
//!
//! ## Usage
//!
//! ```bash
//! # The default 15-row triangle
//! floyd
//!
//! # Any number of rows
//! floyd --size 4
//!
//! # Every row with its values, as JSON
//! floyd --size 4 --output json
//! ```
//!
//! Each row is written as soon as it is built. Sizes of zero or below print
//! nothing.

use std::io;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Arg, ArgMatches, Command};
use console::Term;
use floydlib::{write_lines, FloydError, OutputFormat, Triangle, TriangleTable, DEFAULT_SIZE};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("floyd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print Floyd's triangle with right-justified columns")
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .help(format!(
                    "Number of rows; zero or below prints nothing [default: {}]",
                    DEFAULT_SIZE
                )),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Extract the output format from matches
fn extract_format(matches: &ArgMatches) -> Result<OutputFormat, anyhow::Error> {
    let name = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("text");
    OutputFormat::from_str(name).map_err(anyhow::Error::msg)
}

/// Treat a reader closing stdout early (`floyd | head`) as a normal stop
fn stop_on_closed_stdout(result: floydlib::Result<()>) -> floydlib::Result<()> {
    match result {
        Err(FloydError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let size = matches
        .get_one::<i64>("size")
        .copied()
        .unwrap_or(DEFAULT_SIZE);
    let triangle = Triangle::new(size)?;
    let format = extract_format(matches)?;
    let mut term = Term::stdout();

    let written = if format.is_structured() {
        let json = TriangleTable::from_triangle(&triangle).to_json()?;
        term.write_line(&json).map_err(FloydError::from)
    } else {
        write_lines(triangle.rows(), &mut term).map(|_| ())
    };
    stop_on_closed_stdout(written)?;

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
