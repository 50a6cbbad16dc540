//! cronex - expand a cron expression into a table of matched values.
//!
//! Takes a single argument, the cron expression with its command, and prints
//! one row per field listing every value the field matches. Exits 0 on
//! success; any validation or parse failure prints its message to stderr and
//! exits 1.

use std::process::ExitCode;

use clap::Parser;

mod validate;

/// Expand a cron expression into a table of matched values
#[derive(Parser)]
#[command(name = "cronex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cron expression followed by its command, as one quoted argument
    /// (e.g. "*/15 0 1,15 * 1-5 /usr/bin/find")
    expression: String,
}

fn main() -> ExitCode {
    // try_parse keeps the exit-status contract: usage errors are failures
    // like any other, while --help and --version stay on stdout with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(&cli.expression) {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(expression: &str) -> anyhow::Result<String> {
    let cron_text = validate::validate_expression(expression)?;
    let cron = cronex::parse(cron_text)?;
    Ok(cronex::render(&cron))
}
