//! Encode a command for a ThingM blink(1) and write the report to STDOUT,
//! ready for redirecting to the device's hidraw node.

use std::io::Write;
use anyhow::Context;
use tracing::debug;
use blink1::{Command, Report, NAMED_COLORS};

mod cli;

#[allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
fn main() -> anyhow::Result<()> {
    blink1_tools::init_tracing(
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("blink=warn".parse()?)
            .add_directive("blink1=warn".parse()?)
    );

    let cli_args = match cli::command().try_get_matches() {
        Ok(cli_args) => cli_args,
        Err(error) => {
            // Help and version go to STDOUT and are a success, anything else is a failure.
            error.print()?;
            std::process::exit(i32::from(error.use_stderr()));
        }
    };

    run(&cli_args, &mut std::io::stdout().lock())
}

fn run(cli_args: &clap::ArgMatches, output: &mut impl Write) -> anyhow::Result<()> {
    if cli_args.get_flag("colors") {
        for (name, _) in NAMED_COLORS {
            writeln!(output, "{name}")?;
        }
        return Ok(());
    }

    let letter = cli_args.get_one::<String>("command")
        .and_then(|command| command_letter(command))
        .context("Put colors! Try 'blink -h' for more information.")?;
    let command = Command::try_from(letter)
        .map_err(|error| anyhow::anyhow!("{error}. Try 'blink -h' for help."))?;
    debug!("command '{command}'");

    let fields: Vec<&str> = cli_args.get_many::<String>("fields")
        .unwrap_or_default()
        .map(String::as_str)
        .collect();

    let report = Report::encode(command, &fields)
        .with_context(|| format!("{}\n{}", command.description(), command.usage()))?;

    blink1_tools::output::write_report(output, &report).context("Writing report")
}

/// The command must be exactly one character.
fn command_letter(command: &str) -> Option<char> {
    let mut chars = command.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None
    }
}
