// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument parsing, tracing setup and command execution.

use std::io::{self, IsTerminal, Write};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lockstep_core::{constants, FixedDecimal, FixedMath, Probe, TracingProbe};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::eval::{evaluate, Function, Value};

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "lockstep", author, version, about = "Deterministic fixed-point decimal math")]
pub struct Cli {
    /// Log every iterative evaluation (function, input, output, iterations) to stderr
    #[arg(long, global = true)]
    pub trace: bool,
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a function on decimal arguments
    Eval {
        /// Function name
        #[arg(value_enum)]
        function: Function,
        /// Arguments: decimals, scientific notation, or 0x/0o/0b integers
        #[arg(allow_hyphen_values = true)]
        args: Vec<FixedDecimal>,
    },
    /// List the named constants
    Constants,
    /// Show how a literal is stored
    Parse {
        /// Literal to parse
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text, one value per line.
    Text,
    /// One JSON document per invocation.
    Json,
}

#[derive(Serialize)]
struct EvalReport<'a> {
    function: &'static str,
    args: &'a [FixedDecimal],
    result: &'a Value,
}

#[derive(Serialize)]
struct ConstantEntry<'a> {
    name: &'static str,
    value: &'a FixedDecimal,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    input: &'a str,
    value: &'a FixedDecimal,
    scaled: String,
}

/// Parses `std::env::args`, installs the subscriber and runs the command
/// against stdout.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.trace {
        run(&cli, &FixedMath::with_probe(TracingProbe), &mut out)
    } else {
        run(&cli, &FixedMath::new(), &mut out)
    }
}

/// Installs a `fmt` subscriber on stderr. `--trace` forces `debug` for the
/// lockstep targets; otherwise `RUST_LOG` applies, defaulting to `warn`.
/// Colour is only emitted when stderr is a terminal.
fn init_tracing(trace: bool) -> Result<()> {
    let filter = if trace {
        EnvFilter::new("lockstep=debug,lockstep_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Executes `cli.command`, writing results to `out`.
pub fn run<P: Probe, W: Write>(cli: &Cli, math: &FixedMath<P>, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Eval { function, args } => {
            debug!(function = function.name(), args = args.len(), "eval");
            let value = evaluate(math, *function, args)
                .with_context(|| format!("evaluating {function}"))?;
            match cli.format {
                Format::Text => writeln!(out, "{value}")?,
                Format::Json => {
                    let report = EvalReport {
                        function: function.name(),
                        args,
                        result: &value,
                    };
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
        }
        Command::Constants => {
            let table = constants().table();
            match cli.format {
                Format::Text => {
                    for (name, value) in table {
                        writeln!(out, "{name:<8}{value}")?;
                    }
                }
                Format::Json => {
                    let entries: Vec<_> = table
                        .into_iter()
                        .map(|(name, value)| ConstantEntry { name, value })
                        .collect();
                    serde_json::to_writer(&mut *out, &entries)?;
                    writeln!(out)?;
                }
            }
        }
        Command::Parse { text } => {
            let value = FixedDecimal::parse(text).with_context(|| format!("parsing {text:?}"))?;
            match cli.format {
                Format::Text => {
                    writeln!(out, "value   {value}")?;
                    writeln!(out, "scaled  {}", value.scaled())?;
                }
                Format::Json => {
                    let report = ParseReport {
                        input: text,
                        value: &value,
                        scaled: value.scaled().to_string(),
                    };
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(argv: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("lockstep").chain(argv.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &FixedMath::new(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn negative_arguments_are_values_not_flags() {
        assert_eq!(capture(&["eval", "sin", "-1.2"]).ok().as_deref(), Some("-0.9320\n"));
        assert_eq!(capture(&["eval", "max", "-1.2", "-3"]).ok().as_deref(), Some("-1.2000\n"));
    }

    #[test]
    fn json_eval_report() {
        let out = capture(&["--format", "json", "eval", "ln", "1.2"]).ok();
        assert_eq!(
            out.as_deref(),
            Some("{\"function\":\"ln\",\"args\":[\"1.2000\"],\"result\":\"0.1822\"}\n")
        );
    }

    #[test]
    fn json_sign_is_a_number() {
        let out = capture(&["--format", "json", "eval", "sign", "0"]).ok();
        assert_eq!(
            out.as_deref(),
            Some("{\"function\":\"sign\",\"args\":[\"0.0000\"],\"result\":1}\n")
        );
    }

    #[test]
    fn constants_table_lists_every_name() {
        let out = capture(&["constants"]).unwrap_or_default();
        assert_eq!(out.lines().count(), 14);
        assert!(out.lines().any(|l| l == "PI      3.1415"));
    }

    #[test]
    fn parse_shows_the_scaled_integer() {
        let out = capture(&["parse", "0x1F"]).unwrap_or_default();
        assert_eq!(out, "value   31.0000\nscaled  310000\n");
    }

    #[test]
    fn malformed_argument_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["lockstep", "eval", "sin", "abc"]).is_err());
        assert!(Cli::try_parse_from(["lockstep", "eval", "nope", "1"]).is_err());
    }

    #[test]
    fn evaluation_error_carries_context() {
        let err = capture(&["eval", "div", "1", "0"]).err().map(|e| format!("{e:#}"));
        assert_eq!(err.as_deref(), Some("evaluating div: division by zero"));
    }
}
