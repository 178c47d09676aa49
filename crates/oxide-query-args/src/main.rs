//! oxide-query-args CLI
//!
//! Parses convenience query arguments and prints the recognized options and
//! the remaining tokens.
//!
//! ```bash
//! oxide-query-args -- -as lists -columnsvariable cols "SELECT * FROM users"
//! oxide-query-args --output json -- -- -as "literal"
//! ```

use clap::{Parser, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_query_args::prelude::*;

/// How the parse result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `key = value` line per option, then the tail.
    Text,
    /// A JSON object with `options` and `tail`.
    Json,
}

/// Parse `[-as {lists|dicts}] [-columnsvariable name] [--] statement ?params?`.
#[derive(Parser)]
#[command(name = "oxide-query-args")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, env = "OXIDE_QUERY_ARGS_OUTPUT", default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Tokens to parse. Put them after `--` so options reach the parser.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!(count = cli.tokens.len(), "Parsing tokens");
    let parsed = ConvenienceArgParser::new().parse(cli.tokens.as_slice())?;

    match cli.output {
        OutputFormat::Text => {
            for (key, value) in parsed.options.iter() {
                println!("{key} = {value}");
            }
            println!("tail: {:?}", parsed.tail);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    Ok(())
}
