#![deny(unsafe_code)]

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{BufRead, Write};

use clap::ArgAction::SetTrue;
use clap::{Parser, Subcommand};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use base::prelude::*;

mod prompt;

use prompt::parse_nibble;

const ABOUT: &str = "Four-bit arithmetic built from magnitude comparators";

/// Four-bit arithmetic built from magnitude comparators.  With no
/// command, prompts for two values and adds them.
#[derive(Parser, Debug)]
#[clap(version, about = ABOUT, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Add two values, printing the four-bit sum and the carry.
    /// Values not given on the command line are prompted for.
    Add {
        #[clap(value_parser = parse_nibble)]
        a: Option<Nibble>,
        #[clap(value_parser = parse_nibble)]
        b: Option<Nibble>,
        /// Print the result as a single five-bit number
        #[clap(action = SetTrue, long)]
        five_bit: bool,
        /// Print the carry and sum as a JSON object
        #[clap(action = SetTrue, long, conflicts_with = "five_bit")]
        json: bool,
    },
    /// Print the greatest of the given values
    Maximum {
        #[clap(value_parser = parse_nibble, required = true)]
        values: Vec<Nibble>,
    },
    /// Print the lesser of two values
    Minimum {
        #[clap(value_parser = parse_nibble)]
        a: Nibble,
        #[clap(value_parser = parse_nibble)]
        b: Nibble,
    },
    /// Print the absolute difference between two values
    Difference {
        #[clap(value_parser = parse_nibble)]
        a: Nibble,
        #[clap(value_parser = parse_nibble)]
        b: Nibble,
    },
    /// Add one to a value (15 stays at 15 unless --wrap is given)
    Increment {
        #[clap(value_parser = parse_nibble)]
        a: Nibble,
        /// Wrap around from 15 to 0
        #[clap(action = SetTrue, long)]
        wrap: bool,
    },
    /// Subtraction comparator: REAR minus the larger side input
    Subtract {
        #[clap(value_parser = parse_nibble)]
        rear: Nibble,
        #[clap(value_parser = parse_nibble)]
        side_a: Nibble,
        #[clap(value_parser = parse_nibble)]
        side_b: Nibble,
    },
    /// Comparison comparator: is REAR at least the smaller side input?
    Compare {
        #[clap(value_parser = parse_nibble)]
        rear: Nibble,
        #[clap(value_parser = parse_nibble)]
        side_a: Nibble,
        #[clap(value_parser = parse_nibble)]
        side_b: Nibble,
    },
    /// Print the complete addition table (five-bit totals)
    Table,
}

#[derive(Debug)]
enum Fail {
    /// A value was not a number in the range 0..=15.
    BadValue(String),
    ReadFailed(String),
    WriteFailed(String),
    /// We were not able to set up logging.
    InitialisationFailure(String),
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::BadValue(msg) => f.write_str(msg.as_str()),
            Fail::ReadFailed(msg) => write!(f, "failed to read input: {msg}"),
            Fail::WriteFailed(msg) => write!(f, "failed to write output: {msg}"),
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
        }
    }
}

impl Error for Fail {}

fn describe_sum(sum: &Sum) -> String {
    format!(
        "Result: {} with a carry of {}.",
        sum.value(),
        u8::from(sum.has_carry())
    )
}

fn all_nibbles() -> impl Iterator<Item = Nibble> {
    (0_u8..=15).filter_map(|n| Nibble::try_from(n).ok())
}

/// The addition table, one row for each value of the first operand.
/// Each cell is the five-bit total.
fn render_table() -> String {
    let header: String = all_nibbles().map(|b| format!("{b:>3}")).collect();
    let mut lines: Vec<String> = vec![
        format!("  +|{header}"),
        format!("---+{}", "-".repeat(header.len())),
    ];
    for a in all_nibbles() {
        let row: String = all_nibbles().map(|b| format!("{:>3}", add(a, b))).collect();
        lines.push(format!("{a:>3}|{row}"));
    }
    lines.join("\n")
}

fn execute<R: BufRead, W: Write>(
    command: Command,
    input: &mut R,
    output: &mut W,
) -> Result<(), Fail> {
    let text: String = match command {
        Command::Add {
            a,
            b,
            five_bit,
            json,
        } => {
            let a = match a {
                Some(a) => a,
                None => prompt::ask(input, output, "First value? ")?,
            };
            let b = match b {
                Some(b) => b,
                None => prompt::ask(input, output, "Second value? ")?,
            };
            let sum = add(a, b);
            event!(Level::DEBUG, "{} + {} gives {:?}", a, b, sum);
            if json {
                serde_json::to_string(&sum).map_err(|e| Fail::WriteFailed(e.to_string()))?
            } else if five_bit {
                sum.to_string()
            } else {
                describe_sum(&sum)
            }
        }
        Command::Maximum { values } => maximum(&values).to_string(),
        Command::Minimum { a, b } => minimum(a, b).to_string(),
        Command::Difference { a, b } => difference(a, b).to_string(),
        Command::Increment { a, wrap: false } => increment(a).to_string(),
        Command::Increment { a, wrap: true } => increment_wrapping(a).to_string(),
        Command::Subtract {
            rear,
            side_a,
            side_b,
        } => subtract(rear, side_a, side_b).to_string(),
        Command::Compare {
            rear,
            side_a,
            side_b,
        } => compare(rear, side_a, side_b).to_string(),
        Command::Table => render_table(),
    };
    writeln!(output, "{text}").map_err(|e| Fail::WriteFailed(e.to_string()))
}

/// With no command, we prompt for two values and add them.
fn command_or_default(cli: Cli) -> Command {
    cli.command.unwrap_or(Command::Add {
        a: None,
        b: None,
        five_bit: false,
        json: false,
    })
}

fn run_compy() -> Result<(), Fail> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/0.3/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.  Logging goes to stderr so that it is kept apart from
    // results.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let command = command_or_default(cli);
    event!(Level::DEBUG, "running {:?}", command);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(command, &mut stdin.lock(), &mut stdout.lock())
}

fn main() {
    match run_compy() {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

#[cfg(test)]
fn run_with_input(args: &[&str], input: &str) -> Result<String, Fail> {
    let cli = Cli::try_parse_from(args).expect("test arguments should be valid");
    let command = cli.command.expect("test arguments should include a command");
    let mut output: Vec<u8> = Vec::new();
    execute(command, &mut std::io::Cursor::new(input), &mut output)?;
    Ok(String::from_utf8(output).expect("output should be UTF-8"))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_add_from_arguments() {
    assert_eq!(
        run_with_input(&["compy", "add", "3", "4"], "").unwrap(),
        "Result: 7 with a carry of 0.\n"
    );
    assert_eq!(
        run_with_input(&["compy", "add", "15", "15"], "").unwrap(),
        "Result: 14 with a carry of 1.\n"
    );
    assert_eq!(
        run_with_input(&["compy", "add", "--five-bit", "9", "8"], "").unwrap(),
        "17\n"
    );
}

#[test]
fn test_add_prompts_for_missing_values() {
    assert_eq!(
        run_with_input(&["compy", "add"], "15\n1\n").unwrap(),
        "First value? Second value? Result: 0 with a carry of 1.\n"
    );
    assert_eq!(
        run_with_input(&["compy", "add", "2"], "5\n").unwrap(),
        "Second value? Result: 7 with a carry of 0.\n"
    );
    assert!(matches!(
        run_with_input(&["compy", "add"], "3\n16\n"),
        Err(Fail::BadValue(_))
    ));
}

#[test]
fn test_no_command_means_add() {
    let cli = Cli::try_parse_from(["compy"]).expect("no arguments is valid");
    let command = command_or_default(cli);
    let mut output: Vec<u8> = Vec::new();
    execute(command, &mut std::io::Cursor::new("3\n4\n"), &mut output)
        .expect("input is valid");
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "First value? Second value? Result: 7 with a carry of 0.\n"
    );
}

#[test]
fn test_add_json_output() {
    assert_eq!(
        run_with_input(&["compy", "add", "--json", "15", "1"], "").unwrap(),
        "{\"carry\":15,\"value\":0}\n"
    );
    assert_eq!(
        run_with_input(&["compy", "add", "--json", "3"], "4\n").unwrap(),
        "Second value? {\"carry\":0,\"value\":7}\n"
    );
    assert!(Cli::try_parse_from(["compy", "add", "--json", "--five-bit", "1", "2"]).is_err());
}

#[test]
fn test_out_of_range_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["compy", "add", "16", "1"]).is_err());
    assert!(Cli::try_parse_from(["compy", "minimum", "3", "x"]).is_err());
    assert!(Cli::try_parse_from(["compy", "maximum"]).is_err());
}

#[test]
fn test_library_commands() {
    let run = |args: &[&str]| run_with_input(args, "").unwrap();
    assert_eq!(run(&["compy", "maximum", "3", "11", "7"]), "11\n");
    assert_eq!(run(&["compy", "minimum", "3", "11"]), "3\n");
    assert_eq!(run(&["compy", "difference", "3", "11"]), "8\n");
    assert_eq!(run(&["compy", "increment", "15"]), "15\n");
    assert_eq!(run(&["compy", "increment", "--wrap", "15"]), "0\n");
    assert_eq!(run(&["compy", "increment", "6"]), "7\n");
    assert_eq!(run(&["compy", "subtract", "10", "2", "6"]), "4\n");
    assert_eq!(run(&["compy", "compare", "4", "9", "5"]), "false\n");
    assert_eq!(run(&["compy", "compare", "5", "9", "5"]), "true\n");
}

#[test]
fn test_table() {
    let table = run_with_input(&["compy", "table"], "").unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 18);
    assert!(lines[0].starts_with("  +|  0  1  2"));
    assert_eq!(lines[2], format!("  0|{}", (0..16).map(|n| format!("{n:>3}")).collect::<String>()));
    assert!(lines[17].starts_with(" 15| 15 16 17"));
    assert!(lines[17].ends_with(" 30"));
}
