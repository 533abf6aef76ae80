//! tsv2csv - convert tab-separated data to CSV

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::LazyLock;

use clap::{CommandFactory, Parser};
use csv_cursor::{Error, Format, Loader};
use regex::Regex;
use tracing_subscriber::EnvFilter;

/// Converts tab-separated (.tsv) data to comma-separated (CSV).
///
/// If OUTPUT is missing, writes to stdout. If INPUT and OUTPUT are missing,
/// reads stdin and writes stdout. '-' may be given for either to use
/// stdin/stdout explicitly.
#[derive(Parser, Debug)]
#[command(name = "tsv2csv")]
#[command(author, version, about, long_about)]
struct Args {
    /// Input TSV file, or '-' for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Output CSV file, or '-' for stdout
    #[arg(default_value = "-")]
    output: String,

    /// Treat the first line as data instead of column names
    #[arg(long)]
    no_header: bool,

    /// Reject lines longer than this many bytes
    #[arg(long)]
    max_line_len: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if is_help_request(&args.input) {
        print_help();
        return ExitCode::SUCCESS;
    }

    match convert(&args) {
        Ok(bytes) => {
            let target = if args.output == "-" {
                "stdout"
            } else {
                args.output.as_str()
            };
            eprintln!(
                "{:.1}kB ({bytes} bytes) written to {target}",
                bytes as f64 / 1024.0
            );
            ExitCode::SUCCESS
        }
        Err(e @ Error::SourceUnreadable { .. }) => {
            eprintln!("{e}\n");
            print_help();
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error converting {}: {e}", args.input);
            ExitCode::FAILURE
        }
    }
}

/// Convert the input and write it out, returning the number of bytes written.
fn convert(args: &Args) -> Result<usize, Error> {
    let mut loader = Loader::new();
    loader
        .format(Format::Tsv)
        .header_row(if args.no_header { 0 } else { 1 })
        .max_record_len(args.max_line_len);

    let table = if args.input == "-" {
        loader.load_reader(io::stdin().lock())?
    } else {
        loader.load_path(&args.input)?
    };
    tracing::info!(rows = table.count(), columns = ?table.headers(), "converting");

    let csv = table.to_csv_string()?;
    if args.output == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(csv.as_bytes())?;
        stdout.flush()?;
    } else {
        fs::write(&args.output, &csv)?;
    }

    Ok(csv.len())
}

/// Bare `h`, `help`, `-help` and friends given in place of a file name.
static HELP_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(--?)?(h(elp)?)$").expect("Invalid help pattern"));

fn is_help_request(input: &str) -> bool {
    HELP_ARG.is_match(input)
}

fn print_help() {
    eprintln!("{}", Args::command().render_help());
}
