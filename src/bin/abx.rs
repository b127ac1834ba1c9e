//! Ablax CLI - extract `Definition Phrase (ABBR)` pairs from LaTeX text

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
use ablax::{
    extract_with_report, format_matches, normalize, ExtractOptions, ExtractWarning, OutputFormat,
    ReconstructionPolicy,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "abx")]
#[command(version)]
#[command(about = "Ablax - LaTeX-aware abbreviation extractor", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Minimum fraction of abbreviation letters/commands that must match
    #[arg(short, long, default_value_t = 0.7)]
    threshold: f64,

    /// Phrase reconstruction policy
    #[arg(short, long, value_enum, default_value_t = Policy::LineEnd)]
    policy: Policy,

    /// Require the first and last abbreviation units to have matched
    #[arg(long)]
    require_first_last: bool,

    /// Drop matches used fewer than this many times elsewhere in the text
    #[arg(long, default_value_t = 0)]
    min_usage: usize,

    /// Skip text normalization (input is already normalized)
    #[arg(long)]
    no_normalize: bool,

    /// Only normalize the input and print the result
    #[arg(long)]
    normalize_only: bool,

    /// Dump every candidate with its ratios as JSON, unfiltered
    #[arg(long)]
    collect: bool,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `ABBR: full name` lines
    Plain,
    /// LaTeX tabular environment
    Tabular,
    /// nomencl package entries
    Nomenclature,
    /// Matches as a JSON array
    Json,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Slice from the first matched word to the end of the phrase
    LineEnd,
    /// Slice from the first to the last matched word only
    MinMax,
}

#[cfg(feature = "cli")]
fn print_warnings(warnings: &[ExtractWarning]) {
    for warning in warnings {
        eprintln!("\x1b[33mwarning\x1b[0m: {}", warning);
    }
}

#[cfg(feature = "cli")]
fn write_output(output: Option<&str>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                handle.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if cli.normalize_only {
        return write_output(cli.output.as_deref(), &normalize(&input));
    }

    let options = ExtractOptions {
        threshold: cli.threshold,
        reconstruction: match cli.policy {
            Policy::LineEnd => ReconstructionPolicy::ToEndOfLine,
            Policy::MinMax => ReconstructionPolicy::MinToMax,
        },
        require_first_last_match: cli.require_first_last,
        min_usage: cli.min_usage,
        normalize: !cli.no_normalize,
    };

    let report = extract_with_report(&input, &options);
    if !cli.quiet {
        print_warnings(&report.warnings);
    }

    if cli.collect {
        let json = serde_json::to_string_pretty(&report.candidates)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        return write_output(cli.output.as_deref(), &json);
    }

    let content = match cli.format {
        Format::Plain => format_matches(&report.matches, OutputFormat::Plain),
        Format::Tabular => format_matches(&report.matches, OutputFormat::Tabular),
        Format::Nomenclature => format_matches(&report.matches, OutputFormat::Nomenclature),
        Format::Json => serde_json::to_string_pretty(&report.matches)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
    };
    write_output(cli.output.as_deref(), &content)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install ablax --features cli");
    eprintln!("  abx [OPTIONS] [INPUT_FILE]");
}
