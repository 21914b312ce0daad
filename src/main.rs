/// Text Analyzer - word statistics, search and readability for plain text
///
/// The main entry point for the text analyzer application. It parses command-line
/// arguments, loads the document and prints or exports the analysis.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{error, info, warn, LevelFilter};
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use text_analyzer::config::{self, AnalyzerConfig};
use text_analyzer::utils::output_formatter;
use text_analyzer::{MatchShape, SearchMode, TextAnalyzer, TextDocument};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version,
    about = "Word frequency, search and readability analysis for text files",
    long_about = "This tool analyzes a plain-text document and reports:
- Lines and words matching a literal search term or a regular expression
- Word frequencies, the most frequent words and the average word length
- Sentence and syllable counts
- Flesch Reading Ease and Flesch-Kincaid Grade Level scores"
)]
struct Args {
    /// Path to the text file to analyze
    #[arg(name = "file_path")]
    file_path: PathBuf,

    /// Term to search for; without one the file content is printed
    #[arg(name = "search_term")]
    search_term: Option<String>,

    /// Treat the search term as a regular expression
    #[arg(long = "regex", action = ArgAction::SetTrue)]
    regex: bool,

    /// Number of most frequent words to list (negative or non-numeric: none)
    #[arg(long = "top", allow_hyphen_values = true)]
    top: Option<String>,

    /// Count matching lines or matching words for the hit frequency
    #[arg(long = "match-shape", value_enum)]
    match_shape: Option<MatchShape>,

    /// Append a result row to this CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Export the full report to a JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: text_analyzer.log)
    #[arg(long = "log-file", default_value = "text_analyzer.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    let args = Args::parse();

    let _ = setup_logging(&args);

    let config = build_config(&args);

    // A document that cannot be loaded is never analyzed
    let document = match TextDocument::load(&args.file_path) {
        Ok(document) => document,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{} {:#}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let search_term = args.search_term.as_deref().filter(|term| !term.is_empty());

    let Some(search_term) = search_term else {
        info!("No search term given, printing content of {}", document.path().display());
        if !args.quiet {
            print!("{}", output_formatter::format_content(document.lines(), args.md));
        }
        return Ok(());
    };

    let analyzer = TextAnalyzer::new(&config, Some(search_term));
    let report = analyzer.analyze(document.lines());

    if let Some(json_path) = &args.json {
        output_formatter::export_report_json(&report, json_path)?;
        info!("Report exported to {}", json_path.display());
    }

    if let Some(csv_path) = &config.csv_path {
        if report.search.is_some() {
            output_formatter::append_csv_row(
                csv_path,
                &document.file_name(),
                search_term,
                report.hit_frequency(),
            )?;
            info!("Result row appended to {}", csv_path.display());
        } else {
            warn!("No search results, skipping CSV row");
        }
    }

    if !args.quiet {
        println!(
            "{} {} {}",
            "Analyzing".bold(),
            document.path().display(),
            search_term
        );
        println!();
        print!("{}", output_formatter::format_report(&report, args.md));
        println!(
            "\n{} {:.2} seconds",
            "Time elapsed:".green(),
            start_time.elapsed().as_secs_f64()
        );
    }

    if !report.runtime_errors.is_empty() {
        for message in &report.runtime_errors {
            eprintln!("{} {}", "Error:".red(), message);
        }
        process::exit(1);
    }

    Ok(())
}

/// Set up logging with file output
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}

/// Merge the configuration file with command line overrides
fn build_config(args: &Args) -> AnalyzerConfig {
    let mut config = match &args.config {
        Some(path) => config::load_config(path),
        None => config::default_config(),
    };

    if args.regex {
        config.search_mode = SearchMode::Pattern;
    }

    if let Some(top) = &args.top {
        config.top_n = config::parse_top_n(top).unwrap_or(0);
    }

    if let Some(match_shape) = args.match_shape {
        config.match_shape = match_shape;
    }

    if let Some(csv_path) = &args.csv {
        config.csv_path = Some(csv_path.clone());
    }

    config
}
