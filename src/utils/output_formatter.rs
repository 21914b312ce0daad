/// Output formatter for analysis results
///
/// This module handles formatting and exporting analysis reports: console
/// text, a JSON export of the full report, and the appended CSV result row.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::analyzer::AnalysisReport;

/// Header of the CSV result file
pub const CSV_HEADER: [&str; 3] = ["Filename", "Search Term", "Frequency (%)"];

/// Format a report for console output
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `use_markdown` - Whether to wrap the output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(report: &AnalysisReport, use_markdown: bool) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }

    if let Some(search) = &report.search {
        for line_match in &search.results.line_matches {
            output.push_str(&format!(
                "Match found at line {}: {}\n",
                line_match.line_number, line_match.line
            ));
        }
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Number of search hits:".green(),
            search.results.match_count()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Words containing the term:".green(),
            search.results.word_match_count()
        ));
    }

    output.push_str(&format!(
        "{} {:.2}\n",
        "Average Word Length:".green(),
        report.average_word_length
    ));
    output.push_str(&format!("{} {}\n", "Total Words:".green(), report.total_words));

    if let Some(search) = &report.search {
        output.push_str(&format!(
            "{} {:.2}%\n",
            "Search hit frequency:".green(),
            search.hit_frequency
        ));
    }

    output.push('\n');
    output.push_str(&format!("{}\n", "Word Counts".yellow().bold()));
    for (word, count) in &report.word_counts {
        output.push_str(&format!("  {}: {}\n", word, count));
    }

    if !report.top_words.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!("Top {} Words", report.top_words.len()).yellow().bold()
        ));
        for (i, (word, count)) in report.top_words.iter().enumerate() {
            output.push_str(&format!("{}. {}: {}\n", i + 1, word.cyan(), count));
        }
    }

    output.push('\n');
    output.push_str(&format!("{} {}\n", "Total Sentences:".green(), report.total_sentences));
    output.push_str(&format!("{} {}\n", "Total Syllables:".green(), report.total_syllables));
    output.push('\n');

    match &report.readability {
        Some(scores) => {
            output.push_str(&format!(
                "{} {:.2}\n",
                "Flesch Reading Ease:".green(),
                scores.flesch_reading_ease
            ));
            output.push_str(&format!(
                "{} {:.2}\n",
                "Flesch-Kincaid Grade Level:".green(),
                scores.flesch_kincaid_grade
            ));
        }
        None => {
            output.push_str(&format!(
                "{}\n",
                "Readability: undefined (the document needs at least one word and one sentence)"
                    .yellow()
            ));
        }
    }

    if !report.runtime_errors.is_empty() {
        output.push('\n');
        output.push_str(&format!("{}\n", "Errors".red().bold()));
        for message in &report.runtime_errors {
            output.push_str(&format!("  - {}\n", message));
        }
    }

    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Format document lines for display
pub fn format_content<S: AsRef<str>>(lines: &[S], use_markdown: bool) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }
    for line in lines {
        output.push_str(line.as_ref());
        output.push('\n');
    }
    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Export a report to a JSON file
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_report_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, report).context("Failed to write JSON data")?;

    Ok(())
}

/// Append one result row to a CSV file
///
/// The header is written only when the file is new or empty. Fields are
/// written as-is; a comma inside a field is not quoted.
///
/// # Arguments
///
/// * `output_path` - CSV file to append to
/// * `file_name` - Name of the analyzed document
/// * `search_term` - The term that was searched for
/// * `frequency` - Hit frequency as a percentage
///
/// # Returns
///
/// Result indicating success or failure
pub fn append_csv_row(
    output_path: &Path,
    file_name: &str,
    search_term: &str,
    frequency: f64,
) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .context(format!("Failed to open CSV output file: {}", output_path.display()))?;

    let needs_header = file
        .metadata()
        .context("Failed to read CSV file metadata")?
        .len()
        == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(file);

    if needs_header {
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
    }

    let frequency = format!("{:.2}", frequency);
    writer
        .write_record([file_name, search_term, frequency.as_str()])
        .context("Failed to write CSV record")?;

    // Flush the writer to ensure all data is written
    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::core::analyzer::TextAnalyzer;

    fn sample_report(search_term: Option<&str>) -> AnalysisReport {
        let config = AnalyzerConfig {
            top_n: 2,
            ..AnalyzerConfig::default()
        };
        TextAnalyzer::new(&config, search_term)
            .analyze(&["The quick brown fox.", "The fox jumps!"])
    }

    #[test]
    fn test_format_report() {
        colored::control::set_override(false);
        let output = format_report(&sample_report(Some("fox")), false);

        assert!(output.contains("Match found at line 1: The quick brown fox."));
        assert!(output.contains("Match found at line 2: The fox jumps!"));
        assert!(output.contains("Number of search hits: 2"));
        assert!(output.contains("Total Words: 7"));
        assert!(output.contains("  jumps: 1"));
        assert!(output.contains("1. fox: 2"));
        assert!(output.contains("2. the: 2"));
        assert!(output.contains("Flesch Reading Ease: 118.68"));
        assert!(!output.starts_with("```"));
    }

    #[test]
    fn test_format_report_undefined_readability() {
        colored::control::set_override(false);
        let report = TextAnalyzer::new(&AnalyzerConfig::default(), None).analyze(&["no end"]);
        let output = format_report(&report, true);

        assert!(output.starts_with("```\n"));
        assert!(output.contains("Readability: undefined"));
        assert!(!output.contains("Search hit frequency"));
    }

    #[test]
    fn test_format_content() {
        assert_eq!(format_content(&["a", "b"], false), "a\nb\n");
        assert_eq!(format_content(&["a"], true), "```\na\n```\n");
    }

    #[test]
    fn test_export_report_json() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("report.json");
        export_report_json(&sample_report(Some("fox")), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total_words"], 7);
        assert_eq!(value["word_counts"]["the"], 2);
        assert_eq!(value["search"]["term"], "fox");
        assert_eq!(value["search"]["mode"], "literal");
        assert_eq!(value["search"]["line_matches"][1]["line_number"], 2);
    }

    #[test]
    fn test_append_csv_row() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("results.csv");

        append_csv_row(&path, "doc.txt", "fox", 25.0).unwrap();
        append_csv_row(&path, "doc.txt", "a,b", 12.5).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Filename,Search Term,Frequency (%)\ndoc.txt,fox,25.00\ndoc.txt,a,b,12.50\n"
        );
    }
}
