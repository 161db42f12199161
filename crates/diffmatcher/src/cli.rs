use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::samples::SampleSet;

/// Output format of the comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Compare two files line by line (plain text and .docx)
#[derive(Parser, Debug)]
#[command(name = "diffmatcher")]
#[command(
    version,
    about = "Compare two files line by line and report their similarity",
    after_help = "Exit codes: 0 = nearly identical (>= 95%), 1 = similar (>= 50%), \
                  2 = significantly different, 3 = error"
)]
pub struct Cli {
    /// First file to compare
    #[arg(required_unless_present = "sample")]
    pub file1: Option<PathBuf>,

    /// Second file to compare
    #[arg(required_unless_present = "sample")]
    pub file2: Option<PathBuf>,

    /// Suppress per-line differences, show only the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Create sample files and compare them
    #[arg(
        short,
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "basic",
        conflicts_with_all = ["file1", "file2"]
    )]
    pub sample: Option<SampleSet>,

    /// Directory where sample files are written
    #[arg(long, default_value = "sample_files")]
    pub sample_dir: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show character-level changes for each differing line
    #[arg(long)]
    pub inline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_files() {
        let cli = Cli::try_parse_from(["diffmatcher", "a.txt", "b.docx", "--quiet"]).unwrap();

        assert_eq!(cli.file1, Some(PathBuf::from("a.txt")));
        assert_eq!(cli.file2, Some(PathBuf::from("b.docx")));
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.sample.is_none());
    }

    #[test]
    fn test_sample_without_value() {
        let cli = Cli::try_parse_from(["diffmatcher", "--sample"]).unwrap();
        assert_eq!(cli.sample, Some(SampleSet::Basic));
        assert_eq!(cli.sample_dir, PathBuf::from("sample_files"));
    }

    #[test]
    fn test_sample_with_value() {
        let cli = Cli::try_parse_from(["diffmatcher", "-s", "report", "--format", "json"]).unwrap();
        assert_eq!(cli.sample, Some(SampleSet::Report));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_files_are_required_without_sample() {
        assert!(Cli::try_parse_from(["diffmatcher", "only_one.txt"]).is_err());
        assert!(Cli::try_parse_from(["diffmatcher"]).is_err());
    }
}
