//! Clap argument definitions for the `econ` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "econ")]
#[command(about = "Keyword search over economic data tables and reports")]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `econ data`.
#[derive(Args, Debug, Clone)]
pub struct DataCommand {
    /// Search query (multiple words are joined)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Match whole cell values instead of substrings
    #[arg(long)]
    pub exact: bool,

    /// Matching rows shown per data file [default: from config, 5]
    #[arg(short = 'n', long)]
    pub rows: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `econ reports`.
#[derive(Args, Debug, Clone)]
pub struct ReportsCommand {
    /// Search query (multiple words are joined)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Lines of context around text matches [default: from config, 3]
    #[arg(short = 'C', long)]
    pub context: Option<usize>,

    /// Matches shown per report [default: from config, 10]
    #[arg(short = 'n', long)]
    pub matches: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// An inclusive numeric range on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    /// Column to coerce and compare.
    pub column: String,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

/// Parses `COLUMN:MIN:MAX`. The column name may itself contain colons.
pub fn parse_range(s: &str) -> Result<RangeFilter, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(max), Some(min), Some(column)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected COLUMN:MIN:MAX, got '{s}'"));
    };
    if column.is_empty() {
        return Err("range column must not be empty".to_string());
    }
    let min: f64 = min
        .trim()
        .parse()
        .map_err(|_| format!("invalid range minimum '{min}'"))?;
    let max: f64 = max
        .trim()
        .parse()
        .map_err(|_| format!("invalid range maximum '{max}'"))?;
    if min > max {
        return Err(format!("range minimum {min} is greater than maximum {max}"));
    }
    Ok(RangeFilter {
        column: column.to_string(),
        min,
        max,
    })
}

/// Arguments for `econ filter`.
#[derive(Args, Debug, Clone)]
pub struct FilterCommand {
    /// Data file name or stem (e.g. gdp or gdp.csv)
    pub file: String,

    /// Keep rows whose Country contains this text (case-insensitive)
    #[arg(long)]
    pub country: Option<String>,

    /// Keep rows whose Year equals this value
    #[arg(long)]
    pub year: Option<i64>,

    /// Keep rows whose COLUMN value lies in MIN..=MAX
    #[arg(long, value_name = "COLUMN:MIN:MAX", value_parser = parse_range)]
    pub range: Option<RangeFilter>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `econ stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    /// Data file name or stem
    pub file: String,

    /// Column to summarize
    pub column: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `econ init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.econ.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,

    /// Also create the data/ and reports/ directories
    #[arg(long)]
    pub dirs: bool,
}

/// Supported `econ` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search data tables for keywords
    Data(DataCommand),

    /// Search text and JSON reports for keywords
    Reports(ReportsCommand),

    /// Filter a data table by country, year or numeric range
    Filter(FilterCommand),

    /// Show summary statistics for a table column
    Stats(StatsCommand),

    /// Initialize econ configuration in current directory
    Init(InitCommand),

    /// Show configuration, collections and loaded files
    Status,

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

impl Commands {
    /// Returns true if the command needs the configuration loaded first.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_range() {
        assert_eq!(
            parse_range("GDP:0:3.5").unwrap(),
            RangeFilter {
                column: "GDP".into(),
                min: 0.0,
                max: 3.5
            }
        );
        assert_eq!(parse_range("a:b:-1:1").unwrap().column, "a:b");
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(parse_range("GDP:1").is_err());
        assert!(parse_range(":0:1").is_err());
        assert!(parse_range("GDP:x:1").is_err());
        assert!(parse_range("GDP:5:1").is_err());
    }

    #[test]
    fn data_query_words_and_flags() {
        let cli = Cli::parse_from(["econ", "-v", "data", "gdp", "india", "--exact", "-n", "2"]);
        assert_eq!(cli.verbose, 1);
        let Commands::Data(cmd) = cli.command else {
            panic!("expected data command");
        };
        assert_eq!(cmd.query, vec!["gdp", "india"]);
        assert!(cmd.exact);
        assert_eq!(cmd.rows, Some(2));
        assert!(!cmd.output.json);
    }

    #[test]
    fn init_skips_config() {
        let cli = Cli::parse_from(["econ", "init", "--dirs"]);
        assert!(!cli.command.needs_config());
        let cli = Cli::parse_from(["econ", "status"]);
        assert!(cli.command.needs_config());
    }
}
