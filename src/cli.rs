use crate::config::{ConfigOverrides, FullyCoveredFilter};
use crate::coverage::InputFormat;
use crate::formatting::ColorMode;
use crate::report::OrderMethod;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "covconsole")]
#[command(about = "Terminal coverage summary for LCOV and SimpleCov results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the coverage summary for a coverage file
    Report(ReportArgs),

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// LCOV tracefile or SimpleCov .resultset.json
    pub coverage_file: PathBuf,

    /// Input format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub format: InputFormat,

    /// Project root stripped from displayed filenames (defaults to the current directory)
    #[arg(long, env = "COVCONSOLE_ROOT")]
    pub root: Option<PathBuf>,

    /// Show at most N files (0 shows all)
    #[arg(short, long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Show all files
    #[arg(long)]
    pub no_limit: bool,

    /// File ordering (ascending-by-coverage, descending-by-coverage, filename, most-missed)
    #[arg(long, value_parser = parse_order)]
    pub order: Option<OrderMethod>,

    /// Hide every 100% covered file instead of only the first one
    #[arg(long)]
    pub hide_all_fully_covered: bool,

    /// Configuration file (skips .covconsole.toml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,
}

fn parse_order(s: &str) -> Result<OrderMethod, String> {
    s.parse()
}

impl ReportArgs {
    /// Flags the user actually passed, as a config layer.
    pub fn overrides(&self) -> ConfigOverrides {
        let limit = if self.no_limit { Some(0) } else { self.limit };
        ConfigOverrides {
            order: self.order.clone(),
            limit,
            fully_covered: self
                .hide_all_fully_covered
                .then_some(FullyCoveredFilter::All),
        }
    }
}
