use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{RankMode, ValueField};
use crate::planner::DEFAULT_EXPLAIN_COUNT;

/// Canteen: pick the most filling menu a student budget can buy.
#[derive(Parser, Debug)]
#[command(name = "canteen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog file (JSON or CSV). Defaults to the built-in canteen menu.
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,

    /// Planner config file (JSON). Defaults to ./canteen.json when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a menu for a budget and optional category quotas.
    Plan(PlanArgs),

    /// List the catalog in ranked order.
    Menu {
        /// Ranking strategy.
        #[arg(long = "by", value_enum)]
        by: Option<RankArg>,
    },

    /// Write the built-in menu to a JSON file to start a custom catalog.
    ExportMenu {
        /// Destination file.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Budget in Rupiah, e.g. 50000 or 50.000. Prompted for when missing.
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Maximum number of food items.
    #[arg(long)]
    pub max_food: Option<i64>,

    /// Maximum number of drinks.
    #[arg(long)]
    pub max_drink: Option<i64>,

    /// Maximum number of snacks.
    #[arg(long)]
    pub max_snack: Option<i64>,

    /// Maximum number of items across all categories.
    #[arg(long)]
    pub max_items: Option<i64>,

    /// Extra quota as category=count (repeatable).
    #[arg(long = "quota", value_name = "CATEGORY=COUNT")]
    pub quotas: Vec<String>,

    /// Ranking strategy: calories, score, raw-calories or raw-score.
    #[arg(long = "by", value_enum)]
    pub by: Option<RankArg>,

    /// Reserve the cheapest drink before ranking.
    #[arg(long)]
    pub require_drink: bool,

    /// Spend leftover budget on the cheapest items that still fit.
    #[arg(long)]
    pub fill_remainder: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Number of accepted items to explain in the table output.
    #[arg(long, default_value_t = DEFAULT_EXPLAIN_COUNT)]
    pub explain: usize,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            budget: None,
            max_food: None,
            max_drink: None,
            max_snack: None,
            max_items: None,
            quotas: Vec::new(),
            by: None,
            require_drink: false,
            fill_remainder: false,
            output: OutputFormat::Table,
            explain: DEFAULT_EXPLAIN_COUNT,
        }
    }
}

/// Ranking strategy: value per price, or raw value with `raw-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankArg {
    Calories,
    Score,
    RawCalories,
    RawScore,
}

impl RankArg {
    pub fn field(self) -> ValueField {
        match self {
            RankArg::Calories | RankArg::RawCalories => ValueField::Calories,
            RankArg::Score | RankArg::RawScore => ValueField::Score,
        }
    }

    pub fn mode(self) -> RankMode {
        match self {
            RankArg::Calories | RankArg::Score => RankMode::Ratio,
            RankArg::RawCalories | RankArg::RawScore => RankMode::Raw,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
