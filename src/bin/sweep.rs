use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use canteen_greedy_rs::catalog::{builtin_menu, load_catalog};
use canteen_greedy_rs::interface::{parse_amount, parse_quota};
use canteen_greedy_rs::logging::init_tracing;
use canteen_greedy_rs::models::{Constraints, Policy};
use canteen_greedy_rs::sweep::{
    print_summaries, print_topk, run_sweep, write_csv, write_summary_json, SweepConfig,
};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Evaluate the greedy canteen planner across budgets and random sub-menus")]
struct Args {
    /// Number of random sub-menus
    #[arg(long, default_value = "200")]
    samples: usize,

    /// Items drawn per sub-menu
    #[arg(long, default_value = "12")]
    sample_size: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Budgets to evaluate, comma- or semicolon-separated (use "." for thousands)
    #[arg(long, default_value = "10000,20000,50000,100000")]
    budgets: String,

    /// Quota applied to every run as category=count (repeatable)
    #[arg(long = "quota", value_name = "CATEGORY=COUNT")]
    quotas: Vec<String>,

    /// Overall item limit applied to every run
    #[arg(long)]
    max_items: Option<i64>,

    /// Reserve the cheapest drink in every run
    #[arg(long)]
    require_drink: bool,

    /// Spend leftover budget in every run
    #[arg(long)]
    fill_remainder: bool,

    /// Catalog file (JSON or CSV); defaults to the built-in menu
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Output CSV file for all runs
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "sweep_summary.json")]
    json: PathBuf,

    /// Number of top runs to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse a budget list. Entries that are not amounts are skipped with a warning.
fn parse_budgets(s: &str) -> Vec<i64> {
    s.split([',', ';'])
        .filter(|part| !part.trim().is_empty())
        .filter_map(|part| match parse_amount(part) {
            Ok(budget) if budget > 0 => Some(budget),
            _ => {
                warn!("ignoring budget '{}'", part.trim());
                None
            }
        })
        .collect()
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let menu = match &args.menu {
        Some(path) => match load_catalog(path) {
            Ok(items) => items,
            Err(e) => {
                eprintln!("Error reading menu {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => builtin_menu(),
    };
    println!("Loaded {} menu items", menu.len());

    let budgets = parse_budgets(&args.budgets);
    if budgets.is_empty() {
        eprintln!("Error: no valid budgets provided");
        std::process::exit(1);
    }
    println!("Testing budgets: {:?}", budgets);

    let mut template = Constraints::new(1).with_policy(Policy {
        require_one_drink: args.require_drink,
        fill_remainder: args.fill_remainder,
    });
    if let Some(limit) = args.max_items {
        template = template.with_max_items(limit);
    }
    for raw in &args.quotas {
        match parse_quota(raw) {
            Ok((category, cap)) => template = template.with_cap(category, cap),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let config = SweepConfig {
        samples: args.samples,
        sample_size: args.sample_size,
        seed: args.seed,
        budgets,
        template,
    };

    let results = match run_sweep(&config, &menu) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Full menu baseline ===");
    for run in &results.baseline {
        println!(
            "budget={} by={}/{} items={} price={} value={} util={:.2}%",
            run.budget,
            run.value_field,
            run.rank_mode,
            run.selected,
            run.total_price,
            run.total_value,
            run.utilisation_pct
        );
    }

    print_summaries(&results.summaries);
    print_topk(&results.runs, args.topk);

    if let Err(e) = write_csv(&results.runs, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all runs to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&results.summaries, &results.baseline, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
