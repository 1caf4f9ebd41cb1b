use std::path::Path;

use clap::Parser;
use tracing::info;

use canteen_greedy_rs::catalog::{builtin_menu, load_catalog, save_catalog};
use canteen_greedy_rs::cli::{Cli, Command, OutputFormat, PlanArgs};
use canteen_greedy_rs::config::{Config, ConfigOverrides};
use canteen_greedy_rs::error::Result;
use canteen_greedy_rs::interface::{
    collect_user_constraints, display_audit, display_catalog, display_explanations,
    display_result, display_trace, parse_amount, parse_quota, prompt_yes_no, result_to_json,
    trace_to_csv,
};
use canteen_greedy_rs::logging::init_tracing;
use canteen_greedy_rs::models::{CatalogItem, Category, RankMode, ValueField};
use canteen_greedy_rs::planner::{audit, explain_top, plan, rank};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(menu) = cli.menu.clone() {
        config.menu = Some(menu);
    }

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(config, args),
        Command::Menu { by } => {
            let field = by.map(|b| b.field()).unwrap_or(config.value_field);
            let mode = by.map(|b| b.mode()).unwrap_or(config.rank_mode);
            cmd_menu(&config, field, mode)
        }
        Command::ExportMenu { path } => cmd_export_menu(&path),
    }
}

/// Load the configured catalog, or the built-in menu.
fn load_menu(config: &Config) -> Result<Vec<CatalogItem>> {
    match &config.menu {
        Some(path) => {
            let items = load_catalog(path)?;
            info!(path = %path.display(), count = items.len(), "using catalog file");
            Ok(items)
        }
        None => Ok(builtin_menu()),
    }
}

/// Recommend a menu for the given budget and quotas.
fn cmd_plan(mut config: Config, args: PlanArgs) -> Result<()> {
    let budget = args.budget.as_deref().map(parse_amount).transpose()?;

    let mut quotas = Vec::new();
    for (category, cap) in [
        (Category::Food, args.max_food),
        (Category::Drink, args.max_drink),
        (Category::Snack, args.max_snack),
    ] {
        if let Some(cap) = cap {
            quotas.push((category, cap));
        }
    }
    for raw in &args.quotas {
        quotas.push(parse_quota(raw)?);
    }

    config.apply_overrides(ConfigOverrides {
        budget,
        quotas,
        max_items: args.max_items,
        value_field: args.by.map(|b| b.field()),
        rank_mode: args.by.map(|b| b.mode()),
        require_one_drink: args.require_drink,
        fill_remainder: args.fill_remainder,
        menu: None,
    });

    let items = load_menu(&config)?;

    // Without a budget from flags or config, ask for everything interactively
    let budget = match config.budget {
        Some(budget) => budget,
        None => {
            let (budget, caps) = collect_user_constraints(None, &config.quotas)?;
            config.quotas = caps;
            if !config.require_one_drink {
                config.require_one_drink =
                    prompt_yes_no("Make sure at least one drink is included?", false)?;
            }
            budget
        }
    };

    let constraints = config.constraints(budget);
    let result = plan(&items, &constraints)?;

    match args.output {
        OutputFormat::Json => println!("{}", result_to_json(&result)?),
        OutputFormat::Csv => print!("{}", trace_to_csv(&result)?),
        OutputFormat::Table => {
            display_result(&result, &constraints);
            display_trace(&result);
            let explanations = explain_top(&result, args.explain);
            display_explanations(
                &explanations,
                result.value_field,
                result.accepted_steps().count(),
            );
            display_audit(&audit(&result, &constraints));
        }
    }

    Ok(())
}

/// List the catalog in the order the planner would consider it.
fn cmd_menu(config: &Config, field: ValueField, mode: RankMode) -> Result<()> {
    let items = load_menu(config)?;
    let ranked = rank(&items, |item| mode.key_of(field, item))?;
    display_catalog(&ranked, field, mode);
    Ok(())
}

/// Write the built-in menu as a starting catalog file.
fn cmd_export_menu(path: &Path) -> Result<()> {
    let items = builtin_menu();
    save_catalog(path, &items)?;
    println!("Wrote {} menu items to {}", items.len(), path.display());
    Ok(())
}
