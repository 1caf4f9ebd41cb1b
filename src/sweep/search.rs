use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::error::{CanteenError, Result};
use crate::models::{CatalogItem, Constraints, RankMode, ValueField};
use crate::sweep::evaluation::{evaluate_budget, summarize, RunResult, StrategySummary};

/// Configuration for a sweep.
pub struct SweepConfig {
    /// Number of random sub-menus to draw.
    pub samples: usize,
    /// Items per sub-menu; clamped to the menu size.
    pub sample_size: usize,
    pub seed: u64,
    pub budgets: Vec<i64>,
    /// Caps and policy applied to every run; its budget is ignored.
    pub template: Constraints,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            sample_size: 12,
            seed: 123,
            // A snack, a lunch, a full day, a generous day
            budgets: vec![10_000, 20_000, 50_000, 100_000],
            template: Constraints::new(1),
        }
    }
}

/// Results from a sweep.
pub struct SweepResults {
    /// Runs on the full menu, one per budget and strategy.
    pub baseline: Vec<RunResult>,
    /// Runs on random sub-menus.
    pub runs: Vec<RunResult>,
    pub summaries: Vec<StrategySummary>,
}

/// Every value field under every rank mode.
fn strategies() -> impl Iterator<Item = (ValueField, RankMode)> {
    RankMode::ALL
        .into_iter()
        .flat_map(|mode| ValueField::ALL.into_iter().map(move |field| (field, mode)))
}

/// Plan every budget with every strategy, on the full menu and on random sub-menus.
pub fn run_sweep(config: &SweepConfig, menu: &[CatalogItem]) -> Result<SweepResults> {
    if config.budgets.is_empty() {
        return Err(CanteenError::InvalidInput("no budgets to sweep".to_string()));
    }

    let mut baseline = Vec::with_capacity(config.budgets.len() * strategies().count());
    for &budget in &config.budgets {
        for (field, mode) in strategies() {
            baseline.push(evaluate_budget(menu, &config.template, budget, field, mode, None)?);
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let sample_size = config.sample_size.min(menu.len());
    let mut runs = Vec::with_capacity(config.samples * baseline.len());

    println!(
        "Sweeping {} samples of {} items over {} budgets...",
        config.samples,
        sample_size,
        config.budgets.len()
    );

    for sample in 0..config.samples {
        let sub_menu: Vec<CatalogItem> = menu
            .choose_multiple(&mut rng, sample_size)
            .cloned()
            .collect();

        for &budget in &config.budgets {
            for (field, mode) in strategies() {
                runs.push(evaluate_budget(
                    &sub_menu,
                    &config.template,
                    budget,
                    field,
                    mode,
                    Some(sample),
                )?);
            }
        }

        // Progress indicator every 10%
        if (sample + 1) % (config.samples / 10).max(1) == 0 {
            let pct = ((sample + 1) as f64 / config.samples as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    let summaries = summarize(&runs);
    info!(runs = runs.len(), "sweep finished");

    Ok(SweepResults {
        baseline,
        runs,
        summaries,
    })
}
