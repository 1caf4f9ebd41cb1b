use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{RankMode, ValueField};
use crate::sweep::evaluation::{RunResult, StrategySummary};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Strategy name as accepted by `--by`, e.g. `raw-calories`.
fn strategy_label(field: ValueField, mode: RankMode) -> String {
    match mode {
        RankMode::Ratio => field.to_string(),
        RankMode::Raw => format!("raw-{}", field),
    }
}

/// Write every run to a CSV file.
pub fn write_csv(runs: &[RunResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "sample",
        "budget",
        "value_field",
        "rank_mode",
        "items_offered",
        "selected",
        "total_price",
        "total_value",
        "utilisation_pct",
        "value_per_1000",
    ])?;

    for run in runs {
        wtr.write_record([
            run.sample.map(|s| s.to_string()).unwrap_or_else(|| "full".to_string()),
            run.budget.to_string(),
            run.value_field.to_string(),
            run.rank_mode.to_string(),
            run.items_offered.to_string(),
            run.selected.to_string(),
            run.total_price.to_string(),
            run.total_value.to_string(),
            format!("{:.2}", run.utilisation_pct),
            format!("{:.3}", run.value_per_thousand()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the per-strategy summary and the baseline to a JSON file.
pub fn write_summary_json(
    summaries: &[StrategySummary],
    baseline: &[RunResult],
    path: &Path,
) -> Result<()> {
    let json = serde_json::json!({
        "strategies": summaries.iter().map(|s| {
            serde_json::json!({
                "value_field": s.value_field,
                "rank_mode": s.rank_mode,
                "runs": s.runs,
                "empty_runs": s.empty_runs,
                "avg_utilisation_pct": truncate(s.avg_utilisation_pct, 2),
                "avg_total_value": truncate(s.avg_total_value, 1),
                "avg_value_per_1000": truncate(s.avg_value_per_thousand, 3),
                "avg_selected": truncate(s.avg_selected, 2),
            })
        }).collect::<Vec<_>>(),
        "baseline": baseline.iter().map(|r| {
            serde_json::json!({
                "budget": r.budget,
                "value_field": r.value_field,
                "rank_mode": r.rank_mode,
                "selected": r.selected,
                "total_price": r.total_price,
                "total_value": r.total_value,
                "utilisation_pct": truncate(r.utilisation_pct, 2),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the per-strategy summary to stdout.
pub fn print_summaries(summaries: &[StrategySummary]) {
    println!("\n=== Strategy Summary ===\n");

    for s in summaries {
        println!(
            "{:<12} runs={} empty={} util={:.2}% value={:.1} value/1000={:.3} items={:.2}",
            strategy_label(s.value_field, s.rank_mode),
            s.runs,
            s.empty_runs,
            s.avg_utilisation_pct,
            s.avg_total_value,
            s.avg_value_per_thousand,
            s.avg_selected
        );
    }
    println!();
}

/// Print the k runs with the best value per 1000 spent.
pub fn print_topk(runs: &[RunResult], k: usize) {
    let mut sorted: Vec<&RunResult> = runs.iter().collect();
    sorted.sort_by(|a, b| b.value_per_thousand().total_cmp(&a.value_per_thousand()));

    println!("=== Top {} Runs (by value per 1000) ===\n", k.min(sorted.len()));

    for (i, run) in sorted.iter().take(k).enumerate() {
        println!(
            "#{}: sample={} budget={} by={} value/1000={:.3} util={:.2}% items={}",
            i + 1,
            run.sample.map(|s| s.to_string()).unwrap_or_else(|| "full".to_string()),
            run.budget,
            strategy_label(run.value_field, run.rank_mode),
            run.value_per_thousand(),
            run.utilisation_pct,
            run.selected
        );
    }
    println!();
}
