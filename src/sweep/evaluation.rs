use serde::Serialize;

use crate::error::Result;
use crate::models::{CatalogItem, Constraints, RankMode, ValueField};
use crate::planner::{plan, RATIO_DISPLAY_UNIT};

/// Outcome of one planner run on one sub-menu.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Sample index; `None` for the full-menu baseline.
    pub sample: Option<usize>,
    pub budget: i64,
    pub value_field: ValueField,
    pub rank_mode: RankMode,
    pub items_offered: usize,
    pub selected: usize,
    pub total_price: i64,
    pub total_value: u64,
    pub utilisation_pct: f64,
}

impl RunResult {
    /// Value bought per 1000 currency units spent.
    pub fn value_per_thousand(&self) -> f64 {
        if self.total_price > 0 {
            self.total_value as f64 / self.total_price as f64 * RATIO_DISPLAY_UNIT
        } else {
            0.0
        }
    }
}

/// Averages over every run that used one ranking strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategySummary {
    pub value_field: ValueField,
    pub rank_mode: RankMode,
    pub runs: usize,
    pub avg_utilisation_pct: f64,
    pub avg_total_value: f64,
    pub avg_value_per_thousand: f64,
    pub avg_selected: f64,
    /// Runs where nothing fit the budget.
    pub empty_runs: usize,
}

/// Plan one sub-menu at one budget.
pub fn evaluate_budget(
    items: &[CatalogItem],
    template: &Constraints,
    budget: i64,
    value_field: ValueField,
    rank_mode: RankMode,
    sample: Option<usize>,
) -> Result<RunResult> {
    let constraints = Constraints {
        budget,
        value_field,
        rank_mode,
        ..template.clone()
    };
    let result = plan(items, &constraints)?;

    Ok(RunResult {
        sample,
        budget,
        value_field,
        rank_mode,
        items_offered: items.len(),
        selected: result.selected.len(),
        total_price: result.total_price,
        total_value: result.total_value,
        utilisation_pct: result.utilisation_pct(),
    })
}

/// Summarize runs per strategy, ratio strategies first.
pub fn summarize(runs: &[RunResult]) -> Vec<StrategySummary> {
    RankMode::ALL
        .iter()
        .flat_map(|&mode| ValueField::ALL.iter().map(move |&field| (field, mode)))
        .filter_map(|(field, mode)| {
            let subset: Vec<&RunResult> = runs
                .iter()
                .filter(|r| r.value_field == field && r.rank_mode == mode)
                .collect();
            if subset.is_empty() {
                return None;
            }
            let n = subset.len() as f64;
            Some(StrategySummary {
                value_field: field,
                rank_mode: mode,
                runs: subset.len(),
                avg_utilisation_pct: subset.iter().map(|r| r.utilisation_pct).sum::<f64>() / n,
                avg_total_value: subset.iter().map(|r| r.total_value as f64).sum::<f64>() / n,
                avg_value_per_thousand: subset.iter().map(|r| r.value_per_thousand()).sum::<f64>() / n,
                avg_selected: subset.iter().map(|r| r.selected as f64).sum::<f64>() / n,
                empty_runs: subset.iter().filter(|r| r.selected == 0).count(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Tempura", 1000, 90, 35, Category::Food),
            CatalogItem::new("Nasi Pecel", 10000, 500, 75, Category::Food),
            CatalogItem::new("Susu", 5000, 150, 32, Category::Drink),
        ]
    }

    #[test]
    fn test_evaluate_budget() {
        let run = evaluate_budget(&items(), &Constraints::new(1), 11000, ValueField::Calories, RankMode::Ratio, Some(4))
            .unwrap();

        assert_eq!(run.budget, 11000);
        assert_eq!(run.selected, 2);
        assert_eq!(run.total_price, 11000);
        assert_eq!(run.total_value, 590);
        assert!((run.utilisation_pct - 100.0).abs() < 1e-9);
        assert!((run.value_per_thousand() - 590.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_per_field() {
        let template = Constraints::new(1);
        let runs = vec![
            evaluate_budget(&items(), &template, 11000, ValueField::Calories, RankMode::Ratio, None).unwrap(),
            evaluate_budget(&items(), &template, 500, ValueField::Calories, RankMode::Ratio, None).unwrap(),
            evaluate_budget(&items(), &template, 11000, ValueField::Score, RankMode::Ratio, None).unwrap(),
            evaluate_budget(&items(), &template, 11000, ValueField::Calories, RankMode::Raw, None).unwrap(),
        ];

        let summaries = summarize(&runs);
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].value_field, ValueField::Calories);
        assert_eq!(summaries[0].runs, 2);
        assert_eq!(summaries[0].empty_runs, 1);
        assert!((summaries[0].avg_utilisation_pct - 50.0).abs() < 1e-9);
        assert_eq!(summaries[1].runs, 1);
        assert_eq!(summaries[2].rank_mode, RankMode::Raw);
        assert_eq!(summaries[2].value_field, ValueField::Calories);
    }

    #[test]
    fn test_evaluate_raw_mode() {
        let run = evaluate_budget(&items(), &Constraints::new(1), 11000, ValueField::Calories, RankMode::Raw, None)
            .unwrap();

        // Nasi Pecel first by raw calories, then only Tempura still fits
        assert_eq!(run.rank_mode, RankMode::Raw);
        assert_eq!(run.selected, 2);
        assert_eq!(run.total_value, 590);
    }
}
