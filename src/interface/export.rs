use crate::error::{CanteenError, Result};
use crate::models::AllocationResult;

/// Serialize a full result, trace included, as pretty JSON.
pub fn result_to_json(result: &AllocationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the decision trace as CSV, one row per step.
pub fn trace_to_csv(result: &AllocationResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "step",
        "phase",
        "name",
        "category",
        "price",
        "ratio",
        "outcome",
        "remaining",
    ])?;

    for (i, step) in result.trace.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            step.phase.label().to_string(),
            step.item.name.clone(),
            step.item.category.to_string(),
            step.item.price.to_string(),
            format!("{:.6}", step.ratio),
            step.outcome.label().to_string(),
            step.remaining_budget_after
                .map(|r| r.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| CanteenError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogItem, Category, Constraints};
    use crate::planner::plan;

    fn result() -> AllocationResult {
        let items = vec![
            CatalogItem::new("Tempe Goreng", 1000, 80, 32, Category::Food),
            CatalogItem::new("Nasi Goreng Spesial", 20000, 450, 78, Category::Food),
        ];
        plan(&items, &Constraints::new(5000)).unwrap()
    }

    #[test]
    fn test_trace_to_csv() {
        let csv = trace_to_csv(&result()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "step,phase,name,category,price,ratio,outcome,remaining");
        assert_eq!(lines[1], "1,ranked,Tempe Goreng,food,1000,0.080000,accepted,4000");
        assert_eq!(lines[2], "2,ranked,Nasi Goreng Spesial,food,20000,0.022500,skipped-budget,");
    }

    #[test]
    fn test_result_to_json() {
        let json = result_to_json(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_price"], 1000);
        assert_eq!(value["totals_per_category"]["food"], 1);
        assert_eq!(value["trace"][1]["outcome"], "skipped-budget");
    }
}
