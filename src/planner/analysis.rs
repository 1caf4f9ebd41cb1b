use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{AllocationResult, Category, Constraints, ValueField};
use crate::planner::constants::{
    efficiency_tier, price_tier, EfficiencyTier, PriceTier, RATIO_DISPLAY_UNIT,
};

/// Independent re-check of a result against the constraints it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct Audit {
    /// Violated constraints; empty when the result is sound.
    pub issues: Vec<String>,
    pub utilisation_pct: f64,
    pub per_category: BTreeMap<Category, u32>,
    pub avg_value_per_item: f64,
}

impl Audit {
    pub fn is_sound(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Recount the selection and compare it with the budget and every cap.
pub fn audit(result: &AllocationResult, constraints: &Constraints) -> Audit {
    let mut issues = Vec::new();

    let price_sum: i64 = result.selected.iter().map(|i| i.price).sum();
    if price_sum != result.total_price {
        issues.push(format!(
            "Recorded total price {} differs from the selection sum {}",
            result.total_price, price_sum
        ));
    }
    if price_sum > constraints.budget {
        issues.push(format!(
            "Total price {} exceeds the budget {}",
            price_sum, constraints.budget
        ));
    }

    if let Some(limit) = constraints.max_items {
        if result.selected.len() as i64 > limit {
            issues.push(format!(
                "{} items selected, over the limit of {}",
                result.selected.len(),
                limit
            ));
        }
    }

    let mut per_category: BTreeMap<Category, u32> = BTreeMap::new();
    for item in &result.selected {
        *per_category.entry(item.category).or_insert(0) += 1;
    }

    for category in Category::ALL {
        let count = per_category.get(&category).copied().unwrap_or(0);
        if let Some(cap) = constraints.cap(category) {
            if i64::from(count) > cap {
                issues.push(format!(
                    "{} count {} exceeds its quota {}",
                    category, count, cap
                ));
            }
        }
    }

    let avg_value_per_item = if result.selected.is_empty() {
        0.0
    } else {
        result.total_value as f64 / result.selected.len() as f64
    };

    Audit {
        issues,
        utilisation_pct: result.utilisation_pct(),
        per_category,
        avg_value_per_item,
    }
}

/// Why an accepted item was worth picking.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub name: String,
    pub price: i64,
    pub value: u64,
    pub ratio: f64,
    /// Value gained per 1000 currency units.
    pub value_per_thousand: f64,
    /// Only meaningful for calorie ratios.
    pub efficiency: Option<EfficiencyTier>,
    pub price_tier: PriceTier,
}

/// Explain the first `n` accepted items in acceptance order.
pub fn explain_top(result: &AllocationResult, n: usize) -> Vec<Explanation> {
    result
        .accepted_steps()
        .take(n)
        .map(|step| {
            let efficiency = match result.value_field {
                ValueField::Calories => Some(efficiency_tier(step.ratio)),
                ValueField::Score => None,
            };
            Explanation {
                name: step.item.name.clone(),
                price: step.item.price,
                value: result.value_field.value_of(&step.item),
                ratio: step.ratio,
                value_per_thousand: step.ratio * RATIO_DISPLAY_UNIT,
                efficiency,
                price_tier: price_tier(step.item.price),
            }
        })
        .collect()
}
