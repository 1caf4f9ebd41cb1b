use tracing::{debug, info};

use crate::error::Result;
use crate::models::{
    AllocationResult, CatalogItem, Category, Constraints, Outcome, Phase, RankMode, SelectionStep,
};
use crate::planner::ranking::{rank, RankedItem};

/// Run the greedy pass over an already ranked sequence.
///
/// Every ranked item produces exactly one step. A skipped item never ends the
/// pass: a cheaper item further down may still fit, and a capped category
/// does not block the others.
pub fn allocate(ranked: &[RankedItem<'_>], constraints: &Constraints) -> Result<AllocationResult> {
    constraints.validate()?;

    let mut result = AllocationResult::empty(constraints.budget, constraints.value_field);

    let reserved = if constraints.policy.require_one_drink {
        reserve_drink(ranked, constraints, &mut result)
    } else {
        None
    };

    for entry in ranked {
        if reserved == Some(entry.position) {
            continue;
        }
        let step = consider(entry, constraints, &mut result);
        result.trace.push(step);
    }

    if constraints.policy.fill_remainder {
        fill_remainder(ranked, constraints, &mut result);
    }

    info!(
        budget = constraints.budget,
        total_price = result.total_price,
        total_value = result.total_value,
        selected = result.selected.len(),
        "allocation finished"
    );

    Ok(result)
}

/// Rank `items` by the constraints' value field and rank mode, then allocate.
///
/// Under [`RankMode::Raw`] the order follows the raw value, but the trace
/// still reports each item's value per price.
pub fn plan(items: &[CatalogItem], constraints: &Constraints) -> Result<AllocationResult> {
    constraints.validate()?;
    let field = constraints.value_field;
    let mode = constraints.rank_mode;

    let mut ranked = rank(items, |item| mode.key_of(field, item))?;
    if mode == RankMode::Raw {
        for entry in &mut ranked {
            entry.ratio = field.ratio_of(entry.item);
        }
    }
    allocate(&ranked, constraints)
}

/// Decide a single ranked item: item limit, then quota, then budget.
fn consider(entry: &RankedItem<'_>, constraints: &Constraints, result: &mut AllocationResult) -> SelectionStep {
    let item = entry.item;

    // total_price never exceeds the budget, so the subtraction cannot overflow
    let (outcome, remaining_budget_after) = if constraints.item_limit_reached(result.selected.len()) {
        (Outcome::SkippedLimit, None)
    } else if constraints.quota_reached(item.category, result.count_for(item.category)) {
        (Outcome::SkippedQuota, None)
    } else if item.price > constraints.budget - result.total_price {
        (Outcome::SkippedBudget, None)
    } else {
        (Outcome::Accepted, Some(result.accept(item)))
    };

    debug!(
        item = %item.name,
        ratio = entry.ratio,
        outcome = outcome.label(),
        "ranked step"
    );

    SelectionStep {
        item: item.clone(),
        position: entry.position,
        ratio: entry.ratio,
        outcome,
        phase: Phase::Ranked,
        remaining_budget_after,
    }
}

/// Accept the cheapest drink that fits, ahead of the ranked pass.
///
/// Returns the catalog position of the reserved drink.
fn reserve_drink(
    ranked: &[RankedItem<'_>],
    constraints: &Constraints,
    result: &mut AllocationResult,
) -> Option<usize> {
    if constraints.quota_reached(Category::Drink, 0) || constraints.item_limit_reached(0) {
        return None;
    }

    let drink = ranked
        .iter()
        .filter(|r| r.item.category == Category::Drink && r.item.price <= constraints.budget)
        .min_by_key(|r| r.item.price)?;

    let remaining = result.accept(drink.item);
    debug!(item = %drink.item.name, remaining, "reserved drink");

    result.trace.push(SelectionStep {
        item: drink.item.clone(),
        position: drink.position,
        ratio: drink.ratio,
        outcome: Outcome::Accepted,
        phase: Phase::Reserve,
        remaining_budget_after: Some(remaining),
    });

    Some(drink.position)
}

/// Spend leftover budget on extra units of the cheapest items, ratio ignored.
fn fill_remainder(ranked: &[RankedItem<'_>], constraints: &Constraints, result: &mut AllocationResult) {
    while !constraints.item_limit_reached(result.selected.len()) {
        let remaining = result.remaining_budget();
        let next = ranked
            .iter()
            .filter(|r| r.item.price <= remaining)
            .filter(|r| !constraints.quota_reached(r.item.category, result.count_for(r.item.category)))
            .min_by_key(|r| r.item.price);

        // Prices are positive, so the remaining budget shrinks every round
        let Some(entry) = next else {
            break;
        };

        let remaining = result.accept(entry.item);
        debug!(item = %entry.item.name, remaining, "filled remainder");

        result.trace.push(SelectionStep {
            item: entry.item.clone(),
            position: entry.position,
            ratio: entry.ratio,
            outcome: Outcome::Accepted,
            phase: Phase::Fill,
            remaining_budget_after: Some(remaining),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanteenError;
    use crate::models::{Policy, ValueField};

    fn canteen() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Nasi Campur", 10000, 680, 88, Category::Food),
            CatalogItem::new("Batagor", 10000, 580, 78, Category::Food),
            CatalogItem::new("Tempura", 1000, 90, 35, Category::Food),
            CatalogItem::new("Jus Mangga", 5000, 150, 32, Category::Drink),
            CatalogItem::new("Teh Tawar", 2000, 2, 8, Category::Drink),
        ]
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_budget_skip_does_not_stop_pass() {
        let result = plan(&canteen(), &Constraints::new(12000)).unwrap();

        // Tempura (0.09) and Nasi Campur (0.068) fit; everything after overshoots
        assert_eq!(names(&result.selected), ["Tempura", "Nasi Campur"]);
        assert_eq!(result.total_price, 11000);
        assert_eq!(result.trace.len(), 5);
        assert_eq!(result.trace[2].outcome, Outcome::SkippedBudget);
    }

    #[test]
    fn test_cheaper_item_after_skip_is_accepted() {
        let result = plan(&canteen(), &Constraints::new(13000)).unwrap();
        assert_eq!(names(&result.selected), ["Tempura", "Nasi Campur", "Teh Tawar"]);
        assert_eq!(result.remaining_budget(), 0);
    }

    #[test]
    fn test_quota_skip() {
        let constraints = Constraints::new(50000).with_cap(Category::Food, 1);
        let result = plan(&canteen(), &constraints).unwrap();

        assert_eq!(names(&result.selected), ["Tempura", "Jus Mangga", "Teh Tawar"]);
        let quota_skips = result
            .trace
            .iter()
            .filter(|s| s.outcome == Outcome::SkippedQuota)
            .count();
        assert_eq!(quota_skips, 2);
    }

    #[test]
    fn test_remaining_budget_only_on_accept() {
        let result = plan(&canteen(), &Constraints::new(12000)).unwrap();
        for step in &result.trace {
            assert_eq!(step.remaining_budget_after.is_some(), step.is_accepted());
        }
        assert_eq!(result.trace[0].remaining_budget_after, Some(11000));
    }

    #[test]
    fn test_huge_price_after_cheap_item_is_skipped() {
        let items = vec![
            CatalogItem::new("Tempura", 1, 90, 35, Category::Food),
            CatalogItem::new("Catering", i64::MAX, 90, 35, Category::Food),
        ];
        let result = plan(&items, &Constraints::new(10)).unwrap();

        assert_eq!(names(&result.selected), ["Tempura"]);
        assert_eq!(result.total_price, 1);
        assert_eq!(result.trace[1].outcome, Outcome::SkippedBudget);
    }

    #[test]
    fn test_item_limit_skips_rest() {
        let constraints = Constraints::new(50000).with_max_items(2);
        let result = plan(&canteen(), &constraints).unwrap();

        assert_eq!(names(&result.selected), ["Tempura", "Nasi Campur"]);
        assert_eq!(result.trace.len(), 5);
        assert!(result.trace[2..]
            .iter()
            .all(|s| s.outcome == Outcome::SkippedLimit));
    }

    #[test]
    fn test_item_limit_bounds_policies() {
        let policy = Policy {
            require_one_drink: true,
            fill_remainder: true,
        };
        let constraints = Constraints::new(30000)
            .with_max_items(2)
            .with_policy(policy);
        let result = plan(&canteen(), &constraints).unwrap();

        assert_eq!(names(&result.selected), ["Teh Tawar", "Tempura"]);
        assert!(result.trace.iter().all(|s| s.phase != Phase::Fill));

        let none = plan(&canteen(), &Constraints::new(30000).with_max_items(0).with_policy(policy))
            .unwrap();
        assert!(none.is_empty());
        assert!(none.trace.iter().all(|s| s.outcome == Outcome::SkippedLimit));
    }

    #[test]
    fn test_raw_rank_mode_orders_by_value() {
        let constraints = Constraints::new(22000).with_rank_mode(RankMode::Raw);
        let result = plan(&canteen(), &constraints).unwrap();

        // Highest calories first: Nasi Campur, Batagor, then Jus Mangga no longer fits
        assert_eq!(names(&result.selected), ["Nasi Campur", "Batagor", "Tempura"]);
        assert!((result.trace[0].ratio - 0.068).abs() < 1e-9);
        assert_eq!(result.trace[2].outcome, Outcome::SkippedBudget);
    }

    #[test]
    fn test_invalid_budget() {
        let err = plan(&canteen(), &Constraints::new(0)).unwrap_err();
        assert!(matches!(err, CanteenError::InvalidConstraint(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let result = plan(&[], &Constraints::new(10000)).unwrap();
        assert!(result.is_empty());
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_score_field_totals() {
        let constraints = Constraints::new(11000).with_value_field(ValueField::Score);
        let result = plan(&canteen(), &constraints).unwrap();

        // Score ratio puts Tempura (0.035) ahead of Nasi Campur (0.0088)
        assert_eq!(names(&result.selected), ["Tempura", "Nasi Campur"]);
        assert_eq!(result.total_value, 123);
    }

    #[test]
    fn test_require_one_drink() {
        let policy = Policy {
            require_one_drink: true,
            ..Policy::default()
        };
        let constraints = Constraints::new(12000).with_policy(policy);
        let result = plan(&canteen(), &constraints).unwrap();

        assert_eq!(result.trace[0].phase, Phase::Reserve);
        assert_eq!(result.trace[0].item.name, "Teh Tawar");
        assert_eq!(names(&result.selected), ["Teh Tawar", "Tempura", "Jus Mangga"]);
        // The reserved drink is not revisited by the ranked pass
        assert_eq!(result.trace.len(), 5);
    }

    #[test]
    fn test_require_one_drink_respects_zero_cap() {
        let policy = Policy {
            require_one_drink: true,
            ..Policy::default()
        };
        let constraints = Constraints::new(12000)
            .with_cap(Category::Drink, 0)
            .with_policy(policy);
        let result = plan(&canteen(), &constraints).unwrap();

        assert!(result.trace.iter().all(|s| s.phase == Phase::Ranked));
        assert_eq!(result.count_for(Category::Drink), 0);
    }

    #[test]
    fn test_fill_remainder_spends_leftover() {
        let policy = Policy {
            fill_remainder: true,
            ..Policy::default()
        };
        let constraints = Constraints::new(12500).with_policy(policy);
        let result = plan(&canteen(), &constraints).unwrap();

        // Ranked pass spends 11000; only another Tempura fits the 1500 left
        let fills: Vec<&str> = result
            .trace
            .iter()
            .filter(|s| s.phase == Phase::Fill)
            .map(|s| s.item.name.as_str())
            .collect();
        assert_eq!(fills, ["Tempura"]);
        assert_eq!(result.total_price, 12000);
        assert_eq!(result.count_for(Category::Food), 3);
    }

    #[test]
    fn test_fill_remainder_respects_caps() {
        let policy = Policy {
            fill_remainder: true,
            ..Policy::default()
        };
        let constraints = Constraints::new(20000)
            .with_cap(Category::Food, 2)
            .with_cap(Category::Drink, 1)
            .with_policy(policy);
        let result = plan(&canteen(), &constraints).unwrap();

        assert_eq!(result.count_for(Category::Food), 2);
        assert_eq!(result.count_for(Category::Drink), 1);
        assert!(result.total_price <= 20000);
    }
}
