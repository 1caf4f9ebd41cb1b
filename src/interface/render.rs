use crate::models::{AllocationResult, Category, Constraints, Phase, RankMode, ValueField};
use crate::planner::{Audit, Explanation, RankedItem, RATIO_DISPLAY_UNIT};

/// Format an amount as Rupiah with dot thousands separators, e.g. `Rp15.000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}Rp{}", sign, grouped)
}

fn ratio_label(ratio: f64, field: ValueField) -> String {
    format!("{:.2} {}/Rp1.000", ratio * RATIO_DISPLAY_UNIT, field.unit())
}

/// Display the catalog in ranked order.
pub fn display_catalog(ranked: &[RankedItem<'_>], field: ValueField, mode: RankMode) {
    if ranked.is_empty() {
        println!("The menu is empty.");
        return;
    }

    println!();
    match mode {
        RankMode::Ratio => println!("=== Menu ranked by {} per price ({} items) ===", field, ranked.len()),
        RankMode::Raw => println!("=== Menu ranked by {} ({} items) ===", field, ranked.len()),
    }
    println!();

    let max_name_len = ranked.iter().map(|r| r.item.name.len()).max().unwrap_or(10);

    for (i, entry) in ranked.iter().enumerate() {
        let item = entry.item;
        println!(
            "{:>3}. {:<width$} | {:>10} | {:>4} kcal | {:>3} pts | {:<5} | {}",
            i + 1,
            item.name,
            format_rupiah(item.price),
            item.calories,
            item.score,
            item.category,
            ratio_label(field.ratio_of(item), field),
            width = max_name_len
        );
    }
    println!();
}

/// Display the selection and totals.
pub fn display_result(result: &AllocationResult, constraints: &Constraints) {
    println!();
    println!("=== Recommended Menu ===");
    println!();

    if result.is_empty() {
        println!("No menu item fits a budget of {}.", format_rupiah(result.budget));
        println!();
        return;
    }

    let max_name_len = result.selected.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in result.selected.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} | {:>10} | {:>4} {} | {}",
            i + 1,
            item.name,
            format_rupiah(item.price),
            result.value_field.value_of(item),
            result.value_field.unit(),
            item.category,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Budget: {}", format_rupiah(result.budget));
    println!("Total price: {}", format_rupiah(result.total_price));
    println!("Remaining: {}", format_rupiah(result.remaining_budget()));
    println!(
        "Total {}: {} {}",
        result.value_field,
        result.total_value,
        result.value_field.unit()
    );
    if let Some(limit) = constraints.max_items {
        println!("Items chosen: {}/{}", result.selected.len(), limit);
    }
    for category in Category::ALL {
        let count = result.count_for(category);
        match constraints.cap(category) {
            Some(cap) => println!("{} chosen: {}/{}", category, count, cap),
            None if count > 0 => println!("{} chosen: {}", category, count),
            None => {}
        }
    }
    println!();
}

/// Display every decision the allocator took.
pub fn display_trace(result: &AllocationResult) {
    println!("=== How the greedy pass decided ===");
    println!();

    if result.trace.is_empty() {
        println!("No steps recorded.");
        println!();
        return;
    }

    for (i, step) in result.trace.iter().enumerate() {
        let phase = match step.phase {
            Phase::Ranked => String::new(),
            other => format!("[{}] ", other.label()),
        };
        let base = format!(
            "{:02}. {}{} | {} -> {}",
            i + 1,
            phase,
            step.item.name,
            ratio_label(step.ratio, result.value_field),
            step.outcome.label().to_uppercase()
        );
        match step.remaining_budget_after {
            Some(remaining) => println!(
                "{} (remaining {}) | {}",
                base,
                format_rupiah(remaining),
                step.reason()
            ),
            None => println!("{} | {}", base, step.reason()),
        }
    }
    println!();
}

/// Display why the first accepted items were chosen.
pub fn display_explanations(explanations: &[Explanation], field: ValueField, accepted_total: usize) {
    if explanations.is_empty() {
        return;
    }

    println!("=== Why these items ===");

    for (i, e) in explanations.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, e.name);
        println!("   Price: {} ({})", format_rupiah(e.price), e.price_tier.name());
        println!("   {}: {} {}", field, e.value, field.unit());
        println!(
            "   Every Rp1.000 buys {:.2} {}",
            e.value_per_thousand,
            field.unit()
        );
        if let Some(tier) = e.efficiency {
            println!("   Efficiency is {}: {}", tier.name(), tier.description());
        }
    }

    if accepted_total > explanations.len() {
        println!();
        println!(
            "   ... and {} more chosen the same way",
            accepted_total - explanations.len()
        );
    }
    println!();
}

/// Display the audit of a result.
pub fn display_audit(audit: &Audit) {
    println!("=== Check ===");
    if audit.is_sound() {
        println!("- All constraints hold.");
        println!("- Budget used: {:.2}%", audit.utilisation_pct);
        let counts: Vec<String> = audit
            .per_category
            .iter()
            .map(|(category, count)| format!("{} {}", count, category))
            .collect();
        if !counts.is_empty() {
            println!("- Chosen: {}", counts.join(", "));
        }
        println!("- Average value per item: {:.1}", audit.avg_value_per_item);
    } else {
        for issue in &audit.issues {
            println!("- {}", issue);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp0");
        assert_eq!(format_rupiah(999), "Rp999");
        assert_eq!(format_rupiah(15000), "Rp15.000");
        assert_eq!(format_rupiah(1250000), "Rp1.250.000");
        assert_eq!(format_rupiah(-3000), "-Rp3.000");
    }

    #[test]
    fn test_ratio_label() {
        assert_eq!(ratio_label(0.03, ValueField::Calories), "30.00 kcal/Rp1.000");
    }
}
