use std::collections::BTreeMap;

use dialoguer::{Confirm, Input};

use crate::error::Result;
use crate::interface::input::parse_amount;
use crate::models::Category;

/// Ask for the budget until a positive amount is given.
pub fn prompt_budget(default: Option<i64>) -> Result<i64> {
    loop {
        let mut input = Input::<String>::new()
            .with_prompt("What is your budget (Rp)? e.g. 50.000 or 50000");
        if let Some(budget) = default {
            input = input.default(budget.to_string());
        }
        let raw = input.interact_text()?;

        match parse_amount(&raw) {
            Ok(budget) if budget > 0 => return Ok(budget),
            Ok(_) => println!("Budget must be greater than 0. Try again."),
            Err(e) => println!("{}. Try again.", e),
        }
    }
}

/// Ask for a category cap. Enter means unlimited.
pub fn prompt_cap(category: Category) -> Result<Option<i64>> {
    loop {
        let raw: String = Input::new()
            .with_prompt(format!(
                "How many {} items at most? (Enter for no limit)",
                category
            ))
            .allow_empty(true)
            .interact_text()?;

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        match raw.parse::<i64>() {
            Ok(cap) if cap >= 0 => return Ok(Some(cap)),
            Ok(_) => println!("The count must not be negative. Try again."),
            Err(_) => println!("Enter a whole number or leave it empty."),
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the budget and any category caps not already configured.
pub fn collect_user_constraints(
    default_budget: Option<i64>,
    configured: &BTreeMap<Category, i64>,
) -> Result<(i64, BTreeMap<Category, i64>)> {
    let budget = prompt_budget(default_budget)?;

    let mut caps = configured.clone();
    for category in Category::ALL {
        if caps.contains_key(&category) {
            continue;
        }
        if let Some(cap) = prompt_cap(category)? {
            caps.insert(category, cap);
        }
    }

    Ok((budget, caps))
}
