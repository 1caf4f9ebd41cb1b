use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::item::{CatalogItem, Category, ValueField};

/// What happened to an item when the allocator reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Accepted,
    SkippedBudget,
    SkippedQuota,
    /// The overall item limit was already filled.
    SkippedLimit,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Accepted => "accepted",
            Outcome::SkippedBudget => "skipped-budget",
            Outcome::SkippedQuota => "skipped-quota",
            Outcome::SkippedLimit => "skipped-limit",
        }
    }
}

/// Which part of the allocation emitted a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Drink reserved ahead of the ranked pass.
    Reserve,
    Ranked,
    /// Extra units bought with leftover budget.
    Fill,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Reserve => "reserve",
            Phase::Ranked => "ranked",
            Phase::Fill => "fill",
        }
    }
}

/// One decision in the allocation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionStep {
    pub item: CatalogItem,

    /// Index of the item in the original catalog.
    pub position: usize,

    pub ratio: f64,
    pub outcome: Outcome,
    pub phase: Phase,

    /// Budget left after this item; only set on acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_budget_after: Option<i64>,
}

impl SelectionStep {
    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }

    /// Why the allocator took this decision.
    pub fn reason(&self) -> String {
        match (self.outcome, self.phase) {
            (Outcome::Accepted, Phase::Reserve) => "cheapest drink reserved first".to_string(),
            (Outcome::Accepted, Phase::Fill) => "cheapest item that fits the leftover".to_string(),
            (Outcome::Accepted, Phase::Ranked) => "highest remaining ratio within budget".to_string(),
            (Outcome::SkippedBudget, _) => "price exceeds remaining budget".to_string(),
            (Outcome::SkippedQuota, _) => format!("{} quota reached", self.item.category),
            (Outcome::SkippedLimit, _) => "item limit reached".to_string(),
        }
    }
}

/// Selection, totals and trace produced by one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub budget: i64,
    pub value_field: ValueField,

    /// Accepted items in acceptance order.
    pub selected: Vec<CatalogItem>,

    pub total_price: i64,
    pub total_value: u64,
    pub totals_per_category: BTreeMap<Category, u32>,
    pub trace: Vec<SelectionStep>,
}

impl AllocationResult {
    pub fn empty(budget: i64, value_field: ValueField) -> Self {
        Self {
            budget,
            value_field,
            selected: Vec::new(),
            total_price: 0,
            total_value: 0,
            totals_per_category: BTreeMap::new(),
            trace: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn remaining_budget(&self) -> i64 {
        self.budget - self.total_price
    }

    /// Share of the budget spent, in percent.
    pub fn utilisation_pct(&self) -> f64 {
        if self.budget > 0 {
            self.total_price as f64 / self.budget as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn count_for(&self, category: Category) -> u32 {
        self.totals_per_category.get(&category).copied().unwrap_or(0)
    }

    pub fn accepted_steps(&self) -> impl Iterator<Item = &SelectionStep> {
        self.trace.iter().filter(|s| s.is_accepted())
    }

    /// Record an accepted item and return the budget left afterwards.
    pub(crate) fn accept(&mut self, item: &CatalogItem) -> i64 {
        self.selected.push(item.clone());
        self.total_price += item.price;
        self.total_value += self.value_field.value_of(item);
        *self.totals_per_category.entry(item.category).or_insert(0) += 1;
        self.remaining_budget()
    }
}
