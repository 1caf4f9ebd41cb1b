use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CanteenError, Result};
use crate::models::item::{Category, RankMode, ValueField};

/// Optional phases layered around the ranked pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Reserve the cheapest affordable drink before ranking takes over.
    #[serde(default)]
    pub require_one_drink: bool,

    /// After the ranked pass, buy extra units of the cheapest items that still fit.
    #[serde(default)]
    pub fill_remainder: bool,
}

/// Inputs of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub budget: i64,

    /// Per-category cap. A missing key or a `None` cap means unlimited.
    #[serde(default)]
    pub max_per_category: BTreeMap<Category, Option<i64>>,

    /// Cap on the number of selected items across all categories.
    #[serde(default)]
    pub max_items: Option<i64>,

    #[serde(default)]
    pub value_field: ValueField,

    #[serde(default)]
    pub rank_mode: RankMode,

    #[serde(default)]
    pub policy: Policy,
}

impl Constraints {
    pub fn new(budget: i64) -> Self {
        Self {
            budget,
            max_per_category: BTreeMap::new(),
            max_items: None,
            value_field: ValueField::default(),
            rank_mode: RankMode::default(),
            policy: Policy::default(),
        }
    }

    pub fn with_cap(mut self, category: Category, cap: i64) -> Self {
        self.max_per_category.insert(category, Some(cap));
        self
    }

    pub fn with_max_items(mut self, max_items: i64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn with_rank_mode(mut self, rank_mode: RankMode) -> Self {
        self.rank_mode = rank_mode;
        self
    }

    pub fn with_value_field(mut self, value_field: ValueField) -> Self {
        self.value_field = value_field;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured cap for a category, if any.
    pub fn cap(&self, category: Category) -> Option<i64> {
        self.max_per_category.get(&category).copied().flatten()
    }

    /// True when `count` items of `category` already fill its cap.
    pub fn quota_reached(&self, category: Category, count: u32) -> bool {
        self.cap(category)
            .map(|cap| i64::from(count) >= cap)
            .unwrap_or(false)
    }

    /// True when `count` selected items already fill the overall limit.
    pub fn item_limit_reached(&self, count: usize) -> bool {
        self.max_items
            .map(|limit| i64::try_from(count).map_or(true, |count| count >= limit))
            .unwrap_or(false)
    }

    /// Check budget and caps before any allocation starts.
    pub fn validate(&self) -> Result<()> {
        if self.budget <= 0 {
            return Err(CanteenError::InvalidConstraint(format!(
                "budget must be a positive integer, got {}",
                self.budget
            )));
        }

        if let Some(limit) = self.max_items {
            if limit < 0 {
                return Err(CanteenError::InvalidConstraint(format!(
                    "item limit must not be negative, got {}",
                    limit
                )));
            }
        }

        for (category, cap) in &self.max_per_category {
            if let Some(cap) = cap {
                if *cap < 0 {
                    return Err(CanteenError::InvalidConstraint(format!(
                        "{} quota must not be negative, got {}",
                        category, cap
                    )));
                }
            }
        }

        Ok(())
    }
}
