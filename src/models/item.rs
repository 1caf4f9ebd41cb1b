use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{CanteenError, Result};

/// Minimum similarity for an unknown category name to earn a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Menu category. Quotas are counted per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "makanan")]
    Food,
    #[serde(alias = "minuman")]
    Drink,
    #[serde(alias = "jajanan")]
    Snack,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Drink, Category::Snack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Drink => "drink",
            Category::Snack => "snack",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Food => &["food", "makanan"],
            Category::Drink => &["drink", "minuman"],
            Category::Snack => &["snack", "jajanan"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CanteenError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase();

        for category in Category::ALL {
            if category.aliases().contains(&input.as_str()) {
                return Ok(category);
            }
        }

        // Suggest the closest alias, reported by canonical name
        let needle = input.as_str();
        let suggestion = Category::ALL
            .iter()
            .flat_map(|c| c.aliases().iter().map(move |a| (*c, jaro_winkler(a, needle))))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c.as_str().to_string());

        Err(CanteenError::UnknownCategory {
            input: s.trim().to_string(),
            suggestion,
        })
    }
}

/// A priced menu entry.
///
/// Price is in the smallest currency unit (Rupiah). It is kept signed so a
/// bad file value reaches [`CatalogItem::validate`] instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: i64,
    pub calories: u32,
    #[serde(default)]
    pub score: u32,
    pub category: Category,
}

impl CatalogItem {
    pub fn new(name: &str, price: i64, calories: u32, score: u32, category: Category) -> Self {
        Self {
            name: name.to_string(),
            price,
            calories,
            score,
            category,
        }
    }

    /// Reject non-positive prices before any ratio is computed.
    pub fn validate(&self) -> Result<()> {
        if self.price <= 0 {
            return Err(CanteenError::InvalidItem {
                name: self.name.clone(),
                price: self.price,
            });
        }
        Ok(())
    }
}

/// Which value field drives the efficiency ratio and the value totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueField {
    #[default]
    Calories,
    Score,
}

impl ValueField {
    pub const ALL: [ValueField; 2] = [ValueField::Calories, ValueField::Score];

    #[inline]
    pub fn value_of(&self, item: &CatalogItem) -> u64 {
        match self {
            ValueField::Calories => u64::from(item.calories),
            ValueField::Score => u64::from(item.score),
        }
    }

    /// Value per unit of price. Callers must have validated the price.
    #[inline]
    pub fn ratio_of(&self, item: &CatalogItem) -> f64 {
        self.value_of(item) as f64 / item.price as f64
    }

    /// Unit label used when rendering ratios.
    pub fn unit(&self) -> &'static str {
        match self {
            ValueField::Calories => "kcal",
            ValueField::Score => "pts",
        }
    }
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueField::Calories => f.write_str("calories"),
            ValueField::Score => f.write_str("score"),
        }
    }
}

/// How items are ordered before the greedy pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Value per unit of price.
    #[default]
    Ratio,
    /// Raw value, price ignored.
    Raw,
}

impl RankMode {
    pub const ALL: [RankMode; 2] = [RankMode::Ratio, RankMode::Raw];

    /// Sort key of `item` under this mode.
    pub fn key_of(&self, field: ValueField, item: &CatalogItem) -> f64 {
        match self {
            RankMode::Ratio => field.ratio_of(item),
            RankMode::Raw => field.value_of(item) as f64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankMode::Ratio => "ratio",
            RankMode::Raw => "raw",
        }
    }
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueField {
    type Err = CanteenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "kcal" | "kalori" => Ok(ValueField::Calories),
            "score" | "value" | "nilai" => Ok(ValueField::Score),
            other => Err(CanteenError::InvalidInput(format!(
                "unknown value field '{}', expected 'calories' or 'score'",
                other
            ))),
        }
    }
}
