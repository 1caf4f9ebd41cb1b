use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CanteenError, Result};
use crate::models::{Category, Constraints, Policy, RankMode, ValueField};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "canteen.json";

/// Planner settings from a JSON file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub budget: Option<i64>,

    #[serde(default)]
    pub quotas: BTreeMap<Category, i64>,

    /// Cap on the number of items across all categories.
    #[serde(default)]
    pub max_items: Option<i64>,

    #[serde(default)]
    pub value_field: ValueField,

    #[serde(default)]
    pub rank_mode: RankMode,

    #[serde(default)]
    pub require_one_drink: bool,

    #[serde(default)]
    pub fill_remainder: bool,

    /// Catalog file; the built-in menu is used when absent.
    #[serde(default)]
    pub menu: Option<PathBuf>,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub budget: Option<i64>,
    pub quotas: Vec<(Category, i64)>,
    pub max_items: Option<i64>,
    pub value_field: Option<ValueField>,
    pub rank_mode: Option<RankMode>,
    pub require_one_drink: bool,
    pub fill_remainder: bool,
    pub menu: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_PATH`] when it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) if !p.exists() => {
                return Err(CanteenError::InvalidInput(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let data = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&data)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(budget) = overrides.budget {
            self.budget = Some(budget);
        }
        for (category, cap) in overrides.quotas {
            self.quotas.insert(category, cap);
        }
        if let Some(max_items) = overrides.max_items {
            self.max_items = Some(max_items);
        }
        if let Some(value_field) = overrides.value_field {
            self.value_field = value_field;
        }
        if let Some(rank_mode) = overrides.rank_mode {
            self.rank_mode = rank_mode;
        }
        // Flags can only switch a policy on
        self.require_one_drink |= overrides.require_one_drink;
        self.fill_remainder |= overrides.fill_remainder;
        if let Some(menu) = overrides.menu {
            self.menu = Some(menu);
        }
    }

    /// Build the run constraints for a concrete budget.
    pub fn constraints(&self, budget: i64) -> Constraints {
        let mut constraints = Constraints::new(budget)
            .with_value_field(self.value_field)
            .with_rank_mode(self.rank_mode)
            .with_policy(Policy {
                require_one_drink: self.require_one_drink,
                fill_remainder: self.fill_remainder,
            });
        for (category, cap) in &self.quotas {
            constraints = constraints.with_cap(*category, *cap);
        }
        constraints.max_items = self.max_items;
        constraints
    }
}
