pub mod allocation;
pub mod constraints;
pub mod item;

pub use allocation::{AllocationResult, Outcome, Phase, SelectionStep};
pub use constraints::{Constraints, Policy};
pub use item::{CatalogItem, Category, RankMode, ValueField};
