pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod sweep;

pub use error::{CanteenError, Result};
pub use models::{AllocationResult, CatalogItem, Category, Constraints, SelectionStep};
pub use planner::{allocate, plan, rank};
