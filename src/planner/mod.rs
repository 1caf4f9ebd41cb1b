pub mod allocation;
pub mod analysis;
pub mod constants;
pub mod ranking;

pub use allocation::{allocate, plan};
pub use analysis::{audit, explain_top, Audit, Explanation};
pub use constants::*;
pub use ranking::{rank, rerank, RankedItem};
