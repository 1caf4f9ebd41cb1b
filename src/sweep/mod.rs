pub mod evaluation;
pub mod output;
pub mod search;

pub use evaluation::{evaluate_budget, summarize, RunResult, StrategySummary};
pub use output::{print_summaries, print_topk, write_csv, write_summary_json};
pub use search::{run_sweep, SweepConfig, SweepResults};
