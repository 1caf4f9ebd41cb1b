pub mod export;
pub mod input;
pub mod prompts;
pub mod render;

pub use export::{result_to_json, trace_to_csv};
pub use input::{parse_amount, parse_quota};
pub use prompts::{collect_user_constraints, prompt_budget, prompt_cap, prompt_yes_no};
pub use render::{
    display_audit, display_catalog, display_explanations, display_result, display_trace,
    format_rupiah,
};
