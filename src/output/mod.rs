//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_goal_banner, print_solve_result,
};
