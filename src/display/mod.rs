//! Report formatting for terminal output

pub mod report;

pub use report::{format_amount, render_user_allocation};
