//! Allocation report formatting
//!
//! Formatting helpers for the final per-user report. Amounts are exact
//! until they reach this layer; display rounding is two decimal places
//! toward positive infinity so a refill is never under-reported.

use rust_decimal::Decimal;
use std::fmt::Write;

use crate::services::{round_income, UserAllocation};

/// Format an amount for the report: rounded, always two decimals
pub fn format_amount(amount: Decimal) -> String {
    round_income(amount).to_string()
}

/// Render one user's allocation section
///
/// ```text
/// Analyze for alice income:
///     rent: 27.00
///     food: 115.00
///     Left income: 358.00
/// ```
pub fn render_user_allocation(allocation: &UserAllocation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Analyze for {} income:", allocation.user_name);

    for line in &allocation.lines {
        let _ = writeln!(
            out,
            "\t{}: {}",
            line.expenditure_type,
            format_amount(line.refill)
        );
    }

    let _ = writeln!(out, "\tLeft income: {}", format_amount(allocation.leftover));

    out
}
