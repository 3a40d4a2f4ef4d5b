//! Expenditure model
//!
//! An expenditure is one planned spending item in a user's budget. The type
//! tag doubles as the display label and as the grouping key for sharable
//! expenditures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::priority::Priority;

/// The closed set of expenditure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenditureType {
    Food,
    Rent,
    Utilities,
    Vacation,
    Entertainment,
    FamilyAssistance,
    Transportation,
    Renovation,
    Beauty,
    SavingsAndGifts,
}

impl ExpenditureType {
    /// The snake_case tag used in budget documents, prompts and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Vacation => "vacation",
            Self::Entertainment => "entertainment",
            Self::FamilyAssistance => "family_assistance",
            Self::Transportation => "transportation",
            Self::Renovation => "renovation",
            Self::Beauty => "beauty",
            Self::SavingsAndGifts => "savings_and_gifts",
        }
    }
}

impl fmt::Display for ExpenditureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One planned spending item in a user's budget
///
/// Immutable once loaded. `sharable` means the expenditure is pooled across
/// all users who declare the same type; `permanent` means its remaining
/// funds are fixed at zero and never prompted for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenditureItem {
    pub priority: Priority,
    #[serde(rename = "type")]
    pub expenditure_type: ExpenditureType,
    pub sharable: bool,
    pub planned_budget: Decimal,
    pub permanent: bool,
}

impl ExpenditureItem {
    /// Validate the item
    pub fn validate(&self) -> Result<(), ExpenditureValidationError> {
        if self.planned_budget.is_sign_negative() && !self.planned_budget.is_zero() {
            return Err(ExpenditureValidationError::NegativePlannedBudget(
                self.planned_budget,
            ));
        }

        Ok(())
    }
}

/// Validation errors for expenditures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenditureValidationError {
    NegativePlannedBudget(Decimal),
}

impl fmt::Display for ExpenditureValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePlannedBudget(amount) => {
                write!(f, "Planned budget cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenditureValidationError {}
