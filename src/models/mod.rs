//! Core data models for divvy
//!
//! This module contains the data structures that represent the budgeting
//! domain: expenditure priorities and types, per-user budgets, and the
//! family budget aggregate.

pub mod budget;
pub mod expenditure;
pub mod priority;

pub use budget::{FamilyBudget, UserBudget};
pub use expenditure::{ExpenditureItem, ExpenditureType, ExpenditureValidationError};
pub use priority::Priority;
