//! Divvy - Terminal-based family budget allocation calculator
//!
//! This library provides the core functionality for the divvy CLI. It loads
//! a declarative YAML budget (per-user planned expenditures, tagged by
//! priority, type, shareability, and permanence), interactively collects
//! remaining-funds and income figures from the operator, and computes how
//! each user's income is allocated across their expenditures in priority
//! order, reporting the leftover amount.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (priorities, expenditures, budgets)
//! - `storage`: YAML budget document loader
//! - `services`: The allocation engine
//! - `cli`: Operator prompting (console and scripted)
//! - `display`: Report formatting

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{DivvyError, DivvyResult};
