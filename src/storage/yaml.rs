//! YAML budget document loader
//!
//! Parses a document shaped as:
//!
//! ```yaml
//! users_budgets:
//!   alice:
//!     name: alice
//!     expenditures:
//!       - priority: 0
//!         type: food
//!         sharable: true
//!         planned_budget: "120.00"
//!         permanent: false
//! ```
//!
//! The root mapping is walked by hand so that user order in the document is
//! preserved; each expenditure entry goes through the serde model so the
//! priority/type/decimal coercion rules apply uniformly.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{DivvyError, DivvyResult};
use crate::models::{ExpenditureItem, FamilyBudget, UserBudget};

/// Load a family budget from a YAML file
pub fn load_from_file(path: &Path) -> DivvyResult<FamilyBudget> {
    let text = fs::read_to_string(path)
        .map_err(|e| DivvyError::load(format!("Failed to read {}: {}", path.display(), e)))?;

    load_from_str(&text)
}

/// Load a family budget from YAML text
pub fn load_from_str(text: &str) -> DivvyResult<FamilyBudget> {
    let document: Value = serde_yaml::from_str(text)
        .map_err(|e| DivvyError::load(format!("Failed to parse budget document: {}", e)))?;

    let users = document
        .get("users_budgets")
        .and_then(Value::as_mapping)
        .ok_or_else(|| DivvyError::load("Budget document has no 'users_budgets' mapping"))?;

    let mut budget = FamilyBudget::default();

    for (key, user_value) in users {
        let user_key = key.as_str().unwrap_or("<non-string key>");

        let name = user_value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DivvyError::load(format!("User entry '{}' has no 'name' field", user_key))
            })?;

        if budget.user(name).is_some() {
            return Err(DivvyError::load(format!("Duplicate user name: {}", name)));
        }

        let entries = user_value
            .get("expenditures")
            .and_then(Value::as_sequence)
            .ok_or_else(|| {
                DivvyError::load(format!("User '{}' has no 'expenditures' sequence", name))
            })?;

        let mut expenditures = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let item: ExpenditureItem = serde_yaml::from_value(entry.clone()).map_err(|e| {
                DivvyError::load(format!(
                    "Invalid expenditure #{} for user '{}': {}",
                    index + 1,
                    name,
                    e
                ))
            })?;

            item.validate().map_err(|e| {
                DivvyError::load(format!(
                    "Invalid expenditure #{} for user '{}': {}",
                    index + 1,
                    name,
                    e
                ))
            })?;

            expenditures.push(item);
        }

        budget.users_budgets.push(UserBudget::new(name, expenditures));
    }

    Ok(budget)
}
