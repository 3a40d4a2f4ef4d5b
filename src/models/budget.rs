//! User and family budget aggregates

use super::expenditure::ExpenditureItem;

/// One user's planned expenditures
///
/// Created at load time, read-only thereafter. Expenditure order is the
/// document order and is observable: it decides prompt order and breaks
/// priority ties during allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBudget {
    pub name: String,
    pub expenditures: Vec<ExpenditureItem>,
}

impl UserBudget {
    /// Create a user budget
    pub fn new(name: impl Into<String>, expenditures: Vec<ExpenditureItem>) -> Self {
        Self {
            name: name.into(),
            expenditures,
        }
    }
}

/// The root aggregate: every user's budget, in document order
///
/// User names are unique; the loader rejects duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyBudget {
    pub users_budgets: Vec<UserBudget>,
}

impl FamilyBudget {
    /// Create a family budget from a list of user budgets
    pub fn new(users_budgets: Vec<UserBudget>) -> Self {
        Self { users_budgets }
    }

    /// Look up a user's budget by name
    pub fn user(&self, name: &str) -> Option<&UserBudget> {
        self.users_budgets.iter().find(|u| u.name == name)
    }

    /// User names in document order
    pub fn user_names(&self) -> impl Iterator<Item = &str> {
        self.users_budgets.iter().map(|u| u.name.as_str())
    }
}
