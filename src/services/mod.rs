//! Service layer for divvy
//!
//! Business logic on top of the data model: the allocation engine that
//! turns a loaded family budget plus operator answers into per-user
//! allocation reports.

pub mod allocation;

pub use allocation::{
    allocate, analyze, collect_incomes, partition, recombine, resolve_personal, resolve_shared,
    round_income, AllocationLine, ExpenditureAnalysis, Partition, PersonalBucket, PlannedEntry,
    SharedGroup, UserAllocation, UserLedger,
};
