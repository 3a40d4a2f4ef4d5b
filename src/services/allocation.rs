//! The allocation engine
//!
//! Takes a loaded [`FamilyBudget`] through four phases:
//!
//! 1. **Partition**: split every (user, expenditure) pair into sharable
//!    groups (keyed by type, across users) and per-user personal buckets.
//! 2. **Resolution**: ask the operator for remaining funds. A sharable
//!    group is asked once and the answer is split across its members in
//!    proportion to their planned budgets; personal expenditures are asked
//!    one by one. Permanent expenditures are never asked and resolve to
//!    zero.
//! 3. **Recombination**: fold each user's share of the pooled expenditures
//!    back into their personal list.
//! 4. **Allocation**: per user, walk the combined list in priority order
//!    and refill each expenditure from a shrinking income pool.
//!
//! Every phase produces fully-populated records; remaining funds are
//! computed once at construction, never patched in afterwards.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::cli::OperatorIo;
use crate::error::{DivvyError, DivvyResult};
use crate::models::{ExpenditureItem, ExpenditureType, FamilyBudget};

/// A (user, expenditure) pair produced by partitioning, before its
/// remaining funds are known
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedEntry {
    pub user_name: String,
    pub item: ExpenditureItem,
}

/// A fully resolved expenditure: the pair plus its remaining funds
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenditureAnalysis {
    pub user_name: String,
    pub item: ExpenditureItem,
    pub remaining_funds: Decimal,
}

impl ExpenditureAnalysis {
    fn resolved(entry: PlannedEntry, remaining_funds: Decimal) -> Self {
        Self {
            user_name: entry.user_name,
            item: entry.item,
            remaining_funds,
        }
    }
}

/// All sharable expenditures of one type, across users
#[derive(Debug, Clone, PartialEq)]
pub struct SharedGroup {
    pub expenditure_type: ExpenditureType,
    pub members: Vec<PlannedEntry>,
}

/// One user's non-sharable expenditures, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalBucket {
    pub user_name: String,
    pub entries: Vec<PlannedEntry>,
}

/// Partition output: sharable groups in first-seen type order, personal
/// buckets in budget order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub shared: Vec<SharedGroup>,
    pub personal: Vec<PersonalBucket>,
}

/// One user's combined expenditure list after recombination
#[derive(Debug, Clone, PartialEq)]
pub struct UserLedger {
    pub user_name: String,
    pub entries: Vec<ExpenditureAnalysis>,
}

/// One report line: how much income was allocated to one expenditure
///
/// The refill is exact; rounding happens at display time.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationLine {
    pub expenditure_type: ExpenditureType,
    pub refill: Decimal,
}

/// The allocation result for one user
#[derive(Debug, Clone, PartialEq)]
pub struct UserAllocation {
    pub user_name: String,
    pub lines: Vec<AllocationLine>,
    pub leftover: Decimal,
}

/// Round an income figure for display: two decimal places, toward
/// positive infinity
///
/// Idempotent on already-two-decimal values. The result always carries
/// exactly two fractional digits so it renders as e.g. `50.00`.
pub fn round_income(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity);
    rounded.rescale(2);
    rounded
}

/// Split every (user, expenditure) pair into sharable groups and personal
/// buckets
///
/// Pure transform. Sharable groups collect items of the same type across
/// all users, in first-seen order; personal buckets preserve each user's
/// declaration order. A user with only sharable expenditures gets no
/// bucket here; their ledger appears during recombination.
pub fn partition(budget: &FamilyBudget) -> Partition {
    let mut result = Partition::default();

    for user in &budget.users_budgets {
        for item in &user.expenditures {
            let entry = PlannedEntry {
                user_name: user.name.clone(),
                item: item.clone(),
            };

            if item.sharable {
                let group_type = item.expenditure_type;
                match result
                    .shared
                    .iter_mut()
                    .find(|g| g.expenditure_type == group_type)
                {
                    Some(group) => group.members.push(entry),
                    None => result.shared.push(SharedGroup {
                        expenditure_type: group_type,
                        members: vec![entry],
                    }),
                }
            } else {
                match result
                    .personal
                    .iter_mut()
                    .find(|b| b.user_name == user.name)
                {
                    Some(bucket) => bucket.entries.push(entry),
                    None => result.personal.push(PersonalBucket {
                        user_name: user.name.clone(),
                        entries: vec![entry],
                    }),
                }
            }
        }
    }

    result
}

/// Resolve remaining funds for the sharable groups
///
/// Each group is asked once, labeled by type; the reported total is
/// attributed to the members in proportion to their planned budgets. The
/// first member's `permanent` flag decides whether the whole group is
/// asked at all; a group it marks permanent resolves to zero for every
/// member without a prompt.
pub fn resolve_shared(
    io: &mut dyn OperatorIo,
    groups: Vec<SharedGroup>,
) -> DivvyResult<Vec<ExpenditureAnalysis>> {
    io.heading("Request for remaining funds of sharable expenditures");

    let mut resolved = Vec::new();

    for group in groups {
        let representative_permanent = group
            .members
            .first()
            .map(|m| m.item.permanent)
            .unwrap_or(true);

        if representative_permanent {
            for member in group.members {
                resolved.push(ExpenditureAnalysis::resolved(member, Decimal::ZERO));
            }
            continue;
        }

        let reported_total = io.prompt_decimal(group.expenditure_type.as_str())?;

        let total_planned: Decimal = group.members.iter().map(|m| m.item.planned_budget).sum();

        if total_planned.is_zero() {
            return Err(DivvyError::DivisionByZero {
                expenditure_type: group.expenditure_type,
            });
        }

        for member in group.members {
            let share = reported_total * (member.item.planned_budget / total_planned);
            resolved.push(ExpenditureAnalysis::resolved(member, share));
        }
    }

    Ok(resolved)
}

/// Resolve remaining funds for each user's personal expenditures
///
/// One prompt per non-permanent expenditure, labeled by type, in
/// declaration order. Permanent expenditures resolve to zero without a
/// prompt.
pub fn resolve_personal(
    io: &mut dyn OperatorIo,
    buckets: Vec<PersonalBucket>,
) -> DivvyResult<Vec<UserLedger>> {
    let mut ledgers = Vec::with_capacity(buckets.len());

    for bucket in buckets {
        io.heading(&format!(
            "Requesting {} for remaining funds of expenditures",
            bucket.user_name
        ));

        let mut entries = Vec::with_capacity(bucket.entries.len());

        for entry in bucket.entries {
            let remaining_funds = if entry.item.permanent {
                Decimal::ZERO
            } else {
                io.prompt_decimal(entry.item.expenditure_type.as_str())?
            };

            entries.push(ExpenditureAnalysis::resolved(entry, remaining_funds));
        }

        ledgers.push(UserLedger {
            user_name: bucket.user_name,
            entries,
        });
    }

    Ok(ledgers)
}

/// Fold the resolved sharable expenditures back into their owners' ledgers
///
/// Each user's share is appended after their personal expenditures, in
/// group order. A user who had no personal expenditures gets a fresh
/// ledger at the end.
pub fn recombine(
    mut ledgers: Vec<UserLedger>,
    shared: Vec<ExpenditureAnalysis>,
) -> Vec<UserLedger> {
    for analysis in shared {
        match ledgers
            .iter_mut()
            .find(|l| l.user_name == analysis.user_name)
        {
            Some(ledger) => ledger.entries.push(analysis),
            None => ledgers.push(UserLedger {
                user_name: analysis.user_name.clone(),
                entries: vec![analysis],
            }),
        }
    }

    ledgers
}

/// Ask for every user's income for the budgeting period, in budget order
///
/// No validation beyond "is a decimal"; negative incomes are accepted.
pub fn collect_incomes(
    io: &mut dyn OperatorIo,
    budget: &FamilyBudget,
) -> DivvyResult<HashMap<String, Decimal>> {
    io.heading("Requesting Users incomes");

    let mut incomes = HashMap::new();

    for name in budget.user_names() {
        let income = io.prompt_decimal(name)?;
        incomes.insert(name.to_string(), income);
    }

    Ok(incomes)
}

/// Allocate each user's income across their expenditures in priority order
///
/// Per expenditure, the refill is `min(planned - remaining, available)`.
/// When remaining funds already exceed the planned budget the refill goes
/// negative and the surplus returns to the available pool for later
/// expenditures. Priority ties keep their ledger order (stable sort).
pub fn allocate(
    mut ledgers: Vec<UserLedger>,
    incomes: &HashMap<String, Decimal>,
) -> Vec<UserAllocation> {
    let mut allocations = Vec::with_capacity(ledgers.len());

    for ledger in &mut ledgers {
        ledger.entries.sort_by_key(|a| a.item.priority);

        let mut available = incomes
            .get(&ledger.user_name)
            .copied()
            .unwrap_or(Decimal::ZERO);

        let mut lines = Vec::with_capacity(ledger.entries.len());

        for analysis in &ledger.entries {
            let need = analysis.item.planned_budget - analysis.remaining_funds;
            let refill = need.min(available);
            available -= refill;

            lines.push(AllocationLine {
                expenditure_type: analysis.item.expenditure_type,
                refill,
            });
        }

        allocations.push(UserAllocation {
            user_name: ledger.user_name.clone(),
            lines,
            leftover: available,
        });
    }

    allocations
}

/// Run the whole analysis: partition, resolve, recombine, collect incomes,
/// allocate
pub fn analyze(
    budget: &FamilyBudget,
    io: &mut dyn OperatorIo,
) -> DivvyResult<Vec<UserAllocation>> {
    let parts = partition(budget);

    let shared = resolve_shared(io, parts.shared)?;
    let personal = resolve_personal(io, parts.personal)?;
    let ledgers = recombine(personal, shared);

    let incomes = collect_incomes(io, budget)?;

    Ok(allocate(ledgers, &incomes))
}
