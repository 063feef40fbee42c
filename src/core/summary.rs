//! Pure aggregate computations over point-in-time transaction snapshots.
//!
//! Nothing here mutates or stores state; every function recomputes from the
//! slices it is given plus a `YYYY-MM` month key.

use std::cmp::Ordering;

use crate::domain::Transaction;

/// How many categories the dashboard highlights.
const TOP_CATEGORY_COUNT: usize = 3;

/// Keeps every transaction whose date starts with `month`, preserving order.
pub fn filter_by_month(transactions: &[Transaction], month: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.date.starts_with(month))
        .cloned()
        .collect()
}

/// Sum of amounts; 0 for an empty slice.
pub fn total_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|txn| txn.amount).sum()
}

/// Savings minus expenses; may be negative.
pub fn balance(total_savings: f64, total_expenses: f64) -> f64 {
    total_savings - total_expenses
}

/// Integer percent of savings over (savings + expenses), 0 when there are no
/// expenses. The denominator is deliberately savings + expenses rather than an
/// income figure.
pub fn savings_rate(total_savings: f64, total_expenses: f64) -> i64 {
    if total_expenses > 0.0 {
        (total_savings / (total_expenses + total_savings) * 100.0).round() as i64
    } else {
        0
    }
}

/// Per-category totals in first-seen order. Categories without transactions
/// are absent, not zero.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut breakdown: Vec<(String, f64)> = Vec::new();
    for txn in transactions {
        match breakdown.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => breakdown.push((txn.category.clone(), txn.amount)),
        }
    }
    breakdown
}

/// Breakdown entries sorted by total descending, truncated to the first `n`.
/// The sort is stable, so ties keep the breakdown's first-seen order.
pub fn top_categories(breakdown: &[(String, f64)], n: usize) -> Vec<(String, f64)> {
    let mut sorted = breakdown.to_vec();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    sorted.truncate(n);
    sorted
}

/// One chart row: totals for a single day of the month.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    /// Two-digit day component, e.g. `"05"`.
    pub day: String,
    pub expenses: f64,
    pub savings: f64,
}

/// Groups both slices by the two-digit day component of the date, one row per
/// day that appears in either, sorted ascending by numeric day. Days with no
/// activity are omitted, so the output is sparse over the calendar. Rows whose
/// day component cannot be read are skipped.
pub fn daily_series(expenses: &[Transaction], savings: &[Transaction]) -> Vec<DailyTotals> {
    let mut rows: Vec<DailyTotals> = Vec::new();
    accumulate_days(&mut rows, expenses, true);
    accumulate_days(&mut rows, savings, false);
    rows.sort_by_key(|row| row.day.parse::<u32>().unwrap_or(0));
    rows
}

fn accumulate_days(rows: &mut Vec<DailyTotals>, transactions: &[Transaction], as_expense: bool) {
    for txn in transactions {
        let Some(day) = txn.day_component() else {
            continue;
        };
        let index = match rows.iter().position(|row| row.day == day) {
            Some(existing) => existing,
            None => {
                rows.push(DailyTotals {
                    day: day.to_string(),
                    expenses: 0.0,
                    savings: 0.0,
                });
                rows.len() - 1
            }
        };
        if as_expense {
            rows[index].expenses += txn.amount;
        } else {
            rows[index].savings += txn.amount;
        }
    }
}

/// Newest-first copy of the slice, the order the tracker tabs list in.
pub fn sort_by_date_desc(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Dashboard aggregate for one month: filtered totals, rate, breakdowns, and
/// the chart series, computed in a single pass over the snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub balance: f64,
    pub savings_rate: i64,
    pub expense_breakdown: Vec<(String, f64)>,
    pub top_expense_categories: Vec<(String, f64)>,
    pub daily: Vec<DailyTotals>,
}

impl MonthlySummary {
    pub fn for_month(expenses: &[Transaction], savings: &[Transaction], month: &str) -> Self {
        let month_expenses = filter_by_month(expenses, month);
        let month_savings = filter_by_month(savings, month);
        let total_expenses = total_amount(&month_expenses);
        let total_savings = total_amount(&month_savings);
        let expense_breakdown = category_breakdown(&month_expenses);
        let top_expense_categories = top_categories(&expense_breakdown, TOP_CATEGORY_COUNT);
        Self {
            month: month.to_string(),
            total_expenses,
            total_savings,
            balance: balance(total_savings, total_expenses),
            savings_rate: savings_rate(total_savings, total_expenses),
            expense_breakdown,
            top_expense_categories,
            daily: daily_series(&month_expenses, &month_savings),
        }
    }
}
