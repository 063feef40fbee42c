use fintrack::core::summary::{
    balance, category_breakdown, daily_series, filter_by_month, savings_rate, top_categories,
    total_amount,
};
use fintrack::core::{validate, MonthlySummary, TransactionDraft, TransactionStore};
use fintrack::domain::TransactionKind;
use fintrack::storage::MemoryStorage;

fn draft(date: &str, amount: &str, category: &str) -> TransactionDraft {
    TransactionDraft {
        date: date.into(),
        amount: amount.into(),
        category: category.into(),
        description: String::new(),
    }
}

#[test]
fn march_dashboard_scenario() {
    let mut store = TransactionStore::load(MemoryStorage::new()).unwrap();

    let expense = validate(
        TransactionKind::Expense,
        &draft("2024-03-05", "40", "Food"),
    )
    .unwrap();
    store.create(expense).unwrap();

    let saving = validate(
        TransactionKind::Saving,
        &draft("2024-03-05", "100", "Retirement"),
    )
    .unwrap();
    store.create(saving).unwrap();

    let month_expenses = filter_by_month(store.expenses(), "2024-03");
    let month_savings = filter_by_month(store.savings(), "2024-03");
    assert_eq!(month_expenses.len(), 1);
    assert_eq!(month_savings.len(), 1);

    let total_expenses = total_amount(&month_expenses);
    let total_savings = total_amount(&month_savings);
    assert_eq!(total_expenses, 40.0);
    assert_eq!(total_savings, 100.0);
    assert_eq!(balance(total_savings, total_expenses), 60.0);
    assert_eq!(savings_rate(total_savings, total_expenses), 71);

    let series = daily_series(&month_expenses, &month_savings);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].day, "05");
    assert_eq!(series[0].expenses, 40.0);
    assert_eq!(series[0].savings, 100.0);
}

#[test]
fn category_breakdown_scenario() {
    let mut store = TransactionStore::load(MemoryStorage::new()).unwrap();
    for (amount, category) in [("10", "Food"), ("15", "Food"), ("5", "Shopping")] {
        let input = validate(
            TransactionKind::Expense,
            &draft("2024-03-12", amount, category),
        )
        .unwrap();
        store.create(input).unwrap();
    }

    let month_expenses = filter_by_month(store.expenses(), "2024-03");
    let breakdown = category_breakdown(&month_expenses);
    assert_eq!(
        breakdown,
        vec![("Food".to_string(), 25.0), ("Shopping".to_string(), 5.0)]
    );

    let top = top_categories(&breakdown, 2);
    assert_eq!(
        top,
        vec![("Food".to_string(), 25.0), ("Shopping".to_string(), 5.0)]
    );
}

#[test]
fn monthly_summary_bundles_the_dashboard_views() {
    let mut store = TransactionStore::load(MemoryStorage::new()).unwrap();
    for (kind, date, amount, category) in [
        (TransactionKind::Expense, "2024-03-05", "40", "Food"),
        (TransactionKind::Expense, "2024-03-18", "12", "Shopping"),
        (TransactionKind::Expense, "2024-04-01", "99", "Housing"),
        (TransactionKind::Saving, "2024-03-05", "100", "Retirement"),
    ] {
        let input = validate(kind, &draft(date, amount, category)).unwrap();
        store.create(input).unwrap();
    }

    let summary = MonthlySummary::for_month(store.expenses(), store.savings(), "2024-03");
    assert_eq!(summary.month, "2024-03");
    assert_eq!(summary.total_expenses, 52.0);
    assert_eq!(summary.total_savings, 100.0);
    assert_eq!(summary.balance, 48.0);
    assert_eq!(summary.savings_rate, 66);
    assert_eq!(summary.expense_breakdown.len(), 2);
    assert_eq!(summary.top_expense_categories[0].0, "Food");
    assert_eq!(summary.daily.len(), 2);
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let errors = validate(TransactionKind::Expense, &draft("", "-3", "Food")).unwrap_err();
    assert!(!errors.is_empty());
    assert_eq!(errors.errors().len(), 2);
}
