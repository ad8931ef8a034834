mod common;

use finance_core::{
    core::services::{LedgerService, Overview, SummaryService},
    storage::InMemoryStorage,
};

const USER: &str = "dana";

#[test]
fn vacation_goal_progress_scenario() {
    let (mut service, _, _) = common::setup_test_env();

    service.add_goal(USER, "Vacation", 1000.0).unwrap();
    let ledger = service.add_expense(USER, "Flight", "Vacation", 400.0).unwrap();
    let goal = ledger.goal("Vacation").unwrap();
    assert_eq!(SummaryService::goal_progress(&ledger, goal), 40.0);

    let ledger = service.add_expense(USER, "Hotel", "Vacation", 700.0).unwrap();
    let goal = ledger.goal("Vacation").unwrap();
    assert_eq!(SummaryService::goal_progress(&ledger, goal), 100.0);
    assert_eq!(SummaryService::saved_toward(&ledger, goal), 1100.0);
}

#[test]
fn overview_reflects_every_mutation() {
    let mut service = LedgerService::new(Box::new(InMemoryStorage::new()));
    service.add_budget(USER, "Rent", 1200.0).unwrap();
    service.add_budget(USER, "Food", 400.0).unwrap();
    service.add_expense(USER, "Groceries", "Food", 82.5).unwrap();
    let ledger = service.delete_budget(USER, 0).unwrap();

    assert_eq!(
        SummaryService::overview(&ledger),
        Overview {
            total_budget: 400.0,
            total_expense: 82.5,
        }
    );
}

#[test]
fn expenses_without_a_matching_goal_count_only_in_totals() {
    let mut service = LedgerService::new(Box::new(InMemoryStorage::new()));
    service.add_goal(USER, "Car", 5000.0).unwrap();
    let ledger = service.add_expense(USER, "Cinema", "Fun", 15.0).unwrap();

    let rows = SummaryService::goals_progress(&ledger);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].saved, 0.0);
    assert_eq!(SummaryService::total_expenses(&ledger), 15.0);
}

#[test]
fn users_do_not_see_each_other() {
    let mut service = LedgerService::new(Box::new(InMemoryStorage::new()));
    service.add_budget("alice", "Rent", 1000.0).unwrap();
    service.add_budget("bob", "Rent", 800.0).unwrap();

    assert_eq!(
        SummaryService::total_budgets(&service.ledger("alice").unwrap()),
        1000.0
    );
    assert_eq!(
        SummaryService::total_budgets(&service.ledger("bob").unwrap()),
        800.0
    );
}
