use finance_core::{
    core::services::{LedgerService, SummaryService},
    init,
    storage::InMemoryStorage,
};

#[test]
fn ledger_service_smoke() {
    init();

    let mut service = LedgerService::new(Box::new(InMemoryStorage::new()));
    service.add_budget("smoke", "Rent", 1000.0).unwrap();
    service.add_goal("smoke", "Rainy day", 200.0).unwrap();
    let ledger = service
        .add_expense("smoke", "Transfer", "Rainy day", 50.0)
        .unwrap();

    let progress = SummaryService::goals_progress(&ledger);
    assert_eq!(progress[0].progress, 25.0);
    assert!(ledger.expenses[0].date <= chrono::Utc::now());
}
