use std::collections::HashMap;

use debtpool::{
    allocate, apply_payment, apply_pool_distribution, debtor_stats, export_ledger, import_ledger,
    load_ledger, prioritize, record_claim, record_debt, save_ledger, Ledger, LedgerError,
    POOL_PAYER_NAME, SCHEMA_VERSION,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Three debts for one debtor, with claims from two of the three creditors.
fn seed_ledger() -> Ledger {
    let mut ledger = Ledger::default();

    record_debt(&mut ledger, "debtor-1", "bank", 1000.0, 9.5, "car loan").expect("record debt");
    record_debt(&mut ledger, "debtor-1", "landlord", 400.0, 0.0, "back rent").expect("record debt");
    record_debt(&mut ledger, "debtor-1", "friend", 50.0, 0.0, "borrowed cash")
        .expect("record debt");

    record_claim(&mut ledger, "landlord", "debtor-1", 400.0, 2, "wants a plan")
        .expect("record claim");
    record_claim(&mut ledger, "friend", "debtor-1", 50.0, 10, "no rush").expect("record claim");

    ledger
}

#[test]
fn prioritization_contract_orders_by_rate_balance_and_cooperation() {
    init_logging();
    let ledger = seed_ledger();
    let scores = ledger.cooperation_scores();

    let ordered = prioritize(&ledger.debts, &scores);

    let creditors: Vec<&str> = ordered.iter().map(|d| d.creditor_id.as_str()).collect();
    // Highest rate first; at equal zero rates the smaller balance wins.
    assert_eq!(creditors, vec!["bank", "friend", "landlord"]);
}

#[test]
fn equal_rate_equal_balance_falls_to_cooperation_score() {
    init_logging();
    let mut ledger = Ledger::default();
    record_debt(&mut ledger, "debtor-1", "hostile", 100.0, 10.0, "").expect("record debt");
    record_debt(&mut ledger, "debtor-1", "friendly", 100.0, 10.0, "").expect("record debt");
    record_claim(&mut ledger, "hostile", "debtor-1", 100.0, 1, "").expect("record claim");
    record_claim(&mut ledger, "friendly", "debtor-1", 100.0, 9, "").expect("record claim");

    let ordered = prioritize(&ledger.debts, &ledger.cooperation_scores());
    assert_eq!(ordered[0].creditor_id, "friendly");
}

#[test]
fn allocation_preview_then_commit_keeps_balances_consistent() {
    init_logging();
    let mut ledger = seed_ledger();
    let scores = ledger.cooperation_scores();

    let pool = 300.0;
    let lines = allocate(&ledger.debts, &scores, pool);
    assert!(!lines.is_empty());

    let preview_total: f64 = lines.iter().map(|l| l.amount).sum();
    assert!(debtpool::round_cents(preview_total) <= pool);
    for line in &lines {
        let debt = ledger.debt(&line.debt_id).expect("previewed debt exists");
        assert!(line.amount <= debt.balance);
    }

    let distribution = apply_pool_distribution(&mut ledger, lines.clone(), pool);
    assert_eq!(distribution.total_amount, pool);
    assert_eq!(ledger.pool_history.len(), 1);

    for line in &lines {
        let debt = ledger.debt(&line.debt_id).expect("debt exists");
        // balance = amount - sum(payments), floored at 0.
        let paid: f64 = debt.payments.iter().map(|p| p.amount).sum();
        assert_eq!(debt.balance, debtpool::round_cents((debt.amount - paid).max(0.0)));
        let synthetic = debt.payments.last().expect("synthetic payment");
        assert_eq!(synthetic.payer_name, POOL_PAYER_NAME);
    }
}

#[test]
fn stale_preview_lines_are_skipped_at_commit() {
    init_logging();
    let mut ledger = seed_ledger();
    let scores = ledger.cooperation_scores();
    let lines = allocate(&ledger.debts, &scores, 100.0);

    // Settle the friend debt between preview and commit.
    let friend_debt_id = ledger
        .debts
        .iter()
        .find(|d| d.creditor_id == "friend")
        .expect("friend debt")
        .id
        .clone();
    apply_payment(&mut ledger, &friend_debt_id, 50.0, "debtor-1", None).expect("settle");

    let payments_before = ledger.debt(&friend_debt_id).unwrap().payments.len();
    apply_pool_distribution(&mut ledger, lines, 100.0);

    let friend_debt = ledger.debt(&friend_debt_id).expect("debt exists");
    assert_eq!(friend_debt.balance, 0.0);
    assert_eq!(friend_debt.payments.len(), payments_before);
    // The submitted record is still kept for audit.
    assert_eq!(ledger.pool_history.len(), 1);
}

#[test]
fn overpayment_contract_floors_at_zero() {
    init_logging();
    let mut ledger = Ledger::default();
    let debt = record_debt(&mut ledger, "debtor-1", "bank", 25.0, 1.0, "").expect("record debt");

    apply_payment(&mut ledger, &debt.id, 500.0, "benefactor", None).expect("apply payment");
    assert_eq!(ledger.debt(&debt.id).unwrap().balance, 0.0);

    // A settled debt never shows up in prioritization again.
    assert!(prioritize(&ledger.debts, &HashMap::new()).is_empty());
}

#[test]
fn export_import_and_disk_round_trip_reproduce_the_ledger() {
    init_logging();
    let mut ledger = seed_ledger();
    let scores = ledger.cooperation_scores();
    let lines = allocate(&ledger.debts, &scores, 120.0);
    apply_pool_distribution(&mut ledger, lines, 120.0);

    let restored = import_ledger(&export_ledger(&ledger)).expect("import");
    assert_eq!(restored.debts.len(), ledger.debts.len());
    assert_eq!(restored.claims.len(), ledger.claims.len());
    assert_eq!(restored.pool_history.len(), 1);
    assert_eq!(restored.schema_version, SCHEMA_VERSION);
    for (restored_debt, original_debt) in restored.debts.iter().zip(&ledger.debts) {
        assert_eq!(restored_debt.id, original_debt.id);
        assert_eq!(restored_debt.balance, original_debt.balance);
        assert_eq!(restored_debt.payments.len(), original_debt.payments.len());
    }

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ledger.json");
    save_ledger(&path, &ledger).expect("save");
    let from_disk = load_ledger(&path).expect("load");
    assert_eq!(from_disk.debts.len(), ledger.debts.len());
    assert_eq!(from_disk.pool_history.len(), 1);
}

#[test]
fn rejected_import_leaves_caller_state_untouched() {
    init_logging();
    let ledger = seed_ledger();

    let err = import_ledger(r#"{ "claims": [], "poolHistory": [] }"#).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidDocument { .. }));
    assert!(err.to_string().contains("debts"));

    // The previous ledger value is still intact and usable.
    assert_eq!(ledger.debts.len(), 3);
    assert!(!prioritize(&ledger.debts, &ledger.cooperation_scores()).is_empty());
}

#[test]
fn statistics_track_payments_across_operations() {
    init_logging();
    let mut ledger = seed_ledger();
    let debt_id = ledger.debts[0].id.clone();

    apply_payment(&mut ledger, &debt_id, 100.0, "debtor-1", None).expect("apply payment");
    let lines = allocate(&ledger.debts, &ledger.cooperation_scores(), 50.0);
    apply_pool_distribution(&mut ledger, lines, 50.0);

    let stats = debtor_stats(&ledger.debts);
    assert_eq!(stats.total_debt, 1450.0);
    assert_eq!(stats.total_paid, 150.0);
    assert_eq!(stats.total_outstanding, 1300.0);
    assert_eq!(stats.open_debt_count, 3);
}
