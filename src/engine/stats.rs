use serde::{Deserialize, Serialize};

use crate::models::debt::Debt;
use crate::money::round_cents;

/// Aggregate view over a set of debts, ready for display by a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorStats {
    pub total_debt: f64,
    pub total_outstanding: f64,
    pub open_debt_count: usize,
    pub average_interest_rate: f64,
    pub total_paid: f64,
}

/// Summarize a debtor's position. Monetary fields are cent-rounded; the
/// average interest rate covers open debts only (0 when none are open).
pub fn debtor_stats(debts: &[Debt]) -> DebtorStats {
    let total_debt: f64 = debts.iter().map(|d| d.amount).sum();
    let total_outstanding: f64 = debts.iter().map(|d| d.balance).sum();
    let total_paid: f64 = debts
        .iter()
        .flat_map(|d| d.payments.iter())
        .map(|p| p.amount)
        .sum();

    let open: Vec<&Debt> = debts.iter().filter(|d| d.is_open()).collect();
    let average_interest_rate = if open.is_empty() {
        0.0
    } else {
        open.iter().map(|d| d.interest_rate).sum::<f64>() / open.len() as f64
    };

    DebtorStats {
        total_debt: round_cents(total_debt),
        total_outstanding: round_cents(total_outstanding),
        open_debt_count: open.len(),
        average_interest_rate: round_cents(average_interest_rate),
        total_paid: round_cents(total_paid),
    }
}
