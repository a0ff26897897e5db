use serde::{Deserialize, Serialize};

use crate::models::payment::Payment;

/// One debt owed by a debtor to a creditor.
///
/// Invariant: `balance = amount - sum(payment amounts)`, floored at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub debtor_id: String,
    pub creditor_id: String,
    pub amount: f64,
    pub balance: f64,
    pub interest_rate: f64, // annual, percent units
    pub note: String,
    pub created_at: i64,
    pub payments: Vec<Payment>,
}

impl Debt {
    pub fn is_open(&self) -> bool {
        self.balance > 0.0
    }
}
