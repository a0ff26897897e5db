use serde::{Deserialize, Serialize};

/// A creditor's view of a debt, including how cooperative the creditor is
/// about repayment terms. Claims are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub creditor_id: String,
    pub debtor_id: String,
    pub amount: f64,
    pub note: String,
    pub cooperation_score: u8, // 0-10
    pub created_at: i64,
}
