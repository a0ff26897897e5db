use serde::{Deserialize, Serialize};

/// One computed cut of a pooled payment, carrying the weight that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationLine {
    pub debt_id: String,
    pub debtor_id: String,
    pub creditor_id: String,
    pub amount: f64,
    pub weight: f64,
}

/// Historical record of one pool distribution. Immutable once created; only a
/// full data wipe removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolDistribution {
    pub id: String,
    pub distributed_at: i64,
    pub total_amount: f64,
    pub lines: Vec<AllocationLine>,
}
