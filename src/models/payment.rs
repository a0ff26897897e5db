use serde::{Deserialize, Serialize};

/// A single payment applied to a debt. Owned exclusively by the debt it was
/// appended to; pool commits append synthetic payments with a distinguished
/// payer name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub payer_name: String,
    pub amount: f64,
    pub paid_at: i64,
    pub note: Option<String>,
}
