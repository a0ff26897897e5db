use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::claim::Claim;
use crate::models::debt::Debt;
use crate::models::pool::PoolDistribution;

pub const SCHEMA_VERSION: &str = "1.0.0";

/// The whole persisted document. Every operation takes a `Ledger` value and
/// transforms it; callers own the load -> transform -> store cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub debts: Vec<Debt>,
    pub claims: Vec<Claim>,
    #[serde(rename = "poolHistory")]
    pub pool_history: Vec<PoolDistribution>,
    #[serde(rename = "schemaVersion", default)]
    pub schema_version: String,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            debts: Vec::new(),
            claims: Vec::new(),
            pool_history: Vec::new(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

impl Ledger {
    pub fn debt(&self, debt_id: &str) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == debt_id)
    }

    pub(crate) fn debt_mut(&mut self, debt_id: &str) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|d| d.id == debt_id)
    }

    /// Cooperation score per creditor, built from the claims on file.
    ///
    /// When a creditor has filed multiple claims the one with the latest
    /// `created_at` wins; on equal timestamps the later-filed claim wins.
    pub fn cooperation_scores(&self) -> HashMap<String, u8> {
        let mut latest: HashMap<String, (i64, u8)> = HashMap::new();
        for claim in &self.claims {
            match latest.get(&claim.creditor_id) {
                Some((seen_at, _)) if *seen_at > claim.created_at => {}
                _ => {
                    latest.insert(
                        claim.creditor_id.clone(),
                        (claim.created_at, claim.cooperation_score),
                    );
                }
            }
        }
        latest
            .into_iter()
            .map(|(creditor_id, (_, score))| (creditor_id, score))
            .collect()
    }
}
