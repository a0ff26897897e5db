use std::collections::HashMap;

use crate::models::debt::Debt;

/// Neutral prior for creditors that never filed a claim.
pub const DEFAULT_COOPERATION_SCORE: u8 = 5;

/// Look up a creditor's cooperation score, falling back to the explicit
/// neutral default. Both the prioritizer and the allocator go through this.
pub fn cooperation_score_or_default(scores: &HashMap<String, u8>, creditor_id: &str) -> f64 {
    f64::from(
        scores
            .get(creditor_id)
            .copied()
            .unwrap_or(DEFAULT_COOPERATION_SCORE),
    )
}

/// Priority weight of one debt: `rate^2 + 1/balance + score^1.5`.
/// Settled debts weigh exactly 0 and never compete for pool funds.
pub fn debt_weight(debt: &Debt, cooperation_score: f64) -> f64 {
    if debt.balance <= 0.0 {
        return 0.0;
    }

    let rate_term = debt.interest_rate.powi(2);
    let balance_term = 1.0 / debt.balance;
    let cooperation_term = cooperation_score.powf(1.5);

    rate_term + balance_term + cooperation_term
}
