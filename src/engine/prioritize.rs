use std::collections::HashMap;

use crate::engine::weight::cooperation_score_or_default;
use crate::models::debt::Debt;

/// Order open debts for repayment: highest interest rate first, then smallest
/// outstanding balance, then most cooperative creditor. Remaining ties keep
/// input order (`sort_by` is guaranteed stable).
///
/// Settled debts are dropped from the output entirely. The input is left
/// untouched.
pub fn prioritize(debts: &[Debt], scores: &HashMap<String, u8>) -> Vec<Debt> {
    let mut open: Vec<Debt> = debts.iter().filter(|d| d.is_open()).cloned().collect();

    open.sort_by(|a, b| {
        b.interest_rate
            .total_cmp(&a.interest_rate)
            .then_with(|| a.balance.total_cmp(&b.balance))
            .then_with(|| {
                let score_a = cooperation_score_or_default(scores, &a.creditor_id);
                let score_b = cooperation_score_or_default(scores, &b.creditor_id);
                score_b.total_cmp(&score_a)
            })
    });

    open
}
