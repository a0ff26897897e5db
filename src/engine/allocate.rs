use std::collections::HashMap;

use crate::engine::weight::{cooperation_score_or_default, debt_weight};
use crate::models::debt::Debt;
use crate::models::pool::AllocationLine;
use crate::money::round_cents;

/// Split a pooled amount across open debts in proportion to their weights.
///
/// Each share is cent-rounded and clamped to the debt's outstanding balance.
/// The rounding remainder, if positive, is absorbed by the line with the
/// largest share (first such line on ties) without pushing it past its own
/// balance; a negative remainder is left as-is. Zero-amount lines are
/// dropped, and output order follows the filtered input order.
///
/// Returns an empty allocation when no debt is open or the total weight is
/// zero; callers surface that as nothing-to-distribute. This is a pure
/// preview; committing it is a separate step.
pub fn allocate(
    debts: &[Debt],
    scores: &HashMap<String, u8>,
    pool_amount: f64,
) -> Vec<AllocationLine> {
    let weighted: Vec<(&Debt, f64)> = debts
        .iter()
        .filter(|d| d.is_open())
        .map(|d| {
            let score = cooperation_score_or_default(scores, &d.creditor_id);
            (d, debt_weight(d, score))
        })
        .collect();

    let total_weight: f64 = weighted.iter().map(|(_, weight)| weight).sum();
    if weighted.is_empty() || total_weight <= 0.0 {
        return Vec::new();
    }

    let mut shares: Vec<f64> = weighted
        .iter()
        .map(|(debt, weight)| round_cents(pool_amount * weight / total_weight).min(debt.balance))
        .collect();

    let allocated: f64 = shares.iter().sum();
    let remainder = round_cents(pool_amount - allocated);
    if remainder > 0.0 {
        let mut largest = 0;
        for (index, share) in shares.iter().enumerate() {
            if *share > shares[largest] {
                largest = index;
            }
        }
        let ceiling = weighted[largest].0.balance;
        shares[largest] = round_cents((shares[largest] + remainder).min(ceiling));
    }

    weighted
        .into_iter()
        .zip(shares)
        .filter(|(_, share)| *share > 0.0)
        .map(|((debt, weight), share)| AllocationLine {
            debt_id: debt.id.clone(),
            debtor_id: debt.debtor_id.clone(),
            creditor_id: debt.creditor_id.clone(),
            amount: share,
            weight,
        })
        .collect()
}
