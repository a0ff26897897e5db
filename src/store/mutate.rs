use chrono::Utc;
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::models::claim::Claim;
use crate::models::debt::Debt;
use crate::models::ledger::Ledger;
use crate::models::payment::Payment;
use crate::models::pool::{AllocationLine, PoolDistribution};
use crate::money::round_cents;

/// Payer name attributed to synthetic payments generated by a pool commit.
pub const POOL_PAYER_NAME: &str = "Pool distribution";

const MAX_COOPERATION_SCORE: u8 = 10;

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

fn check_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidAmount { amount });
    }
    Ok(())
}

/// Record a new debt. The outstanding balance starts at the cent-rounded
/// original amount with an empty payment history.
pub fn record_debt(
    ledger: &mut Ledger,
    debtor_id: &str,
    creditor_id: &str,
    amount: f64,
    interest_rate: f64,
    note: &str,
) -> Result<Debt> {
    check_amount(amount)?;
    if !interest_rate.is_finite() || interest_rate < 0.0 {
        return Err(LedgerError::InvalidAmount {
            amount: interest_rate,
        });
    }

    let amount = round_cents(amount);
    let debt = Debt {
        id: generate_id(),
        debtor_id: debtor_id.to_string(),
        creditor_id: creditor_id.to_string(),
        amount,
        balance: amount,
        interest_rate,
        note: note.to_string(),
        created_at: Utc::now().timestamp(),
        payments: Vec::new(),
    };
    ledger.debts.push(debt.clone());
    Ok(debt)
}

/// Record a creditor's claim. Cooperation scores above 10 are clamped down.
pub fn record_claim(
    ledger: &mut Ledger,
    creditor_id: &str,
    debtor_id: &str,
    amount: f64,
    cooperation_score: u8,
    note: &str,
) -> Result<Claim> {
    check_amount(amount)?;

    let claim = Claim {
        id: generate_id(),
        creditor_id: creditor_id.to_string(),
        debtor_id: debtor_id.to_string(),
        amount: round_cents(amount),
        note: note.to_string(),
        cooperation_score: cooperation_score.min(MAX_COOPERATION_SCORE),
        created_at: Utc::now().timestamp(),
    };
    ledger.claims.push(claim.clone());
    Ok(claim)
}

/// Apply a payment to a debt. Overpayment is clamped: the balance never goes
/// negative, and the appended payment record keeps the requested amount.
/// Validation happens before any write, so an error leaves the ledger
/// untouched.
pub fn apply_payment(
    ledger: &mut Ledger,
    debt_id: &str,
    amount: f64,
    payer_name: &str,
    note: Option<String>,
) -> Result<Payment> {
    check_amount(amount)?;
    let debt = ledger.debt_mut(debt_id).ok_or_else(|| LedgerError::NotFound {
        debt_id: debt_id.to_string(),
    })?;

    let payment = Payment {
        id: generate_id(),
        payer_name: payer_name.to_string(),
        amount,
        paid_at: Utc::now().timestamp(),
        note,
    };
    debt.balance = round_cents((debt.balance - amount).max(0.0));
    debt.payments.push(payment.clone());
    Ok(payment)
}

/// Commit a previewed allocation. Lines whose debt has disappeared or been
/// settled since the preview are skipped; the submitted line set and total
/// are still recorded verbatim in the pool history for audit.
pub fn apply_pool_distribution(
    ledger: &mut Ledger,
    lines: Vec<AllocationLine>,
    total_amount: f64,
) -> PoolDistribution {
    let now = Utc::now().timestamp();

    for line in &lines {
        let Some(debt) = ledger.debt_mut(&line.debt_id) else {
            log::warn!("skipping allocation line for unknown debt {}", line.debt_id);
            continue;
        };
        if !debt.is_open() {
            log::warn!("skipping allocation line for settled debt {}", line.debt_id);
            continue;
        }

        debt.balance = round_cents((debt.balance - line.amount).max(0.0));
        debt.payments.push(Payment {
            id: generate_id(),
            payer_name: POOL_PAYER_NAME.to_string(),
            amount: line.amount,
            paid_at: now,
            note: Some(format!(
                "automatic pool distribution (weight {:.2})",
                line.weight
            )),
        });
    }

    let distribution = PoolDistribution {
        id: generate_id(),
        distributed_at: now,
        total_amount,
        lines,
    };
    ledger.pool_history.push(distribution.clone());
    distribution
}

/// Wipe the ledger back to the empty document. This is the only destructive
/// operation; individual records are never deleted.
pub fn clear(ledger: &mut Ledger) {
    *ledger = Ledger::default();
}
