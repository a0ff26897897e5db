//! Deterministic repayment prioritization and pooled-payment allocation over
//! a debt ledger.
//!
//! The crate exposes:
//! - [`Ledger`]: the full in-memory document (debts, claims, pool history)
//!   that callers load, transform, and store themselves.
//! - [`engine`]: pure computation: the weighting formula, the three-key
//!   prioritizer, the proportional pool allocator, and debtor statistics.
//! - [`store`]: ledger mutation (intake, payments, pool commits, full wipe)
//!   and the JSON interchange codec.

pub mod engine;
pub mod error;
pub mod models;
pub mod money;
pub mod store;

pub use engine::allocate::allocate;
pub use engine::prioritize::prioritize;
pub use engine::stats::{debtor_stats, DebtorStats};
pub use engine::weight::{cooperation_score_or_default, debt_weight, DEFAULT_COOPERATION_SCORE};
pub use error::{LedgerError, Result};
pub use models::claim::Claim;
pub use models::debt::Debt;
pub use models::ledger::{Ledger, SCHEMA_VERSION};
pub use models::payment::Payment;
pub use models::pool::{AllocationLine, PoolDistribution};
pub use money::round_cents;
pub use store::mutate::{
    apply_payment, apply_pool_distribution, clear, record_claim, record_debt, POOL_PAYER_NAME,
};
pub use store::persist::{export_ledger, import_ledger, load_ledger, save_ledger};
