pub mod claim;
pub mod debt;
pub mod ledger;
pub mod payment;
pub mod pool;
