use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{LedgerError, Result};
use crate::models::ledger::{Ledger, SCHEMA_VERSION};

const REQUIRED_COLLECTIONS: [&str; 3] = ["debts", "claims", "poolHistory"];

/// Serialize the full ledger document as pretty-printed JSON.
pub fn export_ledger(ledger: &Ledger) -> String {
    serde_json::to_string_pretty(ledger).unwrap_or_else(|_| "{}".to_string())
}

/// Parse and validate an interchange document.
///
/// A document missing any of the three top-level collections is rejected
/// before any state is replaced. The imported ledger is stamped with the
/// current schema version.
pub fn import_ledger(raw: &str) -> Result<Ledger> {
    let value: Value = serde_json::from_str(raw).map_err(|e| LedgerError::InvalidDocument {
        reason: format!("not valid JSON: {e}"),
    })?;

    for key in REQUIRED_COLLECTIONS {
        if value.get(key).is_none() {
            return Err(LedgerError::InvalidDocument {
                reason: format!("missing collection: {key}"),
            });
        }
    }

    let mut ledger: Ledger =
        serde_json::from_value(value).map_err(|e| LedgerError::InvalidDocument {
            reason: format!("malformed record: {e}"),
        })?;
    ledger.schema_version = SCHEMA_VERSION.to_string();

    log::debug!(
        "imported ledger: {} debts, {} claims, {} distributions",
        ledger.debts.len(),
        ledger.claims.len(),
        ledger.pool_history.len()
    );
    Ok(ledger)
}

/// Load a ledger document from disk. A missing file yields the empty default
/// document; unreadable or malformed content is an error.
pub fn load_ledger(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        return Ok(Ledger::default());
    }
    let raw = fs::read_to_string(path)?;
    import_ledger(&raw)
}

/// Write the ledger document to disk, creating parent directories as needed.
pub fn save_ledger(path: &Path, ledger: &Ledger) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, export_ledger(ledger))?;
    Ok(())
}
