//! Ledger operations, grouped by resource.

mod accounts;
mod transactions;

#[cfg(test)]
pub(crate) mod tests_support;

use crate::ResultLedger;

fn normalize_document(value: &str) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::LedgerError::InvalidDocument(
            "document must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
