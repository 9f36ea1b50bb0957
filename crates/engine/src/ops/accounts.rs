//! Account operations.

use crate::{Account, AccountId, Ledger, LedgerError, ResultLedger};

use super::normalize_document;

impl Ledger {
    /// Register a new account for `document`.
    ///
    /// The document is trimmed before it is stored; an empty or duplicate
    /// document is rejected.
    pub async fn create_account(&self, document: &str) -> ResultLedger<AccountId> {
        let document = normalize_document(document)?;

        if let Some(existing) = self.accounts.find_by_document(&document).await? {
            return Err(LedgerError::ExistingDocument(existing.document));
        }

        self.accounts.insert(&document).await
    }

    /// Fetch an account by id.
    pub async fn account(&self, id: AccountId) -> ResultLedger<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or(LedgerError::AccountNotFound(id))
    }
}
