//! Transaction recording.
//!
//! This is the core of the ledger: one linear validate-normalize-persist
//! pipeline. Each step must succeed before the next runs, and the first
//! failure is returned as-is.

use crate::{
    Ledger, LedgerError, NewTransaction, ResultLedger, SignClass, Transaction, TransactionId,
};

impl Ledger {
    /// Record a transaction against an account.
    ///
    /// The caller's amount sign is discarded: debit operation types store
    /// `-abs(amount)`, credit ones `+abs(amount)`. The operation date is
    /// stamped from the ledger clock, never taken from the request.
    pub async fn record(&self, new_transaction: NewTransaction) -> ResultLedger<TransactionId> {
        let account = self
            .accounts
            .find_by_id(new_transaction.account_id)
            .await?
            .ok_or(LedgerError::AccountNotFound(new_transaction.account_id))?;

        let operation_type = self
            .operation_types
            .find_by_id(new_transaction.operation_type_id)
            .await?
            .ok_or(LedgerError::OperationTypeNotFound(
                new_transaction.operation_type_id,
            ))?;

        let amount = match operation_type.kind.sign_class() {
            SignClass::Debit => -new_transaction.amount.abs(),
            SignClass::Credit => new_transaction.amount.abs(),
        };

        self.transactions
            .insert(Transaction {
                account_id: account.id,
                operation_type_id: operation_type.kind.code(),
                amount,
                operation_date: self.clock.now(),
            })
            .await
    }
}
