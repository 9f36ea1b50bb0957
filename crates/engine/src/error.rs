//! The module contains the error the ledger can throw.
//!
//! The errors are:
//!
//! - [`AccountNotFound`] thrown when the referenced account does not exist.
//! - [`OperationTypeNotFound`] thrown when the operation type code is not in
//!   the catalog.
//! - [`Database`] wraps any error surfaced by the storage layer, unchanged.
//!
//!  [`AccountNotFound`]: LedgerError::AccountNotFound
//!  [`OperationTypeNotFound`]: LedgerError::OperationTypeNotFound
//!  [`Database`]: LedgerError::Database
use sea_orm::DbErr;
use thiserror::Error;

use crate::{AccountId, OperationTypeId};

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("account \"{0}\" not found")]
    AccountNotFound(AccountId),
    #[error("operation type \"{0}\" not found")]
    OperationTypeNotFound(OperationTypeId),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("document \"{0}\" already registered")]
    ExistingDocument(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountNotFound(a), Self::AccountNotFound(b)) => a == b,
            (Self::OperationTypeNotFound(a), Self::OperationTypeNotFound(b)) => a == b,
            (Self::InvalidDocument(a), Self::InvalidDocument(b)) => a == b,
            (Self::ExistingDocument(a), Self::ExistingDocument(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
