//! Hand-rolled fakes for the ledger's collaborators.
//!
//! Each fake records how it was used, so tests can assert that a failed step
//! short-circuits the rest of the pipeline.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    Account, AccountId, AccountStore, Clock, LedgerError, OperationType, OperationTypeId,
    OperationTypeStore, ResultLedger, Transaction, TransactionId, TransactionStore,
};

fn database_error(message: &str) -> LedgerError {
    LedgerError::Database(DbErr::Custom(message.to_string()))
}

pub(crate) struct FakeAccounts {
    account: Option<Account>,
    fail: Option<String>,
    lookups: AtomicUsize,
    inserted: Mutex<Vec<String>>,
}

impl FakeAccounts {
    pub(crate) fn empty() -> Self {
        Self {
            account: None,
            fail: None,
            lookups: AtomicUsize::new(0),
            inserted: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_account(account: Account) -> Self {
        Self {
            account: Some(account),
            ..Self::empty()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail: Some(message.to_string()),
            ..Self::empty()
        }
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn inserted(&self) -> Vec<String> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountStore for FakeAccounts {
    async fn find_by_id(&self, id: AccountId) -> ResultLedger<Option<Account>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail {
            return Err(database_error(message));
        }
        Ok(self.account.clone().filter(|account| account.id == id))
    }

    async fn find_by_document(&self, document: &str) -> ResultLedger<Option<Account>> {
        if let Some(message) = &self.fail {
            return Err(database_error(message));
        }
        Ok(self
            .account
            .clone()
            .filter(|account| account.document == document))
    }

    async fn insert(&self, document: &str) -> ResultLedger<AccountId> {
        let mut inserted = self.inserted.lock().unwrap();
        inserted.push(document.to_string());
        Ok(inserted.len() as AccountId)
    }
}

pub(crate) struct FakeOperationTypes {
    operation_type: Option<OperationType>,
    fail: Option<String>,
    lookups: AtomicUsize,
}

impl FakeOperationTypes {
    pub(crate) fn empty() -> Self {
        Self {
            operation_type: None,
            fail: None,
            lookups: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_entry(operation_type: OperationType) -> Self {
        Self {
            operation_type: Some(operation_type),
            ..Self::empty()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail: Some(message.to_string()),
            ..Self::empty()
        }
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OperationTypeStore for FakeOperationTypes {
    async fn find_by_id(&self, id: OperationTypeId) -> ResultLedger<Option<OperationType>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail {
            return Err(database_error(message));
        }
        Ok(self
            .operation_type
            .clone()
            .filter(|operation_type| operation_type.kind.code() == id))
    }
}

#[derive(Default)]
pub(crate) struct FakeTransactions {
    fail: Option<String>,
    records: Mutex<Vec<Transaction>>,
}

impl FakeTransactions {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail: Some(message.to_string()),
            records: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn recorded(&self) -> Vec<Transaction> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionStore for FakeTransactions {
    async fn insert(&self, transaction: Transaction) -> ResultLedger<TransactionId> {
        if let Some(message) = &self.fail {
            return Err(database_error(message));
        }
        let mut records = self.records.lock().unwrap();
        records.push(transaction);
        Ok(records.len() as TransactionId)
    }
}

pub(crate) struct FixedClock {
    instant: DateTime<Utc>,
    calls: AtomicUsize,
}

impl FixedClock {
    pub(crate) fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.instant
    }
}
