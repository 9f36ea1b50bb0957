use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use accounts::{Account, AccountId};
pub use clock::{Clock, SystemClock};
pub use error::LedgerError;
pub use operation_types::{OperationKind, OperationType, OperationTypeId, SignClass};
pub use store::{
    AccountStore, OperationTypeStore, SqlAccountStore, SqlOperationTypeStore, SqlTransactionStore,
    TransactionStore,
};
pub use transactions::{NewTransaction, Transaction, TransactionId};

pub mod accounts;
mod clock;
mod error;
mod ops;
pub mod operation_types;
mod store;
pub mod transactions;

type ResultLedger<T> = Result<T, LedgerError>;

/// The transaction-recording core.
///
/// `Ledger` is stateless: it owns nothing but handles to its collaborators,
/// so one instance can serve any number of concurrent callers.
#[derive(Clone)]
pub struct Ledger {
    accounts: Arc<dyn AccountStore>,
    operation_types: Arc<dyn OperationTypeStore>,
    transactions: Arc<dyn TransactionStore>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }
}

/// The builder for `Ledger`.
///
/// `database` wires the sea-orm stores; individual collaborators can be
/// replaced afterwards, which is how tests inject fakes and a fixed clock.
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
    accounts: Option<Arc<dyn AccountStore>>,
    operation_types: Option<Arc<dyn OperationTypeStore>>,
    transactions: Option<Arc<dyn TransactionStore>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    pub fn accounts(mut self, accounts: Arc<dyn AccountStore>) -> LedgerBuilder {
        self.accounts = Some(accounts);
        self
    }

    pub fn operation_types(mut self, operation_types: Arc<dyn OperationTypeStore>) -> LedgerBuilder {
        self.operation_types = Some(operation_types);
        self
    }

    pub fn transactions(mut self, transactions: Arc<dyn TransactionStore>) -> LedgerBuilder {
        self.transactions = Some(transactions);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> LedgerBuilder {
        self.clock = Some(clock);
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        let accounts = self
            .accounts
            .unwrap_or_else(|| Arc::new(SqlAccountStore::new(self.database.clone())));
        let operation_types = self
            .operation_types
            .unwrap_or_else(|| Arc::new(SqlOperationTypeStore::new(self.database.clone())));
        let transactions = self
            .transactions
            .unwrap_or_else(|| Arc::new(SqlTransactionStore::new(self.database.clone())));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ledger {
            accounts,
            operation_types,
            transactions,
            clock,
        }
    }
}
