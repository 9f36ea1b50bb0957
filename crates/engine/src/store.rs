//! Collaborator contracts consumed by the ledger, plus their sea-orm
//! implementations.
//!
//! The traits are deliberately narrow: one lookup or insert each. The ledger
//! is wired against trait objects so tests can substitute fakes for any of
//! them (see `ops::transactions`).

use async_trait::async_trait;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    Account, AccountId, OperationType, OperationTypeId, ResultLedger, Transaction, TransactionId,
    accounts, operation_types, transactions,
};

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_id(&self, id: AccountId) -> ResultLedger<Option<Account>>;
    async fn find_by_document(&self, document: &str) -> ResultLedger<Option<Account>>;
    async fn insert(&self, document: &str) -> ResultLedger<AccountId>;
}

#[async_trait]
pub trait OperationTypeStore: Send + Sync {
    async fn find_by_id(&self, id: OperationTypeId) -> ResultLedger<Option<OperationType>>;
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, transaction: Transaction) -> ResultLedger<TransactionId>;
}

#[derive(Clone, Debug)]
pub struct SqlAccountStore {
    database: DatabaseConnection,
}

impl SqlAccountStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl AccountStore for SqlAccountStore {
    async fn find_by_id(&self, id: AccountId) -> ResultLedger<Option<Account>> {
        let model = accounts::Entity::find_by_id(id).one(&self.database).await?;
        Ok(model.map(Account::from))
    }

    async fn find_by_document(&self, document: &str) -> ResultLedger<Option<Account>> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Document.eq(document))
            .one(&self.database)
            .await?;
        Ok(model.map(Account::from))
    }

    async fn insert(&self, document: &str) -> ResultLedger<AccountId> {
        let model = accounts::ActiveModel {
            id: ActiveValue::NotSet,
            document: ActiveValue::Set(document.to_string()),
        };
        let inserted = accounts::Entity::insert(model)
            .exec(&self.database)
            .await?;
        Ok(inserted.last_insert_id)
    }
}

#[derive(Clone, Debug)]
pub struct SqlOperationTypeStore {
    database: DatabaseConnection,
}

impl SqlOperationTypeStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl OperationTypeStore for SqlOperationTypeStore {
    async fn find_by_id(&self, id: OperationTypeId) -> ResultLedger<Option<OperationType>> {
        let model = operation_types::Entity::find_by_id(id)
            .one(&self.database)
            .await?;
        // A row with a code outside the closed catalog counts as absent.
        Ok(model.and_then(|model| OperationType::try_from(model).ok()))
    }
}

#[derive(Clone, Debug)]
pub struct SqlTransactionStore {
    database: DatabaseConnection,
}

impl SqlTransactionStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl TransactionStore for SqlTransactionStore {
    async fn insert(&self, transaction: Transaction) -> ResultLedger<TransactionId> {
        let inserted = transactions::Entity::insert(transactions::ActiveModel::from(&transaction))
            .exec(&self.database)
            .await?;
        Ok(inserted.last_insert_id)
    }
}
