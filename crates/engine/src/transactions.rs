//! Transaction primitives.
//!
//! A [`NewTransaction`] is what a caller submits: the amount may carry any
//! sign and the operation date is advisory at best. A [`Transaction`] is the
//! fully normalized record handed to storage: sign fixed by the operation
//! type, timestamp fixed by the ledger clock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{AccountId, OperationTypeId};

pub type TransactionId = i64;

/// A transaction as requested by a caller.
///
/// Only the magnitude of `amount` survives recording; `operation_date` is
/// discarded and replaced with the ledger clock's instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub operation_type_id: OperationTypeId,
    pub amount: Decimal,
    pub operation_date: Option<DateTime<Utc>>,
}

/// A normalized transaction record, ready to persist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub account_id: AccountId,
    pub operation_type_id: OperationTypeId,
    pub amount: Decimal,
    pub operation_date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub account_id: i64,
    pub operation_type_id: i16,
    pub amount: Decimal,
    pub operation_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
    #[sea_orm(
        belongs_to = "super::operation_types::Entity",
        from = "Column::OperationTypeId",
        to = "super::operation_types::Column::Id"
    )]
    OperationTypes,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::operation_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperationTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::NotSet,
            account_id: ActiveValue::Set(tx.account_id),
            operation_type_id: ActiveValue::Set(tx.operation_type_id),
            amount: ActiveValue::Set(tx.amount),
            operation_date: ActiveValue::Set(tx.operation_date),
        }
    }
}
