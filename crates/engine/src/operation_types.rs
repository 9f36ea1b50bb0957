//! Operation type catalog.
//!
//! Operation types are read-only reference data: a closed set of codes, each
//! classifying a transaction's nature. The sign of a recorded amount is fully
//! determined by the operation type's [`SignClass`], resolved here at lookup
//! time so the catalog stays the single source of truth for the sign rule.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, ResultLedger};

pub type OperationTypeId = i16;

/// Whether the recorded amount is stored negative (debit) or non-negative
/// (credit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignClass {
    Debit,
    Credit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    NormalPurchase,
    InstallmentPurchase,
    Withdrawal,
    Payment,
}

impl OperationKind {
    pub fn code(self) -> OperationTypeId {
        match self {
            Self::NormalPurchase => 1,
            Self::InstallmentPurchase => 2,
            Self::Withdrawal => 3,
            Self::Payment => 4,
        }
    }

    pub fn sign_class(self) -> SignClass {
        match self {
            Self::NormalPurchase | Self::InstallmentPurchase | Self::Withdrawal => SignClass::Debit,
            Self::Payment => SignClass::Credit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NormalPurchase => "Normal Purchase",
            Self::InstallmentPurchase => "Purchase with Installments",
            Self::Withdrawal => "Withdrawal",
            Self::Payment => "Payment",
        }
    }
}

impl TryFrom<OperationTypeId> for OperationKind {
    type Error = LedgerError;

    fn try_from(code: OperationTypeId) -> ResultLedger<Self> {
        match code {
            1 => Ok(Self::NormalPurchase),
            2 => Ok(Self::InstallmentPurchase),
            3 => Ok(Self::Withdrawal),
            4 => Ok(Self::Payment),
            other => Err(LedgerError::OperationTypeNotFound(other)),
        }
    }
}

/// A catalog entry, as seen by the ledger after lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationType {
    pub kind: OperationKind,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "operation_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for OperationType {
    type Error = LedgerError;

    fn try_from(model: Model) -> ResultLedger<Self> {
        Ok(Self {
            kind: OperationKind::try_from(model.id)?,
            description: model.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_kinds_store_negative_amounts() {
        for kind in [
            OperationKind::NormalPurchase,
            OperationKind::InstallmentPurchase,
            OperationKind::Withdrawal,
        ] {
            assert_eq!(kind.sign_class(), SignClass::Debit);
        }
    }

    #[test]
    fn payment_stores_non_negative_amounts() {
        assert_eq!(OperationKind::Payment.sign_class(), SignClass::Credit);
    }

    #[test]
    fn codes_round_trip_through_the_catalog() {
        for kind in [
            OperationKind::NormalPurchase,
            OperationKind::InstallmentPurchase,
            OperationKind::Withdrawal,
            OperationKind::Payment,
        ] {
            assert_eq!(OperationKind::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_code_is_reported_as_missing() {
        assert_eq!(
            OperationKind::try_from(9).unwrap_err(),
            LedgerError::OperationTypeNotFound(9)
        );
    }
}
