use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod account {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub document_number: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Account {
        pub account_id: i64,
        pub document_number: String,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub account_id: i64,
        pub operation_type_id: i16,
        /// Sign is advisory: the server stores `-abs` for debit operation
        /// types and `+abs` for credit ones.
        pub amount: Decimal,
        /// Ignored; the server stamps its own operation date.
        pub operation_date: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub transaction_id: i64,
    }
}
