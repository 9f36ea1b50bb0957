//! Transactions API endpoints

use api_types::transaction::{TransactionCreated, TransactionNew};
use axum::{Json, extract::State};
use chrono::Utc;
use engine::NewTransaction;

use crate::{ServerError, server::ServerState};

/// Handle requests for recording a new transaction.
///
/// The amount sign and the operation date of the payload are advisory: the
/// ledger normalizes both before persisting.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<Json<TransactionCreated>, ServerError> {
    let transaction_id = state
        .ledger
        .record(NewTransaction {
            account_id: payload.account_id,
            operation_type_id: payload.operation_type_id,
            amount: payload.amount,
            operation_date: payload.operation_date.map(|date| date.with_timezone(&Utc)),
        })
        .await?;

    Ok(Json(TransactionCreated { transaction_id }))
}
