//! Account API endpoints

use api_types::account::{Account, AccountNew};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

/// Handle requests for registering a new account.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AccountNew>,
) -> Result<Json<Account>, ServerError> {
    let account_id = state.ledger.create_account(&payload.document_number).await?;

    Ok(Json(Account {
        account_id,
        document_number: payload.document_number.trim().to_string(),
    }))
}

/// Handle requests for fetching an account by id.
pub async fn get(
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Account>, ServerError> {
    let account = state.ledger.account(account_id).await?;

    Ok(Json(Account {
        account_id: account.id,
        document_number: account.document,
    }))
}
