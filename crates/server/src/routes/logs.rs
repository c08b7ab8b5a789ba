use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogParams, LogResponse},
        response_errors::LogError,
    },
    types::Uuid,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, service};

#[instrument(skip(conn))]
pub async fn get_log(
    conn: DatabaseConnection,
    Path(id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<LogResponse>, ServerError<LogError>> {
    let user_id = Uuid::parse(&id).map_err(|_| LogError::UnknownUser)?;

    let log = conn
        .run(move |conn| service::get_log(conn, &user_id, &params))
        .await?;
    Ok(Json(log))
}
