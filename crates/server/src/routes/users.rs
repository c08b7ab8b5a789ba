use axum::Json;
use shared::{
    api::{
        error::{Nothing, ServerError},
        payloads::CreateUserRequest,
    },
    model::User,
};
use tracing::instrument;

use super::Payload;
use crate::{db::DatabaseConnection, service};

#[instrument(skip(conn))]
pub async fn create_user(
    conn: DatabaseConnection,
    Payload(request): Payload<CreateUserRequest>,
) -> Result<Json<User>, ServerError<Nothing>> {
    let user = conn
        .run(move |conn| service::create_user(conn, request.username))
        .await?;
    Ok(Json(user))
}

#[instrument(skip(conn))]
pub async fn list_users(conn: DatabaseConnection) -> Result<Json<Vec<User>>, ServerError<Nothing>> {
    let users = conn.run(|conn| service::list_users(conn)).await?;
    Ok(Json(users))
}
