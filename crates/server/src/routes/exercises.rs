use axum::{extract::Path, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{ExerciseResponse, NewExerciseRequest},
        response_errors::ExerciseError,
    },
    types::Uuid,
};
use tracing::instrument;

use super::Payload;
use crate::{db::DatabaseConnection, service};

#[instrument(skip(conn))]
pub async fn add_exercise(
    conn: DatabaseConnection,
    Path(id): Path<String>,
    Payload(request): Payload<NewExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ServerError<ExerciseError>> {
    // An id that isn't a uuid can't belong to anyone
    let user_id = Uuid::parse(&id).map_err(|_| ExerciseError::UnknownUser)?;

    let exercise = conn
        .run(move |conn| service::add_exercise(conn, &user_id, request))
        .await?;
    Ok(Json(exercise))
}
