use rusqlite::Connection;
use shared::{
    api::{
        error::ServerError,
        payloads::{ExerciseResponse, NewExerciseRequest, NumberOrString},
        response_errors::ExerciseError,
    },
    model::{Exercise, User},
    types::{ExerciseDate, Uuid},
};
use tracing::{debug, instrument};

/// Adds an exercise to a user's log. A missing or empty date means today
#[instrument(skip(conn))]
pub fn add_exercise(
    conn: &mut Connection,
    user_id: &Uuid,
    request: NewExerciseRequest,
) -> Result<ExerciseResponse, ServerError<ExerciseError>> {
    let user = User::fetch_by_id(conn, user_id)?.ok_or(ExerciseError::UnknownUser)?;

    let date = ExerciseDate::parse_optional(request.date.as_deref())
        .map_err(|e| ExerciseError::InvalidDate { value: e.value })?
        .unwrap_or_else(ExerciseDate::today);

    let duration = request
        .duration
        .as_ref()
        .and_then(NumberOrString::to_integer)
        .ok_or_else(|| ExerciseError::InvalidDuration {
            value: request.duration.as_ref().map(NumberOrString::raw).unwrap_or_default(),
        })?;

    let exercise = Exercise::create(
        conn,
        Exercise::new(user.id, request.description, duration, date),
    )?;
    debug!(exercise_id = %exercise.id, user_id = %user.id, "Added exercise");

    Ok(ExerciseResponse {
        id: user.id,
        username: user.username,
        date: exercise.date,
        duration: exercise.duration,
        description: exercise.description,
    })
}
