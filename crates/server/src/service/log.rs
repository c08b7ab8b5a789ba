use rusqlite::Connection;
use shared::{
    api::{
        error::ServerError,
        payloads::{LogParams, LogResponse},
        response_errors::LogError,
    },
    model::{Exercise, LogQuery, User},
    types::{ExerciseDate, InvalidDate, Uuid},
};
use tracing::{debug, instrument};

fn parse_bound(value: Option<&str>) -> Result<Option<ExerciseDate>, LogError> {
    ExerciseDate::parse_optional(value).map_err(|InvalidDate { value }| LogError::InvalidDate { value })
}

/// A user's exercises, oldest entry first, filtered to the inclusive
/// `from`..=`to` date range and cut off at `limit` entries
#[instrument(skip(conn))]
pub fn get_log(
    conn: &Connection,
    user_id: &Uuid,
    params: &LogParams,
) -> Result<LogResponse, ServerError<LogError>> {
    let user = User::fetch_by_id(conn, user_id)?.ok_or(LogError::UnknownUser)?;

    let query = LogQuery::new(user.id)
        .from_date(parse_bound(params.from.as_deref())?)
        .to_date(parse_bound(params.to.as_deref())?)
        .limit(LogQuery::parse_limit(params.limit.as_deref()));

    let log = Exercise::fetch_log(conn, &query)?;
    debug!(?query, count = log.len(), "Fetched log");

    Ok(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    })
}
