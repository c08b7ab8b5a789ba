use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ExerciseDate, Uuid};

#[cfg(feature = "backend")]
use {
    crate::model::{LogEntry, LogQuery},
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{enum_def, Expr, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

/// An exercise entry. `user_id` is not a foreign key, the user is looked up by
/// the caller before an exercise is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    /// Display form, i.e. `Sun Jan 01 2023`
    pub date: String,
    /// Same date as `date`. This is what date range filters compare against
    pub day: NaiveDate,
}

impl Exercise {
    pub fn new<T: Into<String>>(
        user_id: Uuid,
        description: T,
        duration: i64,
        date: ExerciseDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description: description.into(),
            duration,
            date: date.display(),
            day: date.naive(),
        }
    }
}

#[cfg(feature = "backend")]
impl Exercise {
    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Exercise, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
                ExerciseIden::Day,
            ])
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row)?;
        Ok(res)
    }

    pub fn create(conn: &mut Connection, exercise: Exercise) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &exercise.id)?
        };
        tx.commit()?;

        Ok(exercise)
    }

    /// Runs a log query. Entries come back in insertion order
    pub fn fetch_log(conn: &Connection, query: &LogQuery) -> Result<Vec<LogEntry>, rusqlite::Error> {
        let (sql, values) = query.select().build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), LogEntry::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
