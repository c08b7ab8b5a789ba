use serde::{Deserialize, Serialize};

use crate::types::{ExerciseDate, Uuid};

#[cfg(feature = "backend")]
use {
    crate::model::ExerciseIden,
    rusqlite::Row,
    sea_query::{Alias, Expr, Order, Query, SelectStatement},
};

/// Used when a log request has no usable limit
pub const DEFAULT_LOG_LIMIT: u64 = 500;

/// Largest limit sqlite can bind
pub const MAX_LOG_LIMIT: u64 = i64::MAX as u64;

/// One line of a user's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[cfg(feature = "backend")]
impl LogEntry {
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
        })
    }
}

/// Filter over one user's exercises. Both date bounds are inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct LogQuery {
    pub user_id: Uuid,
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: u64,
}

impl LogQuery {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: DEFAULT_LOG_LIMIT,
        }
    }

    pub fn from_date(mut self, from: Option<ExerciseDate>) -> Self {
        self.from = from;
        self
    }

    pub fn to_date(mut self, to: Option<ExerciseDate>) -> Self {
        self.to = to;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Turns the `limit` query parameter into a row count. Only the leading
    /// integer counts (`2.5` and `2abc` are 2). Missing, non numeric and zero
    /// all fall back to the default, negative values count from the other
    /// side (`-3` is 3). Capped at `MAX_LOG_LIMIT`
    pub fn parse_limit(value: Option<&str>) -> u64 {
        let Some(value) = value.map(str::trim_start) else {
            return DEFAULT_LOG_LIMIT;
        };
        let unsigned = value
            .strip_prefix('-')
            .or_else(|| value.strip_prefix('+'))
            .unwrap_or(value);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..end];

        if digits.is_empty() {
            return DEFAULT_LOG_LIMIT;
        }
        match digits.parse::<u64>() {
            Ok(0) => DEFAULT_LOG_LIMIT,
            Ok(n) => n.min(MAX_LOG_LIMIT),
            // Only digits, so the only failure is overflow
            Err(_) => MAX_LOG_LIMIT,
        }
    }

    #[cfg(feature = "backend")]
    pub fn select(&self) -> SelectStatement {
        let mut select = Query::select();
        select
            .columns([ExerciseIden::Description, ExerciseIden::Duration, ExerciseIden::Date])
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::UserId).eq(self.user_id));

        if let Some(from) = self.from {
            select.and_where(Expr::col(ExerciseIden::Day).gte(from.naive()));
        }
        if let Some(to) = self.to {
            select.and_where(Expr::col(ExerciseIden::Day).lte(to.naive()));
        }

        select.order_by(Alias::new("rowid"), Order::Asc).limit(self.limit);
        select
    }
}

#[cfg(test)]
mod test {
    use super::{LogQuery, DEFAULT_LOG_LIMIT, MAX_LOG_LIMIT};

    #[test]
    fn test_parse_limit() {
        assert_eq!(LogQuery::parse_limit(None), DEFAULT_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("")), DEFAULT_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("ten")), DEFAULT_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("0")), DEFAULT_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("1")), 1);
        assert_eq!(LogQuery::parse_limit(Some(" 20 ")), 20);
        assert_eq!(LogQuery::parse_limit(Some("-3")), 3);
        assert_eq!(LogQuery::parse_limit(Some("10000")), 10000);
        assert_eq!(LogQuery::parse_limit(Some("-")), DEFAULT_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("abc2")), DEFAULT_LOG_LIMIT);
    }

    #[test]
    fn test_parse_limit_uses_leading_integer() {
        assert_eq!(LogQuery::parse_limit(Some("2.5")), 2);
        assert_eq!(LogQuery::parse_limit(Some("2abc")), 2);
        assert_eq!(LogQuery::parse_limit(Some("+4")), 4);
        assert_eq!(LogQuery::parse_limit(Some("-2.9")), 2);
        assert_eq!(LogQuery::parse_limit(Some("0.5")), DEFAULT_LOG_LIMIT);
    }

    #[test]
    fn test_parse_limit_is_capped() {
        assert_eq!(LogQuery::parse_limit(Some("-9223372036854775808")), MAX_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("9223372036854775807")), MAX_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("18446744073709551615")), MAX_LOG_LIMIT);
        assert_eq!(LogQuery::parse_limit(Some("99999999999999999999999")), MAX_LOG_LIMIT);
    }

    #[cfg(feature = "backend")]
    #[test]
    fn test_select_only_adds_supplied_bounds() {
        use chrono::NaiveDate;
        use sea_query::SqliteQueryBuilder;

        use crate::types::{ExerciseDate, Uuid};

        let user_id = Uuid::new_v4();
        let unbounded = LogQuery::new(user_id).select().to_string(SqliteQueryBuilder);
        assert!(!unbounded.contains("\"day\""), "{unbounded}");
        assert!(unbounded.contains("LIMIT 500"), "{unbounded}");
        assert!(unbounded.contains(&user_id.to_string()), "{unbounded}");

        let from = ExerciseDate::from(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        let bounded = LogQuery::new(user_id)
            .from_date(Some(from))
            .limit(1)
            .select()
            .to_string(SqliteQueryBuilder);
        assert!(bounded.contains("\"day\" >= '2023-01-02'"), "{bounded}");
        assert!(!bounded.contains("\"day\" <="), "{bounded}");
        assert!(bounded.contains("LIMIT 1"), "{bounded}");
    }
}
