use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[cfg(feature = "backend")]
use {
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Alias, Expr, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl User {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

#[cfg(feature = "backend")]
impl User {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    /// All users in the order they were created
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn create(conn: &mut Connection, new_user: User) -> Result<User, rusqlite::Error> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(user)
    }
}
