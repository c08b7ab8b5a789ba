use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use deadpool_sqlite::{Object, Pool};
use rusqlite::Connection;
use shared::api::error::{Nothing, ResultContext, ServerError};

/// A pooled connection checked out for the duration of one request
#[derive(Debug)]
pub struct DatabaseConnection(pub Object);

impl DatabaseConnection {
    /// Runs `f` against the connection on the pool's blocking thread. A
    /// panicked or aborted interaction comes back as a storage error
    pub async fn run<F, R, T>(self, f: F) -> Result<R, ServerError<T>>
    where
        F: FnOnce(&mut Connection) -> Result<R, ServerError<T>> + Send + 'static,
        R: Send + 'static,
        T: Send + 'static,
    {
        self.0
            .interact(f)
            .await
            .map_err(ServerError::<T>::from)
            .context("DatabaseConnection::run")?
    }
}

impl From<Object> for DatabaseConnection {
    fn from(conn: Object) -> Self {
        DatabaseConnection(conn)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DatabaseConnection
where
    S: Send + Sync,
    Pool: FromRef<S>,
{
    type Rejection = ServerError<Nothing>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = Pool::from_ref(state);
        let conn = pool.get().await?;
        Ok(conn.into())
    }
}
