use std::{error::Error, fmt};

use http::StatusCode;
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    axum::{
        response::{IntoResponse, Response},
        Json,
    },
    tracing::{error, warn},
};

/// Machine readable category of an error returned by the api
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    UserNotFound,
    ValidationDefect,
    StorageFailure,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorKind,
    pub message: String,
}

/// Implemented by the route specific error enums (see `response_error!`)
pub trait ResponseError: Error {
    fn code(&self) -> StatusCode;
    fn kind(&self) -> ErrorKind;
}

/// Error type for routes that have no route specific errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl Error for Nothing {}

impl ResponseError for Nothing {
    fn code(&self) -> StatusCode {
        match *self {}
    }

    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

pub enum ServerError<T> {
    /// A route specific error
    Inner { code: StatusCode, inner: T },
    /// Anything else. Storage, pool and runtime errors end up here
    Other { message: String },
    WithContext { context: String, inner: Box<Self> },
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

impl<T> ServerError<T> {
    pub fn context<S: Into<String>>(self, context: S) -> Self {
        Self::WithContext {
            context: context.into(),
            inner: Box::new(self),
        }
    }

    /// Strips any context off the error
    pub fn root(&self) -> &Self {
        match self {
            Self::WithContext { inner, .. } => inner.root(),
            other => other,
        }
    }
}

pub trait ResultContext<R, T> {
    /// Add helpful context to errors
    fn context<S: Into<String>>(self, context: S) -> Result<R, ServerError<T>>;
    /// Same as `context` but the message is only built for errors
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<R, ServerError<T>>;
}

impl<R, T> ResultContext<R, T> for Result<R, ServerError<T>> {
    fn context<S: Into<String>>(self, context: S) -> Result<R, ServerError<T>> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<R, ServerError<T>> {
        self.map_err(|e| e.context(context()))
    }
}

impl<T: ResponseError> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self.root() {
            Self::Inner { code, .. } => *code,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::Inner { inner, .. } => inner.kind(),
            _ => ErrorKind::StorageFailure,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let message = match self.root() {
            Self::Inner { inner, .. } => inner.to_string(),
            _ => "Something went wrong".to_string(),
        };
        ErrorEnvelope {
            error: self.kind(),
            message,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner { inner, .. } => write!(f, "{inner}"),
            Self::Other { message } => write!(f, "{message}"),
            Self::WithContext { context, inner } => write!(f, "{context}: {inner}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner { code, inner } => write!(f, "ServerError::Inner {code}: {inner:?}"),
            Self::Other { message } => write!(f, "ServerError::Other: {message}"),
            Self::WithContext { context, inner } => write!(f, "{context}: {inner:?}"),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> Error for ServerError<T> {}

#[cfg(feature = "backend")]
impl<T> From<rusqlite::Error> for ServerError<T> {
    fn from(err: rusqlite::Error) -> Self {
        other_error!("rusqlite: {err:?}")
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::InteractError> for ServerError<T> {
    fn from(err: deadpool_sqlite::InteractError) -> Self {
        other_error!("deadpool_sqlite::interact: {err:?}")
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::PoolError> for ServerError<T> {
    fn from(err: deadpool_sqlite::PoolError) -> Self {
        other_error!("deadpool_sqlite::pool: {err:?}")
    }
}

// Render ServerError into a response. The envelope is also stashed in the
// response extensions so layers can re-render it
#[cfg(feature = "backend")]
impl<T: ResponseError> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = self.code();
        if code.is_server_error() {
            error!("{self:?}");
        } else {
            warn!("{self}");
        }

        let envelope = self.envelope();
        let mut response = (code, Json(envelope.clone())).into_response();
        response.extensions_mut().insert(envelope);
        response
    }
}

#[cfg(test)]
mod test {
    use http::StatusCode;

    use super::{ErrorEnvelope, ErrorKind, Nothing, ResultContext, ServerError};

    #[test]
    fn test_other_error_is_storage_failure() {
        let err: ServerError<Nothing> = other_error!("disk on fire: {}", 42).context("User::create");
        assert_eq!(err.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), ErrorKind::StorageFailure);
        assert_eq!(err.to_string(), "User::create: disk on fire: 42");
        // Internal details stay in the logs
        assert_eq!(err.envelope().message, "Something went wrong");
    }

    #[test]
    fn test_result_context() {
        let ok: Result<u8, ServerError<Nothing>> = Ok(1);
        assert_eq!(ok.with_context(|| -> String { unreachable!() }).unwrap(), 1);

        let err: Result<u8, ServerError<Nothing>> = Err(other_error!("locked"));
        let err = err.context("Exercise::create").context("add_exercise").unwrap_err();
        assert_eq!(err.to_string(), "add_exercise: Exercise::create: locked");
        assert_eq!(err.code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_envelope_serialization() {
        let envelope = ErrorEnvelope {
            error: ErrorKind::UserNotFound,
            message: "Unknown user ID".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({ "error": "UserNotFound", "message": "Unknown user ID" })
        );
    }
}
