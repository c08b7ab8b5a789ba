use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{ErrorKind, ResponseError, ServerError};

pub const UNKNOWN_USER_MESSAGE: &str = "Unknown user ID";

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr, $variant_kind:ident)]
            #[error($($msg:tt)*)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($($msg)*)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl ResponseError for $name {
            fn code(&self) -> StatusCode {
                match self {
                    $( $name::$variant { .. } => $variant_code, )*
                }
            }

            fn kind(&self) -> ErrorKind {
                match self {
                    $( $name::$variant { .. } => ErrorKind::$variant_kind, )*
                }
            }
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = inner.code();
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(ExerciseError {
    #[code(StatusCode::NOT_FOUND, UserNotFound)]
    #[error("Unknown user ID")]
    UnknownUser,
    #[code(StatusCode::BAD_REQUEST, ValidationDefect)]
    #[error("Invalid duration: {value:?}")]
    InvalidDuration { value: String },
    #[code(StatusCode::BAD_REQUEST, ValidationDefect)]
    #[error("Invalid date: {value:?}")]
    InvalidDate { value: String },
});

response_error!(LogError {
    #[code(StatusCode::NOT_FOUND, UserNotFound)]
    #[error("Unknown user ID")]
    UnknownUser,
    #[code(StatusCode::BAD_REQUEST, ValidationDefect)]
    #[error("Invalid date: {value:?}")]
    InvalidDate { value: String },
});

response_error!(BodyError {
    #[code(StatusCode::UNSUPPORTED_MEDIA_TYPE, ValidationDefect)]
    #[error("Unsupported content type: {content_type:?}")]
    UnsupportedContentType { content_type: Option<String> },
    #[code(StatusCode::BAD_REQUEST, ValidationDefect)]
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
});
