use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use mime::Mime;
use serde::de::DeserializeOwned;
use shared::api::{error::ServerError, response_errors::BodyError};

/// Request body taken from either a urlencoded form or json, picked by the
/// `Content-Type` header. Anything else is rejected with a 415
#[derive(Debug)]
pub struct Payload<T>(pub T);

enum BodyFormat {
    Json,
    Form,
}

fn body_format(content_type: &str) -> Option<BodyFormat> {
    let parsed: Mime = content_type.parse().ok()?;
    if parsed.type_() != mime::APPLICATION {
        return None;
    }
    if parsed.subtype() == mime::JSON || parsed.suffix() == Some(mime::JSON) {
        Some(BodyFormat::Json)
    } else if parsed.subtype() == mime::WWW_FORM_URLENCODED {
        Some(BodyFormat::Form)
    } else {
        None
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ServerError<BodyError>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        match content_type.as_deref().and_then(body_format) {
            Some(BodyFormat::Json) => Json::<T>::from_request(req, state)
                .await
                .map(|Json(v)| Payload(v))
                .map_err(|e| BodyError::InvalidBody { message: e.body_text() }.into()),
            Some(BodyFormat::Form) => Form::<T>::from_request(req, state)
                .await
                .map(|Form(v)| Payload(v))
                .map_err(|e| BodyError::InvalidBody { message: e.body_text() }.into()),
            None => Err(BodyError::UnsupportedContentType { content_type })?,
        }
    }
}
