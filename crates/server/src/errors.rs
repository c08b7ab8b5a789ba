use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::api::error::{ErrorEnvelope, ErrorKind};

use crate::cli::{Cli, ErrorFormat};

/// Re-renders error responses as plain text when the server runs with
/// `--error-format plain`. Unknown users are reported with a 200
pub async fn render_error_format(
    State(args): State<Arc<Cli>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if args.error_format != ErrorFormat::Plain {
        return response;
    }

    match response.extensions().get::<ErrorEnvelope>().cloned() {
        None => response,
        Some(ErrorEnvelope { error, message }) => {
            let code = match error {
                ErrorKind::UserNotFound => StatusCode::OK,
                _ => response.status(),
            };
            (code, message).into_response()
        },
    }
}
