use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{render_error_format, AppState};

mod body;
pub use body::*;

mod users;
pub use users::*;

mod exercises;
pub use exercises::*;

mod logs;
pub use logs::*;

/// The whole app: the json api, the landing page and its static files
pub fn router(state: AppState) -> Router {
    let assets_dir = state.args.assets_dir.clone();

    Router::new()
        .route(Object::Users.path(), post(create_user).get(list_users))
        .route(Object::UserExercises.path(), post(add_exercise))
        .route(Object::UserLogs.path(), get(get_log))
        .route_service("/", ServeFile::new(assets_dir.join("views/index.html")))
        .nest_service("/public", ServeDir::new(assets_dir.join("public")))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_error_format,
        ))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
