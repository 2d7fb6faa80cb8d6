use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    adapters::{
        controllers::{
            random_data_controller::RandomDataController, upload_controller::UploadController,
        },
        state::AppState,
    },
    domain::config::server::ConfigError,
};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

async fn hello_world() -> &'static str {
    "Hello, world!"
}

fn cors_layer(allowed_origins: Option<&[String]>) -> Result<CorsLayer, ConfigError> {
    let Some(allowed_origins) = allowed_origins else {
        // Allow all origins if not specified
        return Ok(CorsLayer::permissive());
    };

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CORS_ALLOWED_ORIGINS",
                    value: origin.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn build_router(app_state: AppState) -> Result<Router, ConfigError> {
    let cors = cors_layer(app_state.config.cors_allowed_origins.as_deref())?;
    let body_limit = app_state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD);

    let router = Router::new()
        .route("/", get(hello_world))
        .route("/get_random_data", get(RandomDataController::get_random_data))
        .route("/upload_file", post(UploadController::upload_file))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    Ok(router)
}
