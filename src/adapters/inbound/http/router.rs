use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::handlers::{delete_files, get_config, get_file_url, health, upload_files};
use crate::{domain::models::ProviderRegistry, ports::file_provider::FileProvider};

/// Largest accepted upload request body
pub const UPLOAD_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Route prefix of locally stored files; matches the local provider's `<BACKEND_URL>/static`
pub const STATIC_MOUNT: &str = "/static";

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProviderRegistry>,
    pub file_provider: Arc<dyn FileProvider>,
    pub static_dir: Option<PathBuf>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.registry);

    let mut router: Router<AppState> = Router::new()
        .route("/health", get(health))
        .route("/config", get(get_config))
        .route("/uploads", post(upload_files).delete(delete_files))
        .route("/uploads/{key}/url", get(get_file_url));

    if let Some(dir) = &state.static_dir {
        info!(dir = %dir.display(), mount = STATIC_MOUNT, "Serving local uploads");
        router = router.nest_service(STATIC_MOUNT, ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(state)
}

/// Storefront and admin origins from the project configuration
fn cors_layer(registry: &ProviderRegistry) -> CorsLayer {
    let http = &registry.project().http;
    let origins: Vec<HeaderValue> = http
        .store_origins()
        .into_iter()
        .chain(http.admin_origins())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
