use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{admin, notice, system, AppState};

/// Full router with middleware.
pub fn app(state: AppState, security: &SecurityConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(admin_routes())
        .merge(notice_routes());

    let router = match cors_layer(security) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admins", get(admin::list).post(admin::create).delete(admin::delete))
        .route("/api/admins/login", post(admin::login))
        .route("/api/admins/:id", get(admin::show).patch(admin::update))
        .route("/api/admins/:id/password", put(admin::change_password))
}

fn notice_routes() -> Router<AppState> {
    Router::new()
        .route("/api/notices", get(notice::list).post(notice::create).delete(notice::delete))
        .route("/api/notices/:id", get(notice::show))
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
