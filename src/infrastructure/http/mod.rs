pub mod request_id;

use axum::{
    body::Body,
    http::{header::InvalidHeaderValue, HeaderValue, Method, Request},
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use crate::controllers::{
    favorites::FavoritesController, feed::FeedController, health,
    preferences::PreferencesController, search::SearchController, trending::TrendingController,
};
use crate::domain::content::ContentService;
use crate::infrastructure::config::Config;

/// Everything the router hands to handlers as state
pub struct AppControllers {
    pub content_service: Arc<ContentService>,
    pub feed: Arc<FeedController>,
    pub trending: Arc<TrendingController>,
    pub preferences: Arc<PreferencesController>,
    pub favorites: Arc<FavoritesController>,
    pub search: Arc<SearchController>,
}

/// Request span tagged with the id minted by `request_id_middleware`
fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    Ok(match allowed_origin {
        Some(origin) => layer.allow_origin(origin.parse::<HeaderValue>()?),
        None => layer.allow_origin(Any),
    })
}

/// Build the application router with all routes and middleware
pub fn build_router(
    controllers: AppControllers,
    allowed_origin: Option<&str>,
) -> Result<Router, InvalidHeaderValue> {
    let feed_routes = Router::new()
        .route("/api/feed", get(FeedController::get_feed))
        .with_state(controllers.feed);

    let trending_routes = Router::new()
        .route("/api/trending", get(TrendingController::get_trending))
        .with_state(controllers.trending);

    let preferences_routes = Router::new()
        .route(
            "/api/preferences",
            get(PreferencesController::get_preferences)
                .put(PreferencesController::replace_preferences),
        )
        .route(
            "/api/preferences/validate",
            post(PreferencesController::validate_preferences),
        )
        .route("/api/preferences/stats", get(PreferencesController::get_stats))
        .route(
            "/api/preferences/reset",
            post(PreferencesController::reset_preferences),
        )
        .route(
            "/api/preferences/categories/:categoryId",
            axum::routing::patch(PreferencesController::update_category),
        )
        .with_state(controllers.preferences);

    let favorites_routes = Router::new()
        .route("/api/favorites", get(FavoritesController::list_favorites))
        .route(
            "/api/favorites/:contentId",
            put(FavoritesController::add_favorite).delete(FavoritesController::remove_favorite),
        )
        .route(
            "/api/content/:contentId/read",
            post(FavoritesController::mark_read),
        )
        .with_state(controllers.favorites);

    let search_routes = Router::new()
        .route("/api/search", get(SearchController::search))
        .with_state(controllers.search);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(controllers.content_service)
        .merge(feed_routes)
        .merge(trending_routes)
        .merge(preferences_routes)
        .merge(favorites_routes)
        .merge(search_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(cors_layer(allowed_origin)?),
        );

    Ok(app)
}

/// Bind the configured address and serve until the process stops
pub async fn start_http_server(
    config: &Config,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
