use content_dashboard_backend::controllers::{
    favorites::FavoritesController, feed::FeedController, preferences::PreferencesController,
    search::SearchController, trending::TrendingController,
};
use content_dashboard_backend::domain::content::{ContentService, ContentSources};
use content_dashboard_backend::domain::feed::FeedService;
use content_dashboard_backend::domain::preferences::PreferencesService;
use content_dashboard_backend::domain::shared::SystemClock;
use content_dashboard_backend::domain::trending::{CategoryClassifier, KeywordTable, TrendingService};
use content_dashboard_backend::infrastructure::config::{Config, LogFormat};
use content_dashboard_backend::infrastructure::http::{build_router, start_http_server, AppControllers};
use content_dashboard_backend::infrastructure::repositories::{
    HardcodedContentCatalog, InMemoryInteractionRepository, InMemoryPreferencesRepository,
};
use content_dashboard_backend::infrastructure::sources::{
    build_http_client, NewsApiSource, SocialSource, TmdbSource,
};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Content Dashboard Backend on {}:{}",
        config.host,
        config.port
    );

    // Category keywords
    let keyword_table = match &config.category_keywords_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading category keywords");
            KeywordTable::from_json_file(path)
                .with_context(|| format!("loading category keywords from {}", path))?
        }
        None => KeywordTable::default(),
    };
    let classifier = Arc::new(CategoryClassifier::new(keyword_table));

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Content sources share one HTTP client
    let http_client = build_http_client(config.request_timeout())?;
    let sources = ContentSources {
        news: Arc::new(NewsApiSource::new(
            http_client.clone(),
            &config.news_api_base_url,
            &config.news_api_key,
        )),
        movies: Arc::new(TmdbSource::new(
            http_client.clone(),
            &config.tmdb_api_base_url,
            &config.tmdb_api_key,
        )),
        social: Arc::new(SocialSource::new(
            http_client,
            config.social_api_base_url.as_deref(),
        )),
    };
    for (name, configured) in sources.status() {
        if configured {
            tracing::info!(source = name, "Content source configured");
        } else {
            tracing::warn!(source = name, "Content source not configured, it will be skipped");
        }
    }

    // 2. Repositories
    tracing::info!("Instantiating repositories...");
    let interactions = Arc::new(InMemoryInteractionRepository::new());
    let preferences_repo = Arc::new(InMemoryPreferencesRepository::default());
    let catalog = Arc::new(HardcodedContentCatalog::new());
    let clock = Arc::new(SystemClock);

    // 3. Services
    tracing::info!("Instantiating services...");
    let content_service = Arc::new(ContentService::new(
        sources,
        interactions,
        config.source_cache_ttl(),
    ));
    let feed_service = Arc::new(FeedService::new(
        content_service.clone(),
        preferences_repo.clone(),
        catalog.clone(),
        classifier.clone(),
        clock.clone(),
        config.items_per_page,
    ));
    let trending_service = Arc::new(TrendingService::new(
        feed_service.clone(),
        catalog,
        classifier,
        clock.clone(),
    ));
    let preferences_service = Arc::new(PreferencesService::new(preferences_repo));

    // 4. Controllers
    tracing::info!("Instantiating controllers...");
    let controllers = AppControllers {
        content_service: content_service.clone(),
        feed: Arc::new(FeedController::new(feed_service)),
        trending: Arc::new(TrendingController::new(trending_service)),
        preferences: Arc::new(PreferencesController::new(preferences_service)),
        favorites: Arc::new(FavoritesController::new(content_service.clone())),
        search: Arc::new(SearchController::new(content_service, clock)),
    };

    let app = build_router(controllers, config.cors_allowed_origin.as_deref())?;

    start_http_server(&config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "content_dashboard_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
