use anyhow::Result;
use axum::Router;
use content_dashboard_backend::{
    controllers::{
        favorites::FavoritesController, feed::FeedController,
        preferences::PreferencesController, search::SearchController,
        trending::TrendingController,
    },
    domain::{
        content::{ContentService, ContentSources},
        feed::FeedService,
        preferences::PreferencesService,
        shared::FixedClock,
        trending::{CategoryClassifier, TrendingService},
    },
    infrastructure::{
        http::{build_router, AppControllers},
        repositories::{
            HardcodedContentCatalog, InMemoryInteractionRepository, InMemoryPreferencesRepository,
        },
    },
};
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod assertions;

use api_client::TestClient;
use fixtures::NOW;

pub const ITEMS_PER_PAGE: u32 = 20;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub clock: Arc<FixedClock>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::start(fixtures::live_sources())
                .await
                .expect("Failed to start test server")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // In-memory state is dropped with the server task
        }
    }
}

impl TestContext {
    /// Server whose upstream sources are all unconfigured
    pub async fn offline() -> Result<Self> {
        Self::start(fixtures::offline_sources()).await
    }

    pub async fn start(sources: ContentSources) -> Result<Self> {
        let clock = Arc::new(FixedClock::new(*NOW));
        let app = create_app(sources, clock.clone())?;

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(Self {
            client: TestClient::new(&base_url),
            clock,
        })
    }
}

fn create_app(sources: ContentSources, clock: Arc<FixedClock>) -> Result<Router> {
    // Instantiate repositories
    let interactions = Arc::new(InMemoryInteractionRepository::new());
    let preferences_repo = Arc::new(InMemoryPreferencesRepository::default());
    let catalog = Arc::new(HardcodedContentCatalog::new());
    let classifier = Arc::new(CategoryClassifier::default());

    // Instantiate services
    let content_service = Arc::new(ContentService::new(
        sources,
        interactions,
        Duration::from_secs(60),
    ));
    let feed_service = Arc::new(FeedService::new(
        content_service.clone(),
        preferences_repo.clone(),
        catalog.clone(),
        classifier.clone(),
        clock.clone(),
        ITEMS_PER_PAGE,
    ));
    let trending_service = Arc::new(TrendingService::new(
        feed_service.clone(),
        catalog,
        classifier,
        clock.clone(),
    ));
    let preferences_service = Arc::new(PreferencesService::new(preferences_repo));

    // Instantiate controllers
    let controllers = AppControllers {
        content_service: content_service.clone(),
        feed: Arc::new(FeedController::new(feed_service)),
        trending: Arc::new(TrendingController::new(trending_service)),
        preferences: Arc::new(PreferencesController::new(preferences_service)),
        favorites: Arc::new(FavoritesController::new(content_service.clone())),
        search: Arc::new(SearchController::new(content_service, clock)),
    };

    Ok(build_router(controllers, None)?)
}
