use std::sync::Arc;

use auth::Authenticator;
use site_service::config::Config;
use site_service::domain::review::service::ReviewService;
use site_service::domain::user::service::AuthService;
use site_service::inbound::http::router::create_router;
use site_service::inbound::http::router::AppState;
use site_service::outbound::repositories::PostgresBookingRepository;
use site_service::outbound::repositories::PostgresContactInfoRepository;
use site_service::outbound::repositories::PostgresContactMessageRepository;
use site_service::outbound::repositories::PostgresGalleryRepository;
use site_service::outbound::repositories::PostgresReviewRepository;
use site_service::outbound::repositories::PostgresServiceRepository;
use site_service::outbound::repositories::PostgresSliderRepository;
use site_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "site-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let review_repository = Arc::new(PostgresReviewRepository::new(pg_pool.clone()));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&authenticator),
        )),
        review_service: Arc::new(ReviewService::new(review_repository)),
        authenticator,
        services: Arc::new(PostgresServiceRepository::new(pg_pool.clone())),
        sliders: Arc::new(PostgresSliderRepository::new(pg_pool.clone())),
        gallery: Arc::new(PostgresGalleryRepository::new(pg_pool.clone())),
        bookings: Arc::new(PostgresBookingRepository::new(pg_pool.clone())),
        contact_info: Arc::new(PostgresContactInfoRepository::new(pg_pool.clone())),
        contact_messages: Arc::new(PostgresContactMessageRepository::new(pg_pool)),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
