//! # folio: storage and REST API for a personal portfolio site
//!
//! `folio` serves the content behind a single-person portfolio page: a profile, featured
//! projects, categorized skills, education with coursework, interests and social links. A
//! frontend fetches everything it needs in one call to `GET /api/portfolio/{userId}` and manages
//! individual sections through per-resource create, update and delete endpoints.
//!
//! ## Architecture
//!
//! The HTTP layer is [Axum](https://github.com/tokio-rs/axum); all state lives in PostgreSQL
//! behind a shared [`sqlx::PgPool`]. A request is handled independently of every other request:
//! the handler acquires a pooled connection, runs one repository call, and maps the result to a
//! camelCase JSON body. The only fan-out is the aggregate portfolio read, which loads its six
//! sections concurrently and fails as a whole if any of them fails.
//!
//! - [`api`]: route handlers, request/response models and validating extractors
//! - [`db`]: repositories (one per table), row models and database error mapping
//! - [`config`]: YAML file plus `FOLIO_*` environment overrides
//! - [`errors`]: the [`errors::Error`] type every handler returns, rendered as `{"error": "..."}`
//! - [`telemetry`]: console logging and optional OTLP span export
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use folio::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = folio::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     folio::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! Point `DATABASE_URL` (or `database.url` in `config.yaml`) at a PostgreSQL database. Migrations
//! embedded from `migrations/` run on every startup before the server binds.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::errors::Error;
use crate::openapi::ApiDoc;
use axum::{
    Router,
    http::{self, HeaderValue, Uri},
    routing::{get, post},
};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{ProfileId, UserId};

/// State shared by every request handler.
///
/// ```ignore
/// let state = AppState::builder().db(pool).config(config).build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the folio database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn optional_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Connect with the configured pool settings and bring the schema up to date.
#[instrument(skip_all)]
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let settings = &config.database.pool;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(optional_secs(settings.idle_timeout_secs))
        .max_lifetime(optional_secs(settings.max_lifetime_secs))
        .connect(&config.database.url)
        .await?;

    info!(max_connections = settings.max_connections, "Connected to database");
    Ok(pool)
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    // A wildcard anywhere in the list means any origin; tower-http rejects "*" inside an explicit list.
    let allow_origin = if config.cors.allowed_origins.iter().any(|o| matches!(o, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                origins.push(url.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::PUT, http::Method::DELETE])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(config.cors.allow_credentials);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

async fn route_not_found(uri: Uri) -> Error {
    Error::NotFound {
        resource: "Route".to_string(),
        id: uri.path().to_string(),
    }
}

/// Routes under `/api`, without state or middleware attached.
fn api_routes() -> Router<AppState> {
    use api::handlers::{coursework, education, health, interests, portfolio, profiles, projects, skills, social_links, users};

    Router::new()
        .route("/health", get(health::health))
        .route("/portfolio/{user_id}", get(portfolio::get_portfolio))
        .route("/profile", post(profiles::create_profile))
        .route("/profile/{user_id}", get(profiles::get_profile).put(profiles::update_profile))
        .route("/projects", post(projects::create_project))
        // GET takes a profile id, PUT and DELETE a project id. One segment name keeps the router happy.
        .route(
            "/projects/{id}",
            get(projects::list_projects)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/skill-categories", post(skills::create_skill_category))
        .route("/skills", post(skills::create_skill))
        .route("/skills/{profile_id}", get(skills::list_skills))
        .route("/education", post(education::create_education_entry))
        .route("/education/{profile_id}", get(education::list_education))
        .route("/coursework", post(coursework::create_coursework))
        .route("/coursework/{profile_id}", get(coursework::list_coursework))
        .route("/interests", post(interests::create_interest))
        .route("/interests/{profile_id}", get(interests::list_interests))
        .route("/social-links", post(social_links::create_social_link))
        .route("/social-links/{profile_id}", get(social_links::list_social_links))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
}

/// Build the application router: API routes, docs, CORS, optional metrics and request tracing.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors_layer = create_cors_layer(&state.config)?;
    let enable_metrics = state.config.enable_metrics;

    let mut router = Router::new()
        .nest("/api", api_routes().with_state(state))
        .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(cors_layer);

    if enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// A configured server, ready to bind.
///
/// 1. [`Application::new`] connects to the database, runs migrations and builds the router
/// 2. [`Application::serve`] binds the configured address and handles requests
/// 3. When the shutdown future resolves, in-flight requests finish and the pool is closed
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Like [`Application::new`], reusing `pool` instead of connecting when one is given.
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        debug!("Starting folio with configuration: {:#?}", config);

        let pool = match pool {
            Some(pool) => pool,
            None => setup_database(&config).await?,
        };
        migrator().run(&pool).await?;

        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("folio listening on http://{}, docs at http://localhost:{}/api/docs", bind_addr, self.config.port);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
