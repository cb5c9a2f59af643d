//! HTTP server for the shipment dashboard.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                               |
//! |--------|-------------------|-------------------------------------------|
//! | GET    | `/health`         | Health check                              |
//! | GET    | `/api/filters`    | Selector choices (`"All"` + observed)     |
//! | GET    | `/api/dashboard`  | All views for `?carrier=&route=`          |
//!
//! When a static directory is configured, the built frontend is served
//! for every other path.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::types::{DashboardQuery, HealthResponse};
use crate::cache::DatasetCache;
use crate::config::ServerConfig;
use crate::dashboard::{build_dashboard, DashboardView, FilterOptions};
use crate::error::{ServerError, ServerResult};

/// Shared handler state.
pub type AppState = Arc<DatasetCache>;

/// Build the router around an existing cache.
pub fn build_router(cache: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let router = Router::new()
        .route("/health", get(health))
        .route("/api/filters", get(filters))
        .route("/api/dashboard", get(dashboard))
        .with_state(cache)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Load the dataset, then serve until the process stops.
///
/// A missing or malformed interchange file aborts startup.
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let cache = Arc::new(DatasetCache::new(&config.data_path));
    let dataset = cache.get()?;
    let (carriers, routes) = (dataset.carriers().len(), dataset.routes().len());

    let app = build_router(cache.clone(), config.static_dir.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("🚚 Shiptrack dashboard running on http://localhost:{}", config.port);
    println!(
        "   {} shipments, {} carriers, {} routes from {}",
        dataset.len(),
        carriers,
        routes,
        config.data_path.display()
    );
    println!("   GET /api/filters   - Selector choices");
    println!("   GET /api/dashboard - KPIs, charts and table");
    println!("   GET /health        - Health check");
    if let Some(dir) = &config.static_dir {
        println!("   GET /              - Dashboard UI ({})", dir.display());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(cache): State<AppState>) -> ServerResult<Json<HealthResponse>> {
    let dataset = cache.get()?;
    Ok(Json(HealthResponse {
        status: "ok".into(),
        service: "shiptrack".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        records: dataset.len(),
    }))
}

/// Selector choices endpoint
async fn filters(State(cache): State<AppState>) -> ServerResult<Json<FilterOptions>> {
    let dataset = cache.get()?;
    Ok(Json(FilterOptions::from_dataset(dataset)))
}

/// Dashboard endpoint: filter, then recompute every view.
async fn dashboard(
    State(cache): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, ServerError> {
    let dataset = cache.get()?;
    let selection = query.selection();
    selection.validate(dataset)?;

    let view = build_dashboard(dataset, &selection);
    tracing::debug!(
        carrier = ?selection.carrier,
        route = ?selection.route,
        records = view.record_count,
        "dashboard recomputed"
    );
    Ok(Json(view))
}
