//! bphub-api - HTTP front door for the bphub listing engine

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Router,
};
use chrono::Utc;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use bphub_api::{filter_or_default, page_href, run_search, SearchOutcome};
use bphub_core::{defaults, BlueprintRepository, Error, SearchFilter, Viewer};
use bphub_db::{create_pool, log_pool_metrics, PgBlueprintRepository};

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation when chasing a production incident.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

#[derive(Clone)]
struct AppState {
    repo: Arc<dyn BlueprintRepository>,
}

/// GET /search
///
/// The auth middleware (outside this crate) injects the `Viewer` extension;
/// absent means anonymous. A malformed query string fails open: the page
/// renders unfiltered rather than erroring.
async fn search_handler(
    State(state): State<AppState>,
    viewer: Option<Extension<Viewer>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let viewer = viewer.map(|Extension(v)| v).unwrap_or(Viewer::Anonymous);

    let filter = filter_or_default(raw.as_deref(), defaults::UE_VERSIONS);

    match run_search(state.repo.as_ref(), &filter, &viewer, Utc::now()).await {
        Ok(SearchOutcome::Listing(page)) => (
            [
                ("x-current-page", page.current_page.to_string()),
                ("x-total-pages", page.total_pages.to_string()),
            ],
            Html(page.html),
        )
            .into_response(),
        Ok(SearchOutcome::RedirectToFirstPage) => {
            let first = SearchFilter { page: 1, ..filter };
            Redirect::to(&page_href(&first, 1)).into_response()
        }
        Err(err) => {
            error!(
                subsystem = "api",
                component = "search",
                op = "search",
                error = %err,
                "Search request failed"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| Error::Config("DATABASE_URL must be set".to_string()))?;
    let pool = create_pool(&database_url).await?;

    let metrics_pool = pool.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(
            defaults::POOL_METRICS_INTERVAL_SECS,
        ));
        loop {
            ticker.tick().await;
            log_pool_metrics(&metrics_pool);
        }
    });

    let state = AppState {
        repo: Arc::new(PgBlueprintRepository::new(pool)),
    };

    let app = Router::new()
        .route("/search", get(search_handler))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state);

    let port = std::env::var("BPHUB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults::SERVER_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(subsystem = "api", op = "startup", %addr, "bphub-api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
