use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::upstream::UpstreamProvider;

pub mod activities_controller;
pub mod city_suggestions_controller;
pub mod health_check;

/// Immutable per-process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamProvider>,
    pub rng_seed: Option<u64>,
}

impl AppState {
    /// Fresh generator for a single request.
    pub fn request_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub async fn serve(
    upstream: Arc<dyn UpstreamProvider>,
    config: &Config,
) -> anyhow::Result<()> {
    let allow_origin = match &config.origin_urls {
        Some(origin_urls) => {
            let origins = origin_urls
                .split(',')
                .map(|s| s.trim().parse::<HeaderValue>())
                .collect::<Result<Vec<HeaderValue>, _>>()
                .context("Invalid origin in ORIGIN_URLS")?;
            AllowOrigin::list(origins)
        }
        None => AllowOrigin::any(),
    };

    let app_state = AppState {
        upstream,
        rng_seed: config.rng_seed,
    };
    let application = build_application(app_state, allow_origin);

    let address: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid bind address")?;
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn build_application(
    app_state: AppState,
    allow_origin: AllowOrigin,
) -> Router {
    router_endpoints(app_state)
        .fallback(page_not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::OPTIONS])
                        .allow_origin(allow_origin)
                        .allow_headers([CONTENT_TYPE])
                )
        )
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(city_suggestions_controller::router(app_state.clone()))
        .merge(activities_controller::router(app_state))
}
