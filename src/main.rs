use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use crate::config::Config;
use crate::upstream::geoapify::GeoapifyClient;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod services;
pub mod upstream;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = Config::parse();

    let upstream = Arc::new(GeoapifyClient::new(
        reqwest::Client::new(),
        &config.geoapify_base_url,
        config.geoapify_api_key.clone(),
    ));

    controller::serve(upstream, &config).await
}
