use async_trait::async_trait;
use thiserror::Error;
use crate::models::feature::{Coordinates, FeatureCollection};

pub mod geoapify;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        // The request url carries the api key
        let e = e.without_url();
        if e.is_decode() {
            UpstreamError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            UpstreamError::Status(status.as_u16())
        } else {
            UpstreamError::Transport(e)
        }
    }
}

/// Nearby places lookup, a circle of `radius_meters` around a point.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacesQuery {
    pub categories: Vec<String>,
    pub center: Coordinates,
    pub radius_meters: u32,
    pub limit: usize,
}

impl PlacesQuery {
    pub fn filter(&self) -> String {
        format!(
            "circle:{},{},{}",
            self.center.lon, self.center.lat, self.radius_meters
        )
    }

    pub fn categories(&self) -> String {
        self.categories.join(",")
    }
}

/// The geocoding/places provider the service forwards to.
#[async_trait]
pub trait UpstreamProvider: Send + Sync {
    /// City-scoped autocomplete on partial text.
    async fn autocomplete(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<FeatureCollection, UpstreamError>;

    /// City-scoped forward geocode of free text.
    async fn geocode(&self, text: &str) -> Result<FeatureCollection, UpstreamError>;

    async fn places(&self, query: &PlacesQuery) -> Result<FeatureCollection, UpstreamError>;
}
