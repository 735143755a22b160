use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use crate::models::feature::FeatureCollection;
use crate::upstream::{PlacesQuery, UpstreamError, UpstreamProvider};

const AUTOCOMPLETE_PATH: &str = "/v1/geocode/autocomplete";
const GEOCODE_PATH: &str = "/v1/geocode/search";
const PLACES_PATH: &str = "/v2/places";

pub struct GeoapifyClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GeoapifyClient {
    pub fn new(
        http: Client,
        base_url: &str,
        api_key: String,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn get_features(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<FeatureCollection, UpstreamError> {
        debug!("Querying upstream {}", path);
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.json::<FeatureCollection>().await?)
    }
}

#[async_trait]
impl UpstreamProvider for GeoapifyClient {
    async fn autocomplete(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<FeatureCollection, UpstreamError> {
        let limit = limit.to_string();
        self.get_features(
            AUTOCOMPLETE_PATH,
            &[("text", text), ("type", "city"), ("limit", limit.as_str())],
        ).await
    }

    async fn geocode(&self, text: &str) -> Result<FeatureCollection, UpstreamError> {
        self.get_features(
            GEOCODE_PATH,
            &[("text", text), ("type", "city")],
        ).await
    }

    async fn places(&self, query: &PlacesQuery) -> Result<FeatureCollection, UpstreamError> {
        let categories = query.categories();
        let filter = query.filter();
        let limit = query.limit.to_string();
        self.get_features(
            PLACES_PATH,
            &[
                ("categories", categories.as_str()),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
            ],
        ).await
    }
}
