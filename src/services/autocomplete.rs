use tracing::debug;
use crate::models::city_suggestion::CitySuggestion;
use crate::upstream::{UpstreamError, UpstreamProvider};

/// Shorter queries never reach the upstream.
pub const MIN_QUERY_CHARS: usize = 3;
pub const SUGGESTION_LIMIT: usize = 5;

/// Suggestions in upstream relevance order, at most `SUGGESTION_LIMIT` of them.
pub async fn suggest_cities(
    upstream: &dyn UpstreamProvider,
    query: Option<&str>,
) -> Result<Vec<CitySuggestion>, UpstreamError> {
    let query = match query {
        Some(q) if q.chars().count() >= MIN_QUERY_CHARS => q,
        _ => {
            debug!("Skipping autocomplete for short query");
            return Ok(Vec::new());
        }
    };

    let collection = upstream.autocomplete(query, SUGGESTION_LIMIT).await?;

    collection
        .features
        .iter()
        .take(SUGGESTION_LIMIT)
        .map(|feature| {
            CitySuggestion::from_feature(feature).ok_or_else(|| {
                UpstreamError::Malformed("autocomplete result without coordinates".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::models::feature::FeatureCollection;
    use crate::upstream::fake::FakeUpstream;

    fn collection(value: serde_json::Value) -> FeatureCollection {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn short_or_missing_query_skips_upstream() {
        let upstream = FakeUpstream::default();

        for query in [None, Some(""), Some("P"), Some("Pa"), Some("Zü")] {
            let suggestions = suggest_cities(&upstream, query).await.unwrap();
            assert!(suggestions.is_empty());
        }
        assert_eq!(upstream.call_count(), 0);
    }

    #[tokio::test]
    async fn three_characters_reach_upstream() {
        let upstream = FakeUpstream::default().with_autocomplete(Ok(collection(json!({
            "features": [
                { "properties": { "city": "Paris", "country": "France", "lon": 2.35, "lat": 48.85 } },
                { "properties": { "name": "Parma", "country": "Italy", "lon": 10.33, "lat": 44.8 } }
            ]
        }))));

        let suggestions = suggest_cities(&upstream, Some("Par")).await.unwrap();

        assert_eq!(
            *upstream.autocomplete_calls.lock().unwrap(),
            vec![("Par".to_string(), 5)]
        );
        assert_eq!(
            suggestions,
            vec![
                CitySuggestion {
                    city: "Paris".to_string(),
                    country: "France".to_string(),
                    lon: 2.35,
                    lat: 48.85,
                },
                CitySuggestion {
                    city: "Parma".to_string(),
                    country: "Italy".to_string(),
                    lon: 10.33,
                    lat: 44.8,
                },
            ]
        );
    }

    #[tokio::test]
    async fn never_more_than_five_in_upstream_order() {
        let features: Vec<_> = (0..8)
            .map(|i| json!({ "properties": { "city": format!("City {i}"), "country": "X", "lon": i, "lat": i } }))
            .collect();
        let upstream = FakeUpstream::default()
            .with_autocomplete(Ok(collection(json!({ "features": features }))));

        let suggestions = suggest_cities(&upstream, Some("City")).await.unwrap();

        let cities: Vec<_> = suggestions.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, vec!["City 0", "City 1", "City 2", "City 3", "City 4"]);
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let upstream = FakeUpstream::default().with_autocomplete(Err(UpstreamError::Status(503)));

        let err = suggest_cities(&upstream, Some("Lisbon")).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status(503)));
    }

    #[tokio::test]
    async fn result_without_coordinates_is_malformed() {
        let upstream = FakeUpstream::default().with_autocomplete(Ok(collection(json!({
            "features": [ { "properties": { "city": "Nowhere" } } ]
        }))));

        let err = suggest_cities(&upstream, Some("Now")).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Malformed(_)));
    }
}
