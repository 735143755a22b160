use serde::{Deserialize, Serialize};
use crate::models::feature::Feature;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CitySuggestion {
    pub city: String,
    pub country: String,
    pub lon: f64,
    pub lat: f64,
}

impl CitySuggestion {
    /// None when the feature carries no usable coordinates.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let coordinates = feature.coordinates()?;
        let properties = &feature.properties;

        Some(Self {
            city: properties
                .city
                .clone()
                .filter(|city| !city.is_empty())
                .or_else(|| properties.name.clone())
                .unwrap_or_default(),
            country: properties.country.clone().unwrap_or_default(),
            lon: coordinates.lon,
            lat: coordinates.lat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn suggestion(value: serde_json::Value) -> Option<CitySuggestion> {
        let feature: Feature = serde_json::from_value(value).unwrap();
        CitySuggestion::from_feature(&feature)
    }

    #[test]
    fn city_falls_back_to_name() {
        let suggestion = suggestion(json!({
            "properties": { "name": "Paris", "country": "France", "lon": 2.35, "lat": 48.85 }
        })).unwrap();
        assert_eq!(suggestion.city, "Paris");
    }

    #[test]
    fn empty_city_falls_back_to_name() {
        let suggestion = suggestion(json!({
            "properties": { "city": "", "name": "Paris", "country": "France", "lon": 2.35, "lat": 48.85 }
        })).unwrap();
        assert_eq!(suggestion.city, "Paris");
        assert_eq!(suggestion.country, "France");
    }

    #[test]
    fn no_coordinates_no_suggestion() {
        assert!(suggestion(json!({ "properties": { "city": "Paris" } })).is_none());
    }
}
