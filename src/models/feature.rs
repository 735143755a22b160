use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GeoJSON-like collection returned by every upstream endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct FeatureProperties {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub categories: Option<Vec<String>>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct Geometry {
    /// Left untyped, polygons and lines nest deeper than a point.
    #[serde(default)]
    pub coordinates: Value,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Feature {
    /// Properties win over geometry, geometry coordinates are ordered lon, lat.
    pub fn coordinates(&self) -> Option<Coordinates> {
        if let (Some(lon), Some(lat)) = (self.properties.lon, self.properties.lat) {
            return Some(Coordinates { lon, lat });
        }

        let point = self.geometry.as_ref()?.coordinates.as_array()?;
        match point.as_slice() {
            [lon, lat, ..] => Some(Coordinates {
                lon: lon.as_f64()?,
                lat: lat.as_f64()?,
            }),
            _ => None,
        }
    }
}
