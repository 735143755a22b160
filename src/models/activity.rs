use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub r#type: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_fields() {
        let activity = Activity {
            title: "Louvre".to_string(),
            description: "tourism.sights".to_string(),
            price: 12.0,
            duration: "1-2 hours".to_string(),
            r#type: "tourism".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            rating: None,
            group_size: Some("Any".to_string()),
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["type"], json!("tourism"));
        assert_eq!(value["imageUrl"], json!("https://example.com/a.jpg"));
        assert_eq!(value["groupSize"], json!("Any"));
        assert!(value.get("rating").is_none());
    }
}
