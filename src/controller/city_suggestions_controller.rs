use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::error;
use crate::controller::AppState;
use crate::helpers::api_error::ApiError;
use crate::models::city_suggestion::CitySuggestion;
use crate::services::autocomplete::suggest_cities;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/city-suggestions", get(retrieve_city_suggestions))
        .route_layer(Extension(app_state))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CitySuggestionParam {
    pub query: Option<String>,
}

pub async fn retrieve_city_suggestions(
    Extension(app_state): Extension<AppState>,
    Query(param): Query<CitySuggestionParam>,
) -> Result<Json<Vec<CitySuggestion>>, ApiError> {
    let suggestions = suggest_cities(
        app_state.upstream.as_ref(),
        param.query.as_deref(),
    ).await;

    match suggestions {
        Ok(suggestions) => Ok(Json(suggestions)),
        Err(e) => {
            error!("Something went wrong fetching city suggestions due to: {}", e);
            Err(ApiError::Internal("Failed to fetch city suggestions"))
        }
    }
}
