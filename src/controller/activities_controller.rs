use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::routing::get;
use tracing::{error, warn};
use crate::controller::AppState;
use crate::helpers::api_error::ApiError;
use crate::models::activity::Activity;
use crate::models::search_parameters::{ActivityQuery, SearchParameters};
use crate::services::activity_finder::{find_activities, FinderError};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/activities", get(retrieve_activities))
        .route_layer(Extension(app_state))
}

pub async fn retrieve_activities(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    let params = SearchParameters::try_from(query).map_err(|e| {
        warn!("Rejected activity search: {}", e);
        ApiError::BadRequest(e.to_string())
    })?;

    let mut rng = app_state.request_rng();
    let activities = find_activities(
        app_state.upstream.as_ref(),
        &params,
        &mut rng,
    ).await;

    match activities {
        Ok(activities) => Ok(Json(activities)),
        Err(FinderError::CityNotFound) => Err(ApiError::NotFound("City not found".to_string())),
        Err(FinderError::Upstream(e)) => {
            error!("Something went wrong fetching activities for {} due to: {}", params.location_query(), e);
            Err(ApiError::Internal("Failed to fetch activities"))
        }
    }
}
