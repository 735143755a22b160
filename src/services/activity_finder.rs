use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};
use crate::models::activity::Activity;
use crate::models::feature::Feature;
use crate::models::search_parameters::SearchParameters;
use crate::upstream::{PlacesQuery, UpstreamError, UpstreamProvider};

pub const SEARCH_RADIUS_METERS: u32 = 10_000;
pub const PLACES_LIMIT: usize = 20;
pub const ACTIVITY_CATEGORIES: [&str; 3] = ["tourism", "entertainment", "leisure"];

const DEFAULT_TYPE: &str = "tourism";
const DEFAULT_TITLE: &str = "Local Attraction";
const DEFAULT_DESCRIPTION: &str = "Explore this spot!";
const DURATION: &str = "1-2 hours";
const GROUP_SIZE: &str = "Any";
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1514525253161-7a46d19cd819";

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("City not found")]
    CityNotFound,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Resolves the city, looks up places around it and keeps those within budget.
pub async fn find_activities<R: Rng + Send>(
    upstream: &dyn UpstreamProvider,
    params: &SearchParameters,
    rng: &mut R,
) -> Result<Vec<Activity>, FinderError> {
    let geocoded = upstream.geocode(&params.location_query()).await?;
    let Some(city) = geocoded.features.first() else {
        info!("No match for {}", params.location_query());
        return Err(FinderError::CityNotFound);
    };
    let center = city.coordinates().ok_or_else(|| {
        UpstreamError::Malformed("geocode result without coordinates".to_string())
    })?;

    let query = PlacesQuery {
        categories: ACTIVITY_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        center,
        radius_meters: SEARCH_RADIUS_METERS,
        limit: PLACES_LIMIT,
    };
    let places = upstream.places(&query).await?;
    debug!("Upstream returned {} places", places.features.len());

    Ok(synthesize_activities(
        places.features.iter().take(PLACES_LIMIT),
        params.budget,
        rng,
    ))
}

/// Every returned activity costs at most `budget`.
pub fn synthesize_activities<'a, R: Rng>(
    places: impl IntoIterator<Item = &'a Feature>,
    budget: f64,
    rng: &mut R,
) -> Vec<Activity> {
    places
        .into_iter()
        .map(|place| synthesize_activity(place, budget, rng))
        .filter(|activity| activity.price <= budget)
        .collect()
}

pub fn synthesize_activity<R: Rng>(
    place: &Feature,
    budget: f64,
    rng: &mut R,
) -> Activity {
    let properties = &place.properties;
    let categories = properties
        .categories
        .as_deref()
        .filter(|c| !c.is_empty());

    let r#type = categories
        .and_then(|c| c[0].split('.').next())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TYPE)
        .to_string();

    let is_free_park = r#type == "leisure"
        && properties
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains("park"));

    let price = if is_free_park {
        0.0
    } else {
        f64::from(rng.gen_range(10..=59u32)).min(budget)
    };

    Activity {
        title: properties
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: categories
            .map(|c| c.join(", "))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        price,
        duration: DURATION.to_string(),
        r#type,
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        rating: Some(rng.gen_range(4.0..5.0)),
        group_size: Some(GROUP_SIZE.to_string()),
    }
}
