use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw query string of an activity search, every field may be missing.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidSearch {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("budget must be a non-negative number")]
    InvalidBudget,
}

/// Validated search. The date range is carried but never applied.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParameters {
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
}

impl SearchParameters {
    pub fn location_query(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

impl TryFrom<ActivityQuery> for SearchParameters {
    type Error = InvalidSearch;

    fn try_from(query: ActivityQuery) -> Result<Self, Self::Error> {
        let (Some(city), Some(country), Some(start_date), Some(end_date), Some(budget)) = (
            non_empty(query.city),
            non_empty(query.country),
            non_empty(query.start_date),
            non_empty(query.end_date),
            non_empty(query.budget),
        ) else {
            return Err(InvalidSearch::MissingParameters);
        };

        let budget = budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite() && *b >= 0.0)
            .ok_or(InvalidSearch::InvalidBudget)?;

        Ok(Self {
            city,
            country,
            start_date,
            end_date,
            budget,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
