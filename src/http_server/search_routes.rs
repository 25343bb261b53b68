//! Property Search HTTP Routes
//!
//! The root welcome message and the filterable listings endpoint.

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::{self, Property};

use super::errors::ApiResult;

/// Message returned at the root route
const WELCOME_MESSAGE: &str = "Welcome to the Property Search API";

/// Root response
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Query parameters accepted by the search route
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub city: Option<String>,
}

/// Create the search routes
pub fn search_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/search", get(search_handler))
}

/// Root handler: fixed welcome message, no datastore access
async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Search handler: list properties, optionally narrowed to an exact
/// city match.
///
/// Opens one datastore connection and drops it when the handler
/// returns, on success and error alike.
async fn search_handler(Query(params): Query<SearchParams>) -> ApiResult<Json<Vec<Property>>> {
    let city = city_filter(params.city.as_deref());

    let client = db::connect().await?;
    let properties = db::search_properties(&client, city).await?;

    Ok(Json(properties))
}

/// An empty `city` parameter means no filter, same as an absent one.
fn city_filter(city: Option<&str>) -> Option<&str> {
    city.filter(|c| !c.is_empty())
}
