use contracts::domain::business::{Business, NewBusiness};

use crate::shared::api::api_url;
use crate::shared::error::ApiError;
use crate::shared::http;

pub async fn list_businesses() -> Result<Vec<Business>, ApiError> {
    http::get_json(&api_url("/businesses/")).await
}

pub async fn create_business(business: &NewBusiness) -> Result<Business, ApiError> {
    http::post_json(&api_url("/businesses/add/"), business).await
}
