use gloo_net::http::Request;

use super::ServiceError;
use crate::models::review::{Review, ReviewRequest};

pub(crate) fn reviews_url(product_id: &str) -> String {
    format!("/api/reviews?product_id={}", urlencoding::encode(product_id))
}

/// Reviews for one product, reviewer names included.
pub async fn get_all(product_id: &str) -> Result<Vec<Review>, ServiceError> {
    let response = Request::get(&reviews_url(product_id)).send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn create(request: &ReviewRequest) -> Result<Review, ServiceError> {
    let response = Request::post("/api/reviews").json(request)?.send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn delete(id: &str) -> Result<(), ServiceError> {
    let url = format!("/api/reviews/{}", urlencoding::encode(id));
    let response = Request::delete(&url).send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(())
}
