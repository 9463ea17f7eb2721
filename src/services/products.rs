use gloo_net::http::Request;

use super::ServiceError;
use crate::models::product::Product;

/// The catalog is read-only in the back office; listing is the only call.
pub async fn get_all() -> Result<Vec<Product>, ServiceError> {
    let response = Request::get("/api/products").send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json().await?)
}
