use gloo_net::http::Request;

use super::ServiceError;
use crate::models::customer::{Customer, CustomerRequest};

pub async fn get_all() -> Result<Vec<Customer>, ServiceError> {
    let response = Request::get("/api/customers").send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn create(request: &CustomerRequest) -> Result<Customer, ServiceError> {
    let response = Request::post("/api/customers").json(request)?.send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn update(id: &str, request: &CustomerRequest) -> Result<Customer, ServiceError> {
    let url = format!("/api/customers/{}", urlencoding::encode(id));
    let response = Request::put(&url).json(request)?.send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn delete(id: &str) -> Result<(), ServiceError> {
    let url = format!("/api/customers/{}", urlencoding::encode(id));
    let response = Request::delete(&url).send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(())
}
