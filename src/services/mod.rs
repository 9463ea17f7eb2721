//! HTTP clients for the back-office JSON API. Each module mirrors one
//! collaborator consumed by the UI panels; every call returns the decoded
//! body or a `ServiceError`.

pub mod customers;
pub mod products;
pub mod reviews;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}
