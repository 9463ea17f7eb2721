#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::models::customer::CustomerRequest;
#[cfg(feature = "ssr")]
use crate::models::review::ReviewRequest;
#[cfg(feature = "ssr")]
use std::collections::HashMap;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::Mutex;
#[cfg(feature = "ssr")]
use leptos::logging::log;

// Required-field and range checks live here; the UI only mirrors them with
// `required` attributes.
#[cfg(feature = "ssr")]
fn validate_customer(request: &CustomerRequest) -> Result<(), &'static str> {
    if request.name.trim().is_empty() {
        return Err("Customer name is required");
    }
    if request.email.trim().is_empty() {
        return Err("Customer email is required");
    }
    Ok(())
}

#[cfg(feature = "ssr")]
fn validate_review(request: &ReviewRequest) -> Result<(), &'static str> {
    if request.product_id.is_empty() {
        return Err("A product reference is required");
    }
    if request.customer_id.is_empty() {
        return Err("A customer reference is required");
    }
    if !(1..=5).contains(&request.rating) {
        return Err("Rating must be between 1 and 5");
    }
    if request.comment.trim().is_empty() {
        return Err("A comment is required");
    }
    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn list_customers(db: web::Data<Arc<Mutex<Database>>>) -> HttpResponse {
    let db = db.lock().await;
    match db.list_customers().await {
        Ok(customers) => {
            log!("[API] Returning {} customers", customers.len());
            HttpResponse::Ok().json(customers)
        }
        Err(err) => {
            leptos::logging::error!("[API] Failed to fetch customers: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch customers")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn create_customer(
    db: web::Data<Arc<Mutex<Database>>>,
    request: web::Json<CustomerRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    // raw JSON logging
    let raw_json = serde_json::to_string(&request).unwrap_or_default();
    log!("[API] Customer create request: {}", raw_json);

    if let Err(reason) = validate_customer(&request) {
        return HttpResponse::BadRequest().body(reason);
    }
    let db = db.lock().await;
    match db.insert_customer(&request).await {
        Ok(customer) => {
            log!("[API] Successfully saved customer ID: {}", customer.id);
            HttpResponse::Ok().json(customer)
        }
        Err(e) => {
            leptos::logging::error!("[API] Database error: {:?}", e);
            HttpResponse::BadRequest().body(format!("Database error: {}", e))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn update_customer(
    db: web::Data<Arc<Mutex<Database>>>,
    path: web::Path<String>,
    request: web::Json<CustomerRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    let request = request.into_inner();
    if let Err(reason) = validate_customer(&request) {
        return HttpResponse::BadRequest().body(reason);
    }
    let db = db.lock().await;
    match db.update_customer(&id, &request).await {
        Ok(Some(customer)) => HttpResponse::Ok().json(customer),
        Ok(None) => HttpResponse::NotFound().body("Customer not found"),
        Err(err) => {
            leptos::logging::error!("[API] Failed to update customer {}: {:?}", id, err);
            HttpResponse::InternalServerError().body("Failed to update customer")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn delete_customer(
    db: web::Data<Arc<Mutex<Database>>>,
    path: web::Path<String>,
) -> HttpResponse {
    let db = db.lock().await;
    match db.delete_customer(&path).await {
        Ok(_) => HttpResponse::Ok().body("Customer deleted"),
        Err(err) => {
            leptos::logging::error!("[API] Failed to delete customer: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete customer")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn list_products(db: web::Data<Arc<Mutex<Database>>>) -> HttpResponse {
    let db = db.lock().await;
    match db.list_products().await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            leptos::logging::error!("[API] Failed to fetch products: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch products")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn list_reviews(
    db: web::Data<Arc<Mutex<Database>>>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let product_id = query.get("product_id").cloned().unwrap_or_default();
    log!("[API] Received review request for product: {}", product_id);

    let db = db.lock().await;
    match db.list_reviews(&product_id).await {
        Ok(reviews) => {
            log!(
                "[API] Returning {} reviews for product {}",
                reviews.len(),
                product_id
            );
            HttpResponse::Ok().json(reviews)
        }
        Err(err) => {
            leptos::logging::error!(
                "[API] Failed to fetch reviews for {}: {:?}",
                product_id,
                err
            );
            HttpResponse::InternalServerError().body("Failed to fetch reviews")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn create_review(
    db: web::Data<Arc<Mutex<Database>>>,
    request: web::Json<ReviewRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    // raw JSON logging
    let raw_json = serde_json::to_string(&request).unwrap_or_default();
    log!("[API] Review create request: {}", raw_json);

    if let Err(reason) = validate_review(&request) {
        return HttpResponse::BadRequest().body(reason);
    }
    let db = db.lock().await;
    match db.insert_review(&request).await {
        Ok(review) => {
            log!("[API] Successfully saved review ID: {}", review.id);
            HttpResponse::Ok().json(review)
        }
        Err(e) => {
            leptos::logging::error!("[API] Database error: {:?}", e);
            HttpResponse::BadRequest().body(format!("Database error: {}", e))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn delete_review(
    db: web::Data<Arc<Mutex<Database>>>,
    path: web::Path<String>,
) -> HttpResponse {
    let db = db.lock().await;
    match db.delete_review(&path).await {
        Ok(_) => HttpResponse::Ok().body("Review deleted"),
        Err(err) => {
            leptos::logging::error!("[API] Failed to delete review: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete review")
        }
    }
}
