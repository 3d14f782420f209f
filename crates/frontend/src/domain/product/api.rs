use contracts::domain::product::{Product, ProductForm};
use gloo_net::http::Method;

use crate::shared::api::{api_url, QueryParams};
use crate::shared::error::ApiError;
use crate::shared::http;

/// List products for the current scope. The `business` parameter carries
/// the selection verbatim, including `"all"`.
pub async fn list_products(selected: &str) -> Result<Vec<Product>, ApiError> {
    let mut query = QueryParams::new();
    query.set("business", selected);
    http::get_json(&query.append_to(&api_url("/products/"))).await
}

/// Create a product inside a specific business.
pub async fn create_product(form: &ProductForm, business: &str) -> Result<Product, ApiError> {
    let mut query = QueryParams::new();
    query.set("business", business);
    http::post_json(&query.append_to(&api_url("/products/")), form).await
}

/// Update an existing product by internal id.
pub async fn update_product(id: i64, form: &ProductForm) -> Result<Product, ApiError> {
    let url = api_url(&format!("/products/{}/", id));
    let response = http::send_json(Method::PUT, &url, form).await?;
    http::into_json(response).await
}

/// Delete a product by sku.
pub async fn delete_product(sku: &str) -> Result<(), ApiError> {
    let url = api_url(&format!("/products/delete/{}/", urlencoding::encode(sku)));
    let response = http::send(Method::DELETE, &url).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(http::error_from_response(response).await)
    }
}
