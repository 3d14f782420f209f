//! Bearer-authenticated request helpers for the Gateway.
//!
//! Every scoped request goes through here so the credential check and the
//! 401/403 handling happen in exactly one place.

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::system::auth::storage;

fn authorized(method: Method, url: &str) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    Ok(RequestBuilder::new(url)
        .method(method)
        .header("Authorization", &format!("Bearer {}", token)))
}

/// Send a bodyless authorized request and return the raw response.
pub async fn send(method: Method, url: &str) -> Result<Response, ApiError> {
    authorized(method, url)?
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))
}

/// Send an authorized request with a JSON body and return the raw response.
pub async fn send_json<B: Serialize>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<Response, ApiError> {
    authorized(method, url)?
        .json(body)
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = send(Method::GET, url).await?;
    into_json(response).await
}

/// POST a JSON body and decode a JSON reply.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send_json(Method::POST, url, body).await?;
    into_json(response).await
}

/// Decode a successful response, or classify the failure.
pub async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("bad response body: {}", e)))
}

/// Fold a non-success response into the taxonomy. 401/403 clears the
/// stored session and bounces the app back to the login entry point.
pub async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    if status == 401 || status == 403 {
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
        return ApiError::Unauthorized;
    }
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status_body(status, &body)
}
