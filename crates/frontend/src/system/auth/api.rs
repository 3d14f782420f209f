use contracts::system::auth::{LoginRequest, LoginResponse, LogoutRequest, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api::api_url;
use crate::shared::error::ApiError;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/login/"))
        .json(&request)
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status_body(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))
}

/// Sign up a new account together with its first business
pub async fn signup(request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&api_url("/signup/"))
        .json(request)
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status_body(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))
}

/// Logout (revoke refresh token). Best-effort: storage is cleared by the
/// caller regardless of the outcome.
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = LogoutRequest { refresh_token };

    let response = Request::post(&api_url("/logout/"))
        .json(&request)
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Rejected(format!(
            "Logout failed: {}",
            response.status()
        )));
    }

    Ok(())
}
