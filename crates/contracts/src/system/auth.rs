use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued on both login and registration. The tokens are opaque to the
/// client; `username` is only kept for display.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub username: String,
}

/// `POST /register/` — account fields plus the first business's profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub business_name: String,
    pub business_type: String,
    pub contact_number: String,
    pub gst_tax_id: String,
    pub business_address: String,
    pub department_branch: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}
