//! API client for the relay console backend.
//!
//! Every endpoint replies with the `{success, message, data}` envelope;
//! transport failures surface as `ApiError` and never touch client state.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::session::UserInfo;

const API_BASE: &str = "/api";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Response envelope shared by every backend endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Generic JSON fetch helper
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE, path);

    let response = reqwasm::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError { message: e.to_string() })?;

    if response.ok() {
        response.json().await.map_err(|e| ApiError { message: e.to_string() })
    } else {
        Err(ApiError { message: format!("HTTP {}", response.status()) })
    }
}

/// POST request helper
async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE, path);
    let payload = serde_json::to_string(body).map_err(|e| ApiError { message: e.to_string() })?;

    let response = reqwasm::http::Request::post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| ApiError { message: e.to_string() })?;

    if response.ok() {
        response.json().await.map_err(|e| ApiError { message: e.to_string() })
    } else {
        Err(ApiError { message: format!("HTTP {}", response.status()) })
    }
}

/// Terminate the server-side session.
pub async fn logout() -> Result<ApiResponse<()>, ApiError> {
    get_json("/user/logout").await
}

/// Fetch the calling user's profile, including the wallet quota.
pub async fn get_self() -> Result<ApiResponse<UserInfo>, ApiError> {
    get_json("/user/self").await
}

/// Redeem a top-up code; `data` carries the granted quota.
pub async fn redeem_code(key: &str) -> Result<ApiResponse<i64>, ApiError> {
    #[derive(Serialize)]
    struct RedeemRequest {
        key: String,
    }

    post_json("/user/topup", &RedeemRequest { key: key.to_string() }).await
}

/// Fetch the operator-authored about content (Markdown or an embed URL).
pub async fn get_about() -> Result<ApiResponse<String>, ApiError> {
    get_json("/about").await
}

pub async fn login(username: &str, password: &str) -> Result<ApiResponse<UserInfo>, ApiError> {
    #[derive(Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    post_json(
        "/user/login",
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{
            "success": true,
            "message": "",
            "data": {"id": 4, "username": "alice", "role": 1, "quota": 500000}
        }"#;

        let resp: ApiResponse<UserInfo> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        let user = resp.data.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.quota, 500_000);
    }

    #[test]
    fn test_envelope_failure_without_data() {
        let resp: ApiResponse<i64> =
            serde_json::from_str(r#"{"success": false, "message": "invalid code"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "invalid code");
        assert_eq!(resp.data, None);
    }

    #[test]
    fn test_envelope_null_data() {
        let resp: ApiResponse<()> =
            serde_json::from_str(r#"{"success": true, "message": "ok", "data": null}"#).unwrap();
        assert!(resp.success);
    }
}
