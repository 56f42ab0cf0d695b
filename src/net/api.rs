//! REST client for the external PhotoShare API.
//!
//! Real HTTP goes through `gloo-net` and only exists on wasm32; host builds
//! get inert stubs so the pure helpers stay testable off-browser. Every
//! call is a single request — no timeout, no retry, no de-duplication, no
//! cancellation. A failed call is terminal for that one user action.
//!
//! Auth responses are flat JSON bodies with no envelope; the token field is
//! `access_token`. Error bodies carry `message` or `detail`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::forms::{Credentials, PhotoUpload, SignUpPayload};
use crate::state::session::Session;

#[cfg(not(target_arch = "wasm32"))]
const OFF_BROWSER: &str = "not available outside the browser";

/// API base path, overridable at compile time for deployments that do not
/// proxy the API under the site origin.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("PHOTOSHARE_API_BASE").unwrap_or("/api")
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Flat auth response body shared by sign-up and sign-in.
#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    access_token: String,
    username: String,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct BalanceResponse {
    balance: i64,
}

/// Pull a human-readable message out of an error body; `message` wins over
/// `detail`, with the HTTP status as a last resort.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .or_else(|| v.get("detail").and_then(serde_json::Value::as_str))
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

/// Turn a flat auth body into a session, rejecting a missing token so an
/// invalid session is never persisted.
fn session_from_auth(body: AuthResponse) -> Result<Session, ApiError> {
    if body.access_token.is_empty() {
        return Err(ApiError::Decode("missing access token".to_owned()));
    }
    Ok(Session {
        username: body.username,
        token: body.access_token,
        avatar: body.avatar,
    })
}

/// `application/x-www-form-urlencoded` body for the login endpoint.
fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencode(key), urlencode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn urlencode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(target_arch = "wasm32")]
async fn server_error(resp: &gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Server {
        status,
        message: error_message(status, &body),
    }
}

#[cfg(target_arch = "wasm32")]
async fn auth_session(resp: gloo_net::http::Response) -> Result<Session, ApiError> {
    if !resp.ok() {
        return Err(server_error(&resp).await);
    }
    let body: AuthResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    session_from_auth(body)
}

/// Register a new account. On success the response body becomes the
/// session; the caller persists it.
pub async fn sign_up(payload: &SignUpPayload) -> Result<Session, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/signup"))
            .json(payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        auth_session(resp).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = payload;
        Err(ApiError::Request(OFF_BROWSER.to_owned()))
    }
}

/// Exchange credentials for a session. The login endpoint takes an
/// urlencoded form rather than JSON.
pub async fn sign_in(credentials: &Credentials) -> Result<Session, ApiError> {
    let body = form_encode(&[
        ("username", &credentials.username),
        ("password", &credentials.password),
    ]);
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        auth_session(resp).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = body;
        Err(ApiError::Request(OFF_BROWSER.to_owned()))
    }
}

/// Revoke the session server-side. The caller clears the local session
/// only after this succeeds.
pub async fn sign_out(token: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/logout"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(server_error(&resp).await)
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Request(OFF_BROWSER.to_owned()))
    }
}

/// Fetch the current game balance.
pub async fn fetch_game_balance(token: &str) -> Result<i64, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/gameBalance"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(server_error(&resp).await);
        }
        let body: BalanceResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.balance)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Request(OFF_BROWSER.to_owned()))
    }
}

/// Add `amount` credits to the game balance; returns the new balance.
pub async fn update_game_balance(token: &str, amount: i64) -> Result<i64, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::put(&endpoint("/gameBalance"))
            .header("Authorization", &bearer(token))
            .json(&serde_json::json!({ "amount": amount }))
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(server_error(&resp).await);
        }
        let body: BalanceResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.balance)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, amount);
        Err(ApiError::Request(OFF_BROWSER.to_owned()))
    }
}

/// Upload one photo as multipart form data.
pub async fn upload_photo(token: &str, upload: &PhotoUpload) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Request("form construction failed".to_owned()))?;
        form.append_with_blob("file", &upload.file)
            .map_err(|_| ApiError::Request("form construction failed".to_owned()))?;
        form.append_with_str("description", &upload.description)
            .map_err(|_| ApiError::Request("form construction failed".to_owned()))?;
        form.append_with_str("tags", &upload.tags.join(","))
            .map_err(|_| ApiError::Request("form construction failed".to_owned()))?;

        let resp = gloo_net::http::Request::post(&endpoint("/photos/"))
            .header("Authorization", &bearer(token))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(server_error(&resp).await)
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, upload);
        Err(ApiError::Request(OFF_BROWSER.to_owned()))
    }
}
