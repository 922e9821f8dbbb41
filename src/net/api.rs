//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with a Bearer
//! token header on session-scoped endpoints. Server-side (SSR) / native:
//! stubs returning `ApiError::Network` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are read
//! for a `{message}` body and classified by status: 429 maps to
//! `RateLimited` so callers can show a distinct message, everything else
//! collapses to `Status`. Transport failures map to `Network`.

#![allow(clippy::unused_async)]

use super::types::{CreateRoomResponse, Interaction, LoginResponse, Room};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Classified failure from a gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("rate limited")]
    RateLimited,
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Classify a non-2xx response by status code.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 429 {
            Self::RateLimited
        } else {
            Self::Status { status, message }
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

/// `{message}` body the server attaches to 4xx responses.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(feature = "hydrate")]
async fn classify_failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("request failed with status {status}"));
    ApiError::from_status(status, message)
}

#[cfg(feature = "hydrate")]
fn bearer_token() -> Result<String, ApiError> {
    crate::util::credentials::read_token()
        .map(|t| format!("Bearer {t}"))
        .ok_or_else(|| ApiError::Network("no session token".to_owned()))
}

/// Exchange an email for a session token via `POST /api/login`.
///
/// # Errors
///
/// Returns the classified error on transport failure or non-2xx status.
pub async fn login(email: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email: email.to_owned() };
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_failure(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the signed-in user's rooms from `GET /api/rooms`.
///
/// # Errors
///
/// Returns the classified error on transport failure or non-2xx status.
pub async fn fetch_rooms() -> Result<Vec<Room>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/rooms")
            .header("Authorization", &bearer_token()?)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_failure(resp).await);
        }
        resp.json::<Vec<Room>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a new room via `POST /api/rooms`.
///
/// # Errors
///
/// Returns the classified error on transport failure or non-2xx status.
pub async fn create_room() -> Result<CreateRoomResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/rooms")
            .header("Authorization", &bearer_token()?)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_failure(resp).await);
        }
        resp.json::<CreateRoomResponse>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch a room's interaction history from `GET /api/rooms/{id}/interactions`.
///
/// # Errors
///
/// Returns the classified error on transport failure or non-2xx status.
pub async fn fetch_interactions(room_id: &str) -> Result<Vec<Interaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/rooms/{room_id}/interactions");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer_token()?)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_failure(resp).await);
        }
        resp.json::<Vec<Interaction>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = room_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Submit a prompt via `POST /api/rooms/{id}/interactions`.
///
/// The returned interaction carries the server-assigned id and timestamp;
/// its `response` is typically still absent at this point.
///
/// # Errors
///
/// Returns the classified error on transport failure or non-2xx status,
/// notably `ApiError::RateLimited` on 429.
pub async fn create_interaction(room_id: &str, prompt: &str) -> Result<Interaction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/rooms/{room_id}/interactions");
        let body = super::types::CreateInteractionRequest { prompt: prompt.to_owned() };
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer_token()?)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_failure(resp).await);
        }
        resp.json::<Interaction>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room_id, prompt);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
