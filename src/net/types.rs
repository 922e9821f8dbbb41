//! Wire types shared with the server API.
//!
//! Field names are camelCase on the wire; `response` is `null` until the
//! AI responder has produced output for an interaction, and is filled in
//! exactly once server-side.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A conversation room as returned by the rooms list endpoint.
///
/// `description` is server-derived summary text and may change between
/// fetches as interactions accrue; the client never writes it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub description: String,
}

/// One prompt/response exchange within a room.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub prompt: String,
    pub response: Option<String>,
    pub created_at: String,
}

/// Request body for `POST /api/login`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
}

/// Response body for `POST /api/login`. `room_id` is the user's most
/// recent room, when the server knows one.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Response body for `POST /api/rooms`.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
}

/// Request body for `POST /api/rooms/{id}/interactions`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteractionRequest {
    pub prompt: String,
}
