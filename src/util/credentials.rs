//! Session credential persistence.
//!
//! The session token and the active room id live in `localStorage` under a
//! flat key scheme so they survive page reloads. Both are cleared together
//! on logout. Requires a browser environment; native builds see `None`.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "promptroom_token";
#[cfg(feature = "hydrate")]
const ROOM_KEY: &str = "promptroom_room_id";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token after a successful login.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Read the active room id, if one was stored.
pub fn read_active_room() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(ROOM_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the active room id so a reload lands back in the same room.
pub fn write_active_room(room_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(ROOM_KEY, room_id);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = room_id;
    }
}

/// Remove both session keys. Called on logout, before cache resets.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.remove_item(TOKEN_KEY);
            let _ = s.remove_item(ROOM_KEY);
        }
    }
}
