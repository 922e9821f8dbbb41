//! Clock access for optimistic timestamps.

/// Current time as an ISO-8601 string, matching the server's `createdAt`
/// format. Optimistic entries carry this until the server record replaces
/// them. Empty outside the browser.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
