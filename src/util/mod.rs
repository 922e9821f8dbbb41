//! Browser utility helpers: credential persistence and clock access.

pub mod credentials;
pub mod time;
