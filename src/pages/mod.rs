//! Routed pages.

pub mod home;
pub mod login;
pub mod room;
