//! Reusable UI components.

pub mod prompt_box;
pub mod room_sidebar;
pub mod transcript;
