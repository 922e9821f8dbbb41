//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `rooms`, `interactions`) so
//! individual components can depend on small focused models. Each state is
//! a plain struct held in an `RwSignal` provided via context from `App`;
//! the structs themselves stay free of browser APIs so the cache logic is
//! unit-testable natively. All three are constructed at application start
//! and reset together on logout.

pub mod interactions;
pub mod rooms;
pub mod session;
