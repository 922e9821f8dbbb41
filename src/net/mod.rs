//! Network layer: wire types, REST gateway calls, and the asynchronous
//! cache orchestration built on top of them.

pub mod api;
pub mod sync;
pub mod types;
