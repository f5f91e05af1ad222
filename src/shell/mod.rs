// Composition root: config from the environment, in-memory infrastructure
// wired into the use case handlers, axum router on top.

pub mod config;
pub mod http;
pub mod payloads;
pub mod state;
