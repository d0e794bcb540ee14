//! Effect handlers for the TUI runtime.
//!
//! This module contains the implementation of side effects triggered by the
//! reducer. These functions perform I/O. They do NOT mutate state directly.
//!
//! ## Pure Async Pattern
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime uses
//! `spawn_effect` to spawn them and send results to the inbox. This keeps
//! handlers focused on the request itself while the runtime handles spawning.
//!
//! ```ignore
//! // Handler: pure async, returns UiEvent
//! pub async fn fetch_entries(base_url: String, token: String) -> UiEvent { ... }
//!
//! // Runtime: spawns and sends to inbox
//! self.spawn_effect(move || handlers::fetch_entries(base_url, token));
//! ```

pub mod auth;
pub mod vault;

pub use auth::*;
pub use vault::*;
