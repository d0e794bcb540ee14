//! Authentication feature slice.
//!
//! Owns the session, the login/register form, and the in-flight state of
//! auth requests. The vault slice never touches any of this; the two
//! containers only interact through explicit reducer transitions (login
//! success starts a fetch, logout clears the vault).

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{AuthField, AuthForm, AuthMode, AuthSlice};
pub use update::{handle_auth_event, handle_login_key, logout};
