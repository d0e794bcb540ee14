//! Password vault screen: the entry table and its async results.

mod render;
mod state;
mod update;

pub use render::render_vault;
pub(crate) use render::table_rows;
pub use state::VaultSlice;
pub use update::{handle_vault_event, handle_vault_key};
