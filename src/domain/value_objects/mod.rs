//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_source;
mod direction;
mod remote_target;
mod shell;
mod sync_state;
mod table_filter;

pub use config_source::ConfigSource;
pub use direction::Direction;
pub use remote_target::RemoteTarget;
pub use shell::{is_shell_safe, shell_quote, shell_quote_path};
pub use sync_state::SyncState;
pub use table_filter::TableFilter;
