//! Discord interaction handlers
//!
//! Framework-level error reporting and gateway events that are not commands.

/// Command and framework error reporting
pub mod error;
/// Gateway events (guild joins)
pub mod events;

pub use error::on_error;
pub use events::event_handler;
