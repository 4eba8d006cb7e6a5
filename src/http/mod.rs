//! HTTP server module.
//!
//! The server includes:
//! - Listener binding on all interfaces
//! - Graceful shutdown on SIGTERM/SIGINT, so a task being drained during a
//!   blue/green cutover finishes its in-flight requests

mod server;
mod shutdown;

pub use server::{bind, serve, ServerError};
pub use shutdown::shutdown_signal;
