//! The controller test application.
//!
//! - `state`: the explicit application state and the per-frame function
//! - `main_loop`: blocking and host-driven loop drivers
//! - `bootstrap`: SDL startup, device listing and shutdown

pub mod bootstrap;
pub mod main_loop;
pub mod state;

pub use bootstrap::{run, StartupError};
pub use main_loop::{run_blocking, HostDriven, LoopControl};
pub use state::{window_title, App, Connection, TITLE_PREFIX};
