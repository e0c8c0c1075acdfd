//! State Management
//!
//! Session context shared by every page, and per-page mount scopes.

pub mod session;

pub use session::{provide_portal, use_mount_scope, use_portal, Portal};
