//! Interactive Console Module
//!
//! This module contains the command-line front end of the cart, including:
//! - Command vocabulary and fixed texts
//! - Pure input parsers used by the re-prompt loops
//! - The EAN registry and the session that owns the cart
//! - Per-command handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod session;

// Re-export commonly used types for convenience
pub use models::{Command, Flow};
pub use registry::EanRegistry;
pub use session::{Console, Session};
