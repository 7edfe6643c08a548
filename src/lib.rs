//! Shopping Cart Library
//!
//! This library provides the core functionality for an interactive
//! command-line shopping cart with JSON export.

// Domain modules
pub mod cart;
pub mod console;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
