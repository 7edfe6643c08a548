//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Product and its category payloads)
//! - The cart collection
//! - Summary and export helpers

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use helpers::{export_lines, summarize, Summary};
pub use models::{Category, DosageForm, EanCode, Product, ProductDetails, YesNo};
pub use state::{Cart, CartEntry};
