//! Error Types
//!
//! Input rejections, cart lookups that miss, and failures that end a session.

use crate::cart::models::EanCode;
use thiserror::Error;

/// Why a line of user input was rejected by a parser.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),
    #[error("Wrong length: expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Not one of the accepted answers: {0:?}")]
    NotAChoice(String),
    #[error("Not a calendar date: {0:?}")]
    InvalidDate(String),
    #[error("EAN code already added. Enter a UNIQUE code.")]
    AlreadyUsed(EanCode),
    #[error("Type of product not found")]
    UnknownCategory(String),
}

impl InputError {
    /// Message shown to the user before re-prompting, if any. Format errors
    /// are re-prompted silently.
    pub fn notice(&self) -> Option<String> {
        match self {
            InputError::AlreadyUsed(_) => Some(self.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product Not Found in Cart")]
    NotFound(EanCode),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed")]
    InputClosed,
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}
