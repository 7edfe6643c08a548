//! EAN Code Registry
//!
//! Session-scoped record of the EAN codes currently in use, consulted by the
//! add prompt to keep codes unique.

use crate::cart::models::EanCode;
use std::collections::HashSet;

/// EAN codes handed out during a session. A code is claimed when a product is
/// created and retired when that product is removed.
#[derive(Debug, Default)]
pub struct EanRegistry {
    /// Codes claimed and not yet retired
    codes: HashSet<EanCode>,
}

impl EanRegistry {
    pub fn contains(&self, code: EanCode) -> bool {
        self.codes.contains(&code)
    }

    /// Returns `false` if the code was already claimed.
    pub fn claim(&mut self, code: EanCode) -> bool {
        self.codes.insert(code)
    }

    pub fn retire(&mut self, code: EanCode) -> bool {
        self.codes.remove(&code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
