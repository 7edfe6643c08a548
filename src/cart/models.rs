//! Shopping Cart Domain Models
//!
//! This module contains the product record held by the cart and the
//! category-specific payloads for clothing, food and medicine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// Value Types
// =============================================================================

/// 13-digit EAN code identifying a product within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EanCode(u64);

impl EanCode {
    /// Wraps an already-validated code. See `console::helpers::parse_ean`.
    pub fn new(code: u64) -> Self {
        Self(code)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer to a yes/no question, stored the way it was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
}

/// Physical form of a medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DosageForm {
    #[serde(rename = "t")]
    Tablet,
    #[serde(rename = "c")]
    Capsule,
}

/// Product category as typed at the add prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Clothing,
    Food,
    Medicine,
}

// =============================================================================
// Product
// =============================================================================

/// Category-specific attributes. Serialized inline next to the shared fields
/// with a `category` tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category")]
pub enum ProductDetails {
    Clothing {
        size: String,
        material: String,
    },
    Food {
        expiry_date: NaiveDate,
        gluten_free: YesNo,
        suitable_for_vegetarians: YesNo,
    },
    Medicine {
        expiry_date: NaiveDate,
        tablet_or_capsule: DosageForm,
        size: String,
    },
}

impl ProductDetails {
    pub fn category(&self) -> Category {
        match self {
            ProductDetails::Clothing { .. } => Category::Clothing,
            ProductDetails::Food { .. } => Category::Food,
            ProductDetails::Medicine { .. } => Category::Medicine,
        }
    }
}

/// A single line item in the cart.
///
/// Values are expected to be validated before construction; the only
/// mutation after that is [`Product::set_quantity`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Display name; the cart listing is sorted on it
    name: String,

    /// Unit price, exported as a JSON number
    price: Decimal,

    /// Number of units; any integer the user typed, negatives included
    quantity: i64,

    /// EAN code, unique within a session
    id: EanCode,

    /// Brand or manufacturer
    brand: String,

    /// Category tag and the fields that go with it
    #[serde(flatten)]
    details: ProductDetails,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: i64,
        id: EanCode,
        brand: impl Into<String>,
        details: ProductDetails,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            id,
            brand: brand.into(),
            details,
        }
    }

    pub fn id(&self) -> EanCode {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Flat key/value view of every attribute, including the `category` tag.
    pub fn attributes(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // Product always serializes to an object
            _ => Map::new(),
        }
    }

    /// Single-line JSON rendering used by the export command.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
