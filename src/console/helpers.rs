//! Console Input Parsers
//!
//! Pure functions turning one raw input line into a typed value. The session
//! calls them in a loop until one succeeds, so none of them touch the console.

use super::registry::EanRegistry;
use crate::cart::models::{Category, DosageForm, EanCode, YesNo};
use crate::config::{DATE_DAY, DATE_MONTH, DATE_YEAR, EAN_LENGTH, MIN_YEAR};
use crate::error::InputError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::ops::Range;
use std::str::FromStr;

/// Free text is accepted as typed.
pub fn parse_text(input: &str) -> Result<String, InputError> {
    Ok(input.to_string())
}

pub fn parse_category(input: &str) -> Result<Category, InputError> {
    match input {
        "Clothing" => Ok(Category::Clothing),
        "Food" => Ok(Category::Food),
        "Medicine" => Ok(Category::Medicine),
        other => Err(InputError::UnknownCategory(other.to_string())),
    }
}

/// A decimal number, plain (`2.5`) or in scientific notation (`2.5e3`).
pub fn parse_price(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

/// Any integer, negatives included.
pub fn parse_quantity(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

/// A non-negative integer whose decimal form is exactly 13 digits long.
/// A leading zero shortens the number and is rejected.
pub fn parse_ean(input: &str) -> Result<EanCode, InputError> {
    let code = input
        .trim()
        .parse::<u64>()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;

    let digits = code.to_string().len();
    if digits != EAN_LENGTH {
        return Err(InputError::WrongLength {
            expected: EAN_LENGTH,
            actual: digits,
        });
    }

    Ok(EanCode::new(code))
}

/// [`parse_ean`] plus a check that the code has not been handed out yet.
pub fn parse_new_ean(input: &str, registry: &EanRegistry) -> Result<EanCode, InputError> {
    let code = parse_ean(input)?;
    if registry.contains(code) {
        return Err(InputError::AlreadyUsed(code));
    }
    Ok(code)
}

pub fn parse_yes_no(input: &str) -> Result<YesNo, InputError> {
    match input {
        "y" => Ok(YesNo::Yes),
        "n" => Ok(YesNo::No),
        other => Err(InputError::NotAChoice(other.to_string())),
    }
}

pub fn parse_dosage_form(input: &str) -> Result<DosageForm, InputError> {
    match input {
        "t" => Ok(DosageForm::Tablet),
        "c" => Ok(DosageForm::Capsule),
        other => Err(InputError::NotAChoice(other.to_string())),
    }
}

/// Reads year, month and day from fixed positions of a `YYYY-MM-DD` line.
/// Separators are not checked and trailing characters are ignored. Years
/// before 1 are rejected.
pub fn parse_expiry_date(input: &str) -> Result<NaiveDate, InputError> {
    let invalid = || InputError::InvalidDate(input.to_string());

    let year = date_part(input, DATE_YEAR)
        .and_then(|s| s.parse::<i32>().ok())
        .filter(|year| *year >= MIN_YEAR)
        .ok_or_else(invalid)?;
    let month = date_part(input, DATE_MONTH)
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let day = date_part(input, DATE_DAY)
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Slice of `input` covering `range`, clipped to its length.
fn date_part(input: &str, range: Range<usize>) -> Option<&str> {
    let end = range.end.min(input.len());
    let start = range.start.min(end);
    input.get(start..end).map(str::trim)
}
