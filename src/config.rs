//! Session configuration and fixed constants.

/// Number of digits in an EAN code.
pub const EAN_LENGTH: usize = 13;

/// Byte ranges of year, month and day inside a typed date (`YYYY-MM-DD`).
/// The separator characters are not checked.
pub const DATE_YEAR: std::ops::Range<usize> = 0..4;
pub const DATE_MONTH: std::ops::Range<usize> = 5..7;
pub const DATE_DAY: std::ops::Range<usize> = 8..10;

/// Earliest accepted year in a typed date.
pub const MIN_YEAR: i32 = 1;

/// How line totals are computed in the cart summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalsMode {
    /// `quantity * price` with the fractional part kept.
    #[default]
    Exact,
    /// Price and quantity are each cut to whole numbers before multiplying.
    Truncated,
}

/// Settings for one session. `Default` is what the binary runs with.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// How the summary computes line totals
    pub totals: TotalsMode,
}
