use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Default form limits
pub mod defaults {
    pub const SPLIT_MIN: u32 = 1;
    pub const SPLIT_MAX: u32 = 100;
    pub const SLIDER_STEPS: u32 = 6;
}

// A bill is a plain non-negative decimal: digits, optionally a dot and more
// digits. No signs, exponents, currency symbols, or thousands separators.
static BILL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d*)?$").unwrap());

// Custom error type for bill text parsing
#[derive(Debug, Clone, PartialEq)]
pub enum BillParseError {
    Empty,
    NotANumber(String),
    Negative(f64),
}

impl fmt::Display for BillParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillParseError::Empty => write!(f, "Bill cannot be empty"),
            BillParseError::NotANumber(input) => {
                write!(f, "'{}' is not a valid amount", input)
            }
            BillParseError::Negative(value) => {
                write!(f, "Bill cannot be negative, got {}", value)
            }
        }
    }
}

impl std::error::Error for BillParseError {}

/// Tip owed for a bill at the given integer percentage.
///
/// Linear in both arguments; a zero bill or a zero percentage yields 0.
/// Negative bills pass through unvalidated.
pub fn compute_tip(bill: f64, tip_percent: u32) -> f64 {
    bill * tip_percent as f64 / 100.0
}

/// Share of the tipped bill owed by each person.
///
/// # Arguments
/// * `bill` - The pre-tip total
/// * `split_by` - Number of people sharing; callers must guarantee `>= 1`
/// * `tip_percent` - Integer gratuity percentage
///
/// # Returns
/// `(bill + tip) / split_by`. With `split_by == 0` the result follows IEEE
/// division semantics (infinity or NaN); `BillFormState` never produces that.
pub fn compute_per_person(bill: f64, split_by: u32, tip_percent: u32) -> f64 {
    (bill + compute_tip(bill, tip_percent)) / split_by as f64
}

/// Snap a raw slider position to the nearest of `steps + 1` evenly spaced
/// stops in [0, 1]. Out-of-range positions are clamped first.
pub fn quantize_position(position: f64, steps: u32) -> f64 {
    let clamped = position.clamp(0.0, 1.0);
    if steps == 0 {
        return clamped;
    }
    (clamped * steps as f64).round() / steps as f64
}

/// Integer tip percentage for a raw slider position.
///
/// The position is quantized, then `position * 100` is truncated toward
/// zero, so the six-step default yields {0, 16, 33, 50, 66, 83, 100}.
pub fn tip_percent_from_position(position: f64, steps: u32) -> u32 {
    (quantize_position(position, steps) * 100.0) as u32
}

/// Parse user-typed bill text into an amount.
///
/// Accepts plain non-negative decimals ("50", "50.25", "7.") after
/// trimming; everything else is rejected.
pub fn parse_bill_text(input: &str) -> Result<f64, BillParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BillParseError::Empty);
    }

    if BILL_REGEX.is_match(trimmed) {
        // The pattern only admits digits and one dot, so f64 parsing
        // cannot fail here
        return trimmed
            .parse::<f64>()
            .map_err(|_| BillParseError::NotANumber(trimmed.to_string()));
    }

    // Distinguish negative amounts from garbage for the error message
    match trimmed.parse::<f64>() {
        Ok(value) if value < 0.0 => Err(BillParseError::Negative(value)),
        _ => Err(BillParseError::NotANumber(trimmed.to_string())),
    }
}

/// Format an amount as a dollar string with two decimals.
#[inline]
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

pub mod form;
