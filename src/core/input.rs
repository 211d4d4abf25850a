//! Parsing of console answers.
//!
//! Every helper takes the raw line the user typed. Whitespace-only text means
//! "no value" and is never an error; anything else must parse as the field's
//! type or the helper returns [`ProjectError::InvalidInput`].

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ProjectError, Result};

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

/// Trimmed text, or `None` for a blank answer.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn parse_text(raw: &str) -> Option<String> {
    normalize(raw).map(str::to_string)
}

pub fn parse_int(raw: &str) -> Result<Option<i64>> {
    normalize(raw)
        .map(|text| {
            text.parse::<i64>()
                .map_err(|_| ProjectError::invalid_input(format!("{} is not a valid number.", text)))
        })
        .transpose()
}

/// Parses a decimal and fixes it at two fractional digits, rounding half up.
pub fn parse_decimal(raw: &str) -> Result<Option<Decimal>> {
    normalize(raw)
        .map(|text| {
            let value = Decimal::from_str(text).map(to_two_places).map_err(|_| {
                ProjectError::invalid_input(format!("{} is not a valid decimal number.", text))
            })?;
            // rescale stops short of two places when the digits do not fit
            if value.scale() != 2 {
                return Err(ProjectError::invalid_input(format!("{} is too large.", text)));
            }
            Ok(value)
        })
        .transpose()
}

pub fn to_two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

pub fn parse_hours(raw: &str) -> Result<Option<Decimal>> {
    let hours = parse_decimal(raw)?;
    if let Some(value) = hours {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ProjectError::invalid_input(format!(
                "{} is not a valid number of hours.",
                value
            )));
        }
    }
    Ok(hours)
}

pub fn parse_difficulty(raw: &str) -> Result<Option<i32>> {
    match parse_int(raw)? {
        None => Ok(None),
        Some(value) if (MIN_DIFFICULTY as i64..=MAX_DIFFICULTY as i64).contains(&value) => {
            Ok(Some(value as i32))
        }
        Some(value) => Err(ProjectError::invalid_input(format!(
            "{} is not a valid difficulty. Use a number from {} to {}.",
            value, MIN_DIFFICULTY, MAX_DIFFICULTY
        ))),
    }
}
