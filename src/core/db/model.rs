use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::core::input::to_two_places;
use crate::error::{ProjectError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub num_required: Option<i32>,
    pub cost: Option<Decimal>,
    pub(super) _guard: (),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: i64,
    pub text: String,
    pub order: i32,
    pub(super) _guard: (),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub(super) _guard: (),
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(num_required) = self.num_required {
            write!(f, " x{}", num_required)?;
        }
        if let Some(cost) = self.cost {
            write!(f, " ({})", cost)?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.order, self.text)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Decimal columns are TEXT holding the canonical two-place rendering.
pub(super) fn decimal_from_column(value: Option<String>) -> Result<Option<Decimal>> {
    value
        .map(|text| {
            Decimal::from_str(&text).map(to_two_places).map_err(|e| {
                ProjectError::Persistence(sqlx::Error::Decode(
                    format!("stored decimal {:?} is malformed: {}", text, e).into(),
                ))
            })
        })
        .transpose()
}

pub(super) fn decimal_to_column(value: Option<Decimal>) -> Option<String> {
    value.map(|d| to_two_places(d).to_string())
}
