//! Numerical transformers.

use serde::Deserialize;

use super::base::{missing_column, not_fitted, Kwargs, Transformer};
use crate::data::{Cell, Table};
use crate::errors::{ConformanceError, ErrorKind};

/// Constructor arguments accepted by [`FloatFormatter`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloatFormatterConfig {
    /// Column the transformer operates on.
    pub column: String,
    /// Upper bound on the number of learned decimal digits.
    pub max_digits: u32,
    /// Clamp reverse-transformed values into the fitted range.
    pub clamp_on_reverse: bool,
}

impl Default for FloatFormatterConfig {
    fn default() -> Self {
        Self {
            column: "value".to_string(),
            max_digits: 6,
            clamp_on_reverse: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FittedState {
    digits: u32,
    min: f64,
    max: f64,
}

/// Rounds floats to a learned number of decimal digits and restores the
/// fitted value range on the way back.
#[derive(Debug, Clone)]
pub struct FloatFormatter {
    config: FloatFormatterConfig,
    state: Option<FittedState>,
}

impl FloatFormatter {
    pub const NAME: &'static str = "FloatFormatter";

    pub fn new(config: FloatFormatterConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    pub fn from_kwargs(kwargs: &Kwargs) -> Result<Self, ConformanceError> {
        let config = serde_json::from_value(serde_json::Value::Object(kwargs.clone())).map_err(
            |e| {
                ConformanceError::new(ErrorKind::InvalidKwargs {
                    transformer: Self::NAME.to_string(),
                    detail: e.to_string(),
                })
            },
        )?;
        Ok(Self::new(config))
    }

    /// Smallest digit count (capped) that represents every value exactly.
    pub fn learn_rounding_digits<I: IntoIterator<Item = f64>>(values: I, cap: u32) -> u32 {
        values
            .into_iter()
            .map(|v| Self::digits_for(v, cap))
            .max()
            .unwrap_or(0)
    }

    fn digits_for(value: f64, cap: u32) -> u32 {
        for digits in 0..cap {
            if Self::round_to(value, digits) == value {
                return digits;
            }
        }
        cap
    }

    fn round_to(value: f64, digits: u32) -> f64 {
        let factor = 10f64.powi(digits as i32);
        (value * factor).round() / factor
    }

    fn fitted(&self, operation: &str) -> Result<FittedState, ConformanceError> {
        self.state.ok_or_else(|| not_fitted(Self::NAME, operation))
    }

    fn numeric_cells<'a>(
        &self,
        data: &'a Table,
        operation: &str,
    ) -> Result<&'a [Cell], ConformanceError> {
        let column = data
            .column(&self.config.column)
            .ok_or_else(|| missing_column(Self::NAME, operation, &self.config.column))?;
        Ok(&column.cells)
    }

    fn map_column<F>(&self, data: &Table, operation: &str, f: F) -> Result<Table, ConformanceError>
    where
        F: Fn(f64) -> f64,
    {
        let cells = self.numeric_cells(data, operation)?;
        let mut out = Vec::with_capacity(cells.len());
        for cell in cells {
            match cell {
                Cell::Number(n) => out.push(Cell::Number(f(*n))),
                Cell::Null => out.push(Cell::Null),
                other => {
                    return Err(ConformanceError::new(ErrorKind::PhaseFailure {
                        transformer: Self::NAME.to_string(),
                        operation: operation.to_string(),
                        reason: format!("expected a numeric cell, found {:?}", other),
                    }))
                }
            }
        }
        Ok(Table::with_column(self.config.column.clone(), out))
    }
}

impl Transformer for FloatFormatter {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn fit(&mut self, data: &Table) -> Result<(), ConformanceError> {
        let values: Vec<f64> = self
            .numeric_cells(data, "fit")?
            .iter()
            .filter_map(Cell::as_number)
            .collect();

        let digits = Self::learn_rounding_digits(values.iter().copied(), self.config.max_digits);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        self.state = Some(FittedState { digits, min, max });
        Ok(())
    }

    fn transform(&self, data: &Table) -> Result<Table, ConformanceError> {
        let state = self.fitted("transform")?;
        self.map_column(data, "transform", |n| Self::round_to(n, state.digits))
    }

    fn reverse_transform(&self, data: &Table) -> Result<Table, ConformanceError> {
        let state = self.fitted("reverse_transform")?;
        let clamp = self.config.clamp_on_reverse && state.min <= state.max;
        self.map_column(data, "reverse_transform", |n| {
            let n = Self::round_to(n, state.digits);
            if clamp {
                n.clamp(state.min, state.max)
            } else {
                n
            }
        })
    }
}
