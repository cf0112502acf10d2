//! Boolean transformers.

use serde::Deserialize;

use super::base::{missing_column, not_fitted, Kwargs, Transformer};
use crate::data::{Cell, Table};
use crate::errors::{ConformanceError, ErrorKind};

/// Constructor arguments accepted by [`BooleanEncoder`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanEncoderConfig {
    pub column: String,
}

impl Default for BooleanEncoderConfig {
    fn default() -> Self {
        Self {
            column: "value".to_string(),
        }
    }
}

/// Encodes booleans as 0.0/1.0 and decodes with a 0.5 threshold. Nulls pass
/// through unchanged in both directions.
#[derive(Debug, Clone)]
pub struct BooleanEncoder {
    config: BooleanEncoderConfig,
    fitted: bool,
}

impl BooleanEncoder {
    pub const NAME: &'static str = "BooleanEncoder";

    pub fn new(config: BooleanEncoderConfig) -> Self {
        Self {
            config,
            fitted: false,
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

    fn cells<'a>(&self, data: &'a Table, operation: &str) -> Result<&'a [Cell], ConformanceError> {
        let column = data
            .column(&self.config.column)
            .ok_or_else(|| missing_column(Self::NAME, operation, &self.config.column))?;
        Ok(&column.cells)
    }

    fn unexpected(&self, operation: &str, cell: &Cell) -> ConformanceError {
        ConformanceError::new(ErrorKind::PhaseFailure {
            transformer: Self::NAME.to_string(),
            operation: operation.to_string(),
            reason: format!("unexpected cell {:?}", cell),
        })
    }
}

impl Transformer for BooleanEncoder {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn fit(&mut self, data: &Table) -> Result<(), ConformanceError> {
        self.cells(data, "fit")?;
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, data: &Table) -> Result<Table, ConformanceError> {
        if !self.fitted {
            return Err(not_fitted(Self::NAME, "transform"));
        }
        let cells = self.cells(data, "transform")?;
        let mut out = Vec::with_capacity(cells.len());
        for cell in cells {
            match cell {
                Cell::Bool(b) => out.push(Cell::Number(if *b { 1.0 } else { 0.0 })),
                Cell::Null => out.push(Cell::Null),
                other => return Err(self.unexpected("transform", other)),
            }
        }
        Ok(Table::with_column(self.config.column.clone(), out))
    }

    fn reverse_transform(&self, data: &Table) -> Result<Table, ConformanceError> {
        if !self.fitted {
            return Err(not_fitted(Self::NAME, "reverse_transform"));
        }
        let cells = self.cells(data, "reverse_transform")?;
        let mut out = Vec::with_capacity(cells.len());
        for cell in cells {
            match cell {
                Cell::Number(n) => out.push(Cell::Bool(*n > 0.5)),
                Cell::Null => out.push(Cell::Null),
                other => return Err(self.unexpected("reverse_transform", other)),
            }
        }
        Ok(Table::with_column(self.config.column.clone(), out))
    }
}
