//! Category-to-index encoding.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::data::{Cell, Table};
use crate::errors::{ConformanceError, ErrorKind};
use crate::transformers::base::{missing_column, not_fitted, Kwargs, Transformer};

/// Constructor arguments accepted by [`LabelEncoder`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelEncoderConfig {
    pub column: String,
}

impl Default for LabelEncoderConfig {
    fn default() -> Self {
        Self {
            column: "value".to_string(),
        }
    }
}

/// Maps text categories to numeric indexes in first-seen order and back.
/// Unseen categories and out-of-range indexes are errors, not silent NaNs.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    config: LabelEncoderConfig,
    categories: Vec<String>,
    index: BTreeMap<String, usize>,
    fitted: bool,
}

impl LabelEncoder {
    pub const NAME: &'static str = "LabelEncoder";

    pub fn new(config: LabelEncoderConfig) -> Self {
        Self {
            config,
            categories: Vec::new(),
            index: BTreeMap::new(),
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

    /// Fitted categories in encoding order; empty before fit.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn cells<'a>(&self, data: &'a Table, operation: &str) -> Result<&'a [Cell], ConformanceError> {
        let column = data
            .column(&self.config.column)
            .ok_or_else(|| missing_column(Self::NAME, operation, &self.config.column))?;
        Ok(&column.cells)
    }

    fn phase_error(&self, operation: &str, reason: String) -> ConformanceError {
        ConformanceError::new(ErrorKind::PhaseFailure {
            transformer: Self::NAME.to_string(),
            operation: operation.to_string(),
            reason,
        })
    }
}

impl Transformer for LabelEncoder {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn fit(&mut self, data: &Table) -> Result<(), ConformanceError> {
        let cells = self.cells(data, "fit")?;
        self.categories.clear();
        self.index.clear();
        for cell in cells {
            match cell {
                Cell::Text(label) => {
                    if !self.index.contains_key(label) {
                        self.index.insert(label.clone(), self.categories.len());
                        self.categories.push(label.clone());
                    }
                }
                Cell::Null => {}
                other => {
                    return Err(
                        self.phase_error("fit", format!("expected a text cell, found {:?}", other))
                    )
                }
            }
        }
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
                Cell::Text(label) => match self.index.get(label) {
                    Some(idx) => out.push(Cell::Number(*idx as f64)),
                    None => {
                        return Err(
                            self.phase_error("transform", format!("unseen category '{}'", label))
                        )
                    }
                },
                Cell::Null => out.push(Cell::Null),
                other => {
                    return Err(self
                        .phase_error("transform", format!("expected a text cell, found {:?}", other)))
                }
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
                Cell::Number(n) => {
                    let idx = n.round();
                    let label = (idx >= 0.0)
                        .then(|| self.categories.get(idx as usize))
                        .flatten()
                        .ok_or_else(|| {
                            self.phase_error(
                                "reverse_transform",
                                format!("index {} is outside the fitted categories", n),
                            )
                        })?;
                    out.push(Cell::Text(label.clone()));
                }
                Cell::Null => out.push(Cell::Null),
                other => {
                    return Err(self.phase_error(
                        "reverse_transform",
                        format!("expected a numeric cell, found {:?}", other),
                    ))
                }
            }
        }
        Ok(Table::with_column(self.config.column.clone(), out))
    }
}
