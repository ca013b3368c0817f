// Copyright 2025 Cowboy AI, LLC.

//! Ingestion of host-supplied rows.
//!
//! Hosts hand over each operand as editable grid rows whose fields are text.
//! Ingestion is lenient: a row that cannot become a proper alpha-cut is
//! dropped and reported, and the remaining rows still form a set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::alpha_cut::{AlphaCut, AlphaCutSet};
use crate::errors::{FuzzyError, FuzzyResult};

/// A grid row as the host stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawRow {
    /// Confidence level text
    pub alpha: String,
    /// Lower bound text
    pub lower: String,
    /// Upper bound text
    pub upper: String,
}

impl RawRow {
    /// Create a row from any three displayable fields.
    pub fn new(alpha: impl ToString, lower: impl ToString, upper: impl ToString) -> Self {
        Self {
            alpha: alpha.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    fn parse(&self, row: usize) -> FuzzyResult<AlphaCut> {
        let field = |name: &'static str, text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| FuzzyError::NonNumericInput { row, field: name })
        };
        let alpha = field("alpha", &self.alpha)?;
        let lower = field("lower", &self.lower)?;
        let upper = field("upper", &self.upper)?;
        AlphaCut::proper(alpha, lower, upper)
    }
}

impl From<&AlphaCut> for RawRow {
    fn from(cut: &AlphaCut) -> Self {
        Self::new(cut.alpha(), cut.lower(), cut.upper())
    }
}

/// A row that was dropped during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// Zero-based index of the row in the host's input
    pub row: usize,
    /// Why the row was dropped
    pub error: FuzzyError,
}

/// Outcome of ingesting host rows: the surviving set plus what was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIngest {
    /// Cuts built from the accepted rows
    pub set: AlphaCutSet,
    /// Rows that were dropped, in input order
    pub rejected: Vec<RejectedRow>,
}

impl RowIngest {
    /// True when no row was dropped
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Discard the report and keep the set
    pub fn into_set(self) -> AlphaCutSet {
        self.set
    }
}

impl AlphaCutSet {
    /// Build a set from host rows, dropping rows that are not numeric or not
    /// a proper cut. When two rows share an α level the first one wins.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a RawRow>) -> RowIngest {
        let mut accepted: Vec<AlphaCut> = Vec::new();
        let mut rejected = Vec::new();

        for (row, raw) in rows.into_iter().enumerate() {
            let parsed = raw.parse(row).and_then(|cut| {
                if accepted.iter().any(|c| c.alpha() == cut.alpha()) {
                    Err(FuzzyError::DuplicateAlpha { alpha: cut.alpha() })
                } else {
                    Ok(cut)
                }
            });
            match parsed {
                Ok(cut) => accepted.push(cut),
                Err(error) => {
                    warn!(row, %error, "dropping host row");
                    rejected.push(RejectedRow { row, error });
                }
            }
        }

        accepted.sort_by(|a, b| a.alpha().total_cmp(&b.alpha()));
        RowIngest {
            set: AlphaCutSet::from_sorted(accepted),
            rejected,
        }
    }

    /// Build a set from a JSON array of `[alpha, lower, upper]` rows whose
    /// fields are numbers or numeric strings.
    pub fn from_json(json: &str) -> FuzzyResult<RowIngest> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(rows) = value else {
            return Err(FuzzyError::Serialization(
                "expected a JSON array of rows".to_string(),
            ));
        };
        let raw: Vec<RawRow> = rows.iter().map(json_row).collect();
        Ok(Self::from_rows(&raw))
    }

    /// Render the set as host rows.
    pub fn to_rows(&self) -> Vec<RawRow> {
        self.iter().map(RawRow::from).collect()
    }
}

fn json_row(value: &Value) -> RawRow {
    let field = |i: usize| match value.get(i) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };
    RawRow {
        alpha: field(0),
        lower: field(1),
        upper: field(2),
    }
}
