// Copyright 2025 Cowboy AI, LLC.

//! Level-wise interval arithmetic on aligned alpha-cut sets.
//!
//! Fuzzy numbers here model non-negative quantities, so subtraction refuses
//! negative bounds and multiplication assumes positive operands. Division
//! crosses the bounds (`l_a / r_b`, `r_a / l_b`), the interval rule for
//! strictly positive denominators. Failures abort the whole operation; no
//! partial result is ever returned. A bound that overflows to infinity
//! fails with [`FuzzyError::NonFiniteResult`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::AlignedPair;
use crate::alpha_cut::{AlphaCut, AlphaCutSet};
use crate::errors::{FuzzyError, FuzzyResult};

/// Binary operation on two fuzzy numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl ArithmeticOp {
    /// All operations in display order
    pub const ALL: [ArithmeticOp; 4] = [
        ArithmeticOp::Add,
        ArithmeticOp::Subtract,
        ArithmeticOp::Multiply,
        ArithmeticOp::Divide,
    ];

    /// Operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
        }
    }

    /// Apply this operation to an aligned pair.
    pub fn apply(&self, pair: &AlignedPair) -> FuzzyResult<AlphaCutSet> {
        compute(*self, pair)
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ArithmeticOp {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s.trim())
            .ok_or_else(|| FuzzyError::UnknownOperator(s.to_string()))
    }
}

/// Combine A' and B' level by level. The result carries the shared α levels.
pub fn compute(op: ArithmeticOp, pair: &AlignedPair) -> FuzzyResult<AlphaCutSet> {
    if pair.is_empty() {
        return Err(FuzzyError::EmptySet);
    }
    debug!(%op, levels = pair.len(), "computing fuzzy arithmetic");

    let cuts: Vec<AlphaCut> = match op {
        ArithmeticOp::Add => {
            combine(pair, |a, b| (a.lower() + b.lower(), a.upper() + b.upper()))?
        }
        ArithmeticOp::Subtract => {
            let cuts = combine(pair, |a, b| (a.lower() - b.lower(), a.upper() - b.upper()))?;
            if let Some(cut) = cuts.iter().find(|c| c.lower() < 0.0 || c.upper() < 0.0) {
                return Err(FuzzyError::NegativeResult { alpha: cut.alpha() });
            }
            cuts
        }
        ArithmeticOp::Multiply => {
            combine(pair, |a, b| (a.lower() * b.lower(), a.upper() * b.upper()))?
        }
        ArithmeticOp::Divide => {
            if let Some((_, b)) = pair
                .levels()
                .find(|(_, b)| b.lower() == 0.0 || b.upper() == 0.0)
            {
                return Err(FuzzyError::DivisionByZero { alpha: b.alpha() });
            }
            combine(pair, |a, b| (a.lower() / b.upper(), a.upper() / b.lower()))?
        }
    };

    Ok(AlphaCutSet::from_sorted(cuts))
}

fn combine(
    pair: &AlignedPair,
    f: impl Fn(&AlphaCut, &AlphaCut) -> (f64, f64),
) -> FuzzyResult<Vec<AlphaCut>> {
    pair.levels()
        .map(|(a, b)| {
            let (lower, upper) = f(a, b);
            AlphaCut::derived(a.alpha(), lower, upper)
        })
        .collect()
}

impl AlignedPair {
    /// `A + B`
    pub fn add(&self) -> FuzzyResult<AlphaCutSet> {
        compute(ArithmeticOp::Add, self)
    }

    /// `A - B`
    pub fn sub(&self) -> FuzzyResult<AlphaCutSet> {
        compute(ArithmeticOp::Subtract, self)
    }

    /// `A * B`
    pub fn mul(&self) -> FuzzyResult<AlphaCutSet> {
        compute(ArithmeticOp::Multiply, self)
    }

    /// `A / B`
    pub fn div(&self) -> FuzzyResult<AlphaCutSet> {
        compute(ArithmeticOp::Divide, self)
    }
}
