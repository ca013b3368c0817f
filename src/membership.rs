// Copyright 2025 Cowboy AI, LLC.

//! Piecewise-linear membership outline of a fuzzy number, ready for a plotter.

use serde::{Deserialize, Serialize};

use crate::alpha_cut::{AlphaCutSet, Valid};
use crate::errors::FuzzyResult;

/// A point `(x, μ(x))` on the membership outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipPoint {
    /// Value on the real line
    pub x: f64,
    /// Membership degree
    pub mu: f64,
}

/// Closed outline: up the lower bounds, then down the upper bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipOutline {
    points: Vec<MembershipPoint>,
}

impl MembershipOutline {
    /// Build the outline of a validated set.
    pub fn from_valid(valid: Valid<'_>) -> Self {
        let cuts = valid.set().cuts();
        let rising = cuts.iter().map(|c| MembershipPoint {
            x: c.lower(),
            mu: c.alpha(),
        });
        let falling = cuts.iter().rev().map(|c| MembershipPoint {
            x: c.upper(),
            mu: c.alpha(),
        });
        Self {
            points: rising.chain(falling).collect(),
        }
    }

    /// Validate `set` and build its outline.
    pub fn of(set: &AlphaCutSet) -> FuzzyResult<Self> {
        Ok(Self::from_valid(set.validate()?))
    }

    /// Outline points in drawing order
    pub fn points(&self) -> &[MembershipPoint] {
        &self.points
    }

    /// x coordinates in drawing order
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Membership coordinates in drawing order
    pub fn mus(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.mu).collect()
    }
}
