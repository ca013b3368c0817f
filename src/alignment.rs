// Copyright 2025 Cowboy AI, LLC.

//! Alignment of two alpha-cut sets onto a shared grid of α levels.
//!
//! The grid is the sorted union of both operands' α levels. One operand, the
//! *reference*, is resampled onto that grid by piecewise-linear interpolation;
//! the other is returned unchanged. By default the operand with fewer cuts is
//! resampled (B on a tie), so callers should read [`Alignment::resampled`] to
//! learn which of their inputs was rewritten.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alpha_cut::{AlphaCut, AlphaCutSet};
use crate::errors::{FuzzyError, FuzzyResult};

/// Which operand gets resampled onto the common grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Resample the operand with fewer cuts; B when both have the same count
    #[default]
    Shorter,
    /// Always resample A
    Left,
    /// Always resample B
    Right,
}

/// What to do with a grid level outside the reference operand's α range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Omit the level from both operands
    #[default]
    Drop,
    /// Fail with [`FuzzyError::UnalignableAlpha`]
    Reject,
}

/// Alignment knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AlignmentOptions {
    /// Reference selection
    pub reference: ReferencePolicy,
    /// Handling of levels that cannot be interpolated
    pub out_of_range: OutOfRangePolicy,
}

impl AlignmentOptions {
    /// Options that surface every unalignable level as an error.
    pub fn strict() -> Self {
        Self {
            reference: ReferencePolicy::Shorter,
            out_of_range: OutOfRangePolicy::Reject,
        }
    }
}

/// Positional operand of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Operand {
    /// Left operand
    A,
    /// Right operand
    B,
}

/// Two sets sharing an identical ascending sequence of α levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedPair {
    left: AlphaCutSet,
    right: AlphaCutSet,
}

impl AlignedPair {
    fn new(left: AlphaCutSet, right: AlphaCutSet) -> FuzzyResult<Self> {
        let (left_levels, right_levels) = (left.alpha_levels(), right.alpha_levels());
        if left_levels != right_levels {
            return Err(FuzzyError::MisalignedGrid {
                left: left_levels,
                right: right_levels,
            });
        }
        Ok(Self { left, right })
    }

    /// Aligned A
    pub fn left(&self) -> &AlphaCutSet {
        &self.left
    }

    /// Aligned B
    pub fn right(&self) -> &AlphaCutSet {
        &self.right
    }

    /// The operand at `side`
    pub fn operand(&self, side: Operand) -> &AlphaCutSet {
        match side {
            Operand::A => &self.left,
            Operand::B => &self.right,
        }
    }

    /// Shared α levels
    pub fn alpha_levels(&self) -> Vec<f64> {
        self.left.alpha_levels()
    }

    /// Number of shared levels
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// True when the grid is empty
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Iterate level by level as `(a, b)` cut pairs with equal α.
    pub fn levels(&self) -> impl Iterator<Item = (&AlphaCut, &AlphaCut)> + '_ {
        self.left.iter().zip(self.right.iter())
    }

    /// The same grid with A and B exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            left: self.right.clone(),
            right: self.left.clone(),
        }
    }

    /// Split into `(A', B')`
    pub fn into_parts(self) -> (AlphaCutSet, AlphaCutSet) {
        (self.left, self.right)
    }
}

/// Result of an alignment: the pair plus what happened to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// The aligned operands, in input order
    pub pair: AlignedPair,
    /// Operand that was resampled and should be written back by the host
    pub resampled: Operand,
    /// Grid levels omitted from both operands because the reference could
    /// not be interpolated there
    pub dropped: Vec<f64>,
}

impl Alignment {
    /// The resampled operand as it now stands
    pub fn resampled_set(&self) -> &AlphaCutSet {
        self.pair.operand(self.resampled)
    }
}

/// Resamples one operand of a pair onto the union grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    options: AlignmentOptions,
}

impl Aligner {
    /// Create an aligner with the given options
    pub fn new(options: AlignmentOptions) -> Self {
        Self { options }
    }

    /// Current options
    pub fn options(&self) -> AlignmentOptions {
        self.options
    }

    /// Align `a` and `b` onto the sorted union of their α levels.
    pub fn align(&self, a: &AlphaCutSet, b: &AlphaCutSet) -> FuzzyResult<Alignment> {
        a.require_non_empty()?;
        b.require_non_empty()?;

        let grid = common_grid(a, b);
        let resampled = match self.options.reference {
            ReferencePolicy::Shorter if a.len() < b.len() => Operand::A,
            ReferencePolicy::Shorter => Operand::B,
            ReferencePolicy::Left => Operand::A,
            ReferencePolicy::Right => Operand::B,
        };
        debug!(
            left = a.len(),
            right = b.len(),
            grid = grid.len(),
            ?resampled,
            "aligning alpha-cut sets"
        );

        let (reference, other) = match resampled {
            Operand::A => (a, b),
            Operand::B => (b, a),
        };
        let (rewritten, dropped) = resample(reference, &grid, self.options.out_of_range)?;
        let other = if dropped.is_empty() {
            other.clone()
        } else {
            warn!(?dropped, "alpha levels outside the reference range were dropped");
            without_levels(other, &dropped)
        };

        let pair = match resampled {
            Operand::A => AlignedPair::new(rewritten, other)?,
            Operand::B => AlignedPair::new(other, rewritten)?,
        };
        Ok(Alignment {
            pair,
            resampled,
            dropped,
        })
    }
}

/// Align with default options and keep only the pair.
pub fn align(a: &AlphaCutSet, b: &AlphaCutSet) -> FuzzyResult<AlignedPair> {
    Ok(Aligner::default().align(a, b)?.pair)
}

/// Sorted, de-duplicated union of both sets' α levels.
pub fn common_grid(a: &AlphaCutSet, b: &AlphaCutSet) -> Vec<f64> {
    let mut grid: Vec<f64> = a.iter().chain(b.iter()).map(AlphaCut::alpha).collect();
    grid.sort_by(f64::total_cmp);
    grid.dedup();
    grid
}

/// Resample `reference` onto `grid`, returning the new set and the levels
/// that fell outside the reference's range (always empty under `Reject`).
/// `grid` must be ascending without repeats, as produced by [`common_grid`].
pub fn resample(
    reference: &AlphaCutSet,
    grid: &[f64],
    out_of_range: OutOfRangePolicy,
) -> FuzzyResult<(AlphaCutSet, Vec<f64>)> {
    let cuts = reference.cuts();
    let mut resampled = Vec::with_capacity(grid.len());
    let mut dropped = Vec::new();

    for &alpha in grid {
        if let Some(i) = reference.position(alpha) {
            resampled.push(cuts[i]);
            continue;
        }
        let bracket = cuts
            .windows(2)
            .find(|w| w[0].alpha() < alpha && alpha < w[1].alpha());
        match (bracket, out_of_range) {
            (Some(w), _) => resampled.push(interpolate(&w[0], &w[1], alpha)?),
            (None, OutOfRangePolicy::Drop) => dropped.push(alpha),
            (None, OutOfRangePolicy::Reject) => {
                return Err(FuzzyError::UnalignableAlpha { alpha });
            }
        }
    }

    Ok((AlphaCutSet::from_sorted(resampled), dropped))
}

fn without_levels(set: &AlphaCutSet, dropped: &[f64]) -> AlphaCutSet {
    AlphaCutSet::from_sorted(
        set.iter()
            .filter(|cut| !dropped.contains(&cut.alpha()))
            .copied()
            .collect(),
    )
}

fn interpolate(below: &AlphaCut, above: &AlphaCut, alpha: f64) -> FuzzyResult<AlphaCut> {
    let t = (alpha - below.alpha()) / (above.alpha() - below.alpha());
    let lerp = |b1: f64, b2: f64| b1 + (b2 - b1) * t;
    AlphaCut::derived(
        alpha,
        lerp(below.lower(), above.lower()),
        lerp(below.upper(), above.upper()),
    )
}
