// Copyright 2025 Cowboy AI, LLC.

//! Alpha-cuts and alpha-cut sets.
//!
//! A fuzzy number is sampled as a finite family of nested intervals, one per
//! confidence level α ∈ [0, 1]. [`AlphaCutSet`] keeps those samples sorted by α
//! with unique levels. Sets are immutable: every operation that changes a set
//! returns a new one.

use std::fmt::{self, Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{FuzzyError, FuzzyResult};

/// One side of an alpha-cut interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BoundSide {
    /// The left (lower) bound
    Lower,
    /// The right (upper) bound
    Upper,
}

impl Display for BoundSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Lower => f.write_str("lower"),
            BoundSide::Upper => f.write_str("upper"),
        }
    }
}

/// A single alpha-cut: the interval `[lower, upper]` at confidence level `alpha`.
///
/// Serialized as the host row `[alpha, lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct AlphaCut {
    alpha: f64,
    lower: f64,
    upper: f64,
}

impl AlphaCut {
    /// Create a cut, rejecting non-finite values and α outside `[0, 1]`.
    ///
    /// Bound ordering is not enforced here; results of interval subtraction
    /// may legitimately be improper. See [`AlphaCut::is_proper`].
    pub fn new(alpha: f64, lower: f64, upper: f64) -> FuzzyResult<Self> {
        if !(alpha.is_finite() && lower.is_finite() && upper.is_finite()) {
            return Err(FuzzyError::NonFiniteValue);
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(FuzzyError::AlphaOutOfRange { alpha });
        }
        Ok(Self {
            alpha,
            lower,
            upper,
        })
    }

    /// Create a cut whose bounds must satisfy `lower <= upper`.
    pub fn proper(alpha: f64, lower: f64, upper: f64) -> FuzzyResult<Self> {
        let cut = Self::new(alpha, lower, upper)?;
        if !cut.is_proper() {
            return Err(FuzzyError::InvertedBounds {
                alpha,
                lower,
                upper,
            });
        }
        Ok(cut)
    }

    /// Internal constructor for values derived from already-checked cuts.
    /// Bound ordering is not enforced, finiteness is.
    pub(crate) fn derived(alpha: f64, lower: f64, upper: f64) -> FuzzyResult<Self> {
        if !(lower.is_finite() && upper.is_finite()) {
            return Err(FuzzyError::NonFiniteResult { alpha });
        }
        Ok(Self {
            alpha,
            lower,
            upper,
        })
    }

    /// Confidence level
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Lower bound
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The `(lower, upper)` pair
    pub fn interval(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Bound on the given side
    pub fn bound(&self, side: BoundSide) -> f64 {
        match side {
            BoundSide::Lower => self.lower,
            BoundSide::Upper => self.upper,
        }
    }

    /// True when `lower <= upper`.
    pub fn is_proper(&self) -> bool {
        self.lower <= self.upper
    }
}

impl TryFrom<[f64; 3]> for AlphaCut {
    type Error = FuzzyError;

    fn try_from([alpha, lower, upper]: [f64; 3]) -> FuzzyResult<Self> {
        Self::new(alpha, lower, upper)
    }
}

impl From<AlphaCut> for [f64; 3] {
    fn from(cut: AlphaCut) -> Self {
        [cut.alpha, cut.lower, cut.upper]
    }
}

impl Display for AlphaCut {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "α={}: [{}, {}]", self.alpha, self.lower, self.upper)
    }
}

/// Proof that a set passed [`AlphaCutSet::validate`].
#[derive(Debug, Clone, Copy)]
pub struct Valid<'a> {
    set: &'a AlphaCutSet,
}

impl<'a> Valid<'a> {
    /// The validated set
    pub fn set(&self) -> &'a AlphaCutSet {
        self.set
    }
}

/// Alpha-cuts sorted ascending by α with unique α levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AlphaCut>", into = "Vec<AlphaCut>")]
pub struct AlphaCutSet {
    cuts: Vec<AlphaCut>,
}

impl AlphaCutSet {
    /// Create an empty set.
    pub fn empty() -> Self {
        Self { cuts: Vec::new() }
    }

    /// Build a set from cuts in any order. Duplicate α levels are rejected.
    pub fn new(cuts: impl IntoIterator<Item = AlphaCut>) -> FuzzyResult<Self> {
        let mut cuts: Vec<AlphaCut> = cuts.into_iter().collect();
        cuts.sort_by(|a, b| a.alpha.total_cmp(&b.alpha));
        if let Some(pair) = cuts.windows(2).find(|w| w[0].alpha == w[1].alpha) {
            return Err(FuzzyError::DuplicateAlpha {
                alpha: pair[1].alpha,
            });
        }
        Ok(Self { cuts })
    }

    /// Build a set from `(alpha, lower, upper)` triples.
    pub fn from_triples(triples: &[(f64, f64, f64)]) -> FuzzyResult<Self> {
        let cuts = triples
            .iter()
            .map(|&(alpha, lower, upper)| AlphaCut::new(alpha, lower, upper))
            .collect::<FuzzyResult<Vec<_>>>()?;
        Self::new(cuts)
    }

    /// Wrap cuts that are already sorted with unique α levels.
    pub(crate) fn from_sorted(cuts: Vec<AlphaCut>) -> Self {
        debug_assert!(cuts.windows(2).all(|w| w[0].alpha < w[1].alpha));
        Self { cuts }
    }

    /// Check the nesting invariant: `lower` non-decreasing and `upper`
    /// non-increasing as α rises. The lower side is reported first.
    pub fn validate(&self) -> FuzzyResult<Valid<'_>> {
        self.require_non_empty()?;
        for side in [BoundSide::Lower, BoundSide::Upper] {
            if let Some(alpha) = self.first_reversal(side) {
                return Err(FuzzyError::ConvexityViolation { side, alpha });
            }
        }
        Ok(Valid { set: self })
    }

    fn first_reversal(&self, side: BoundSide) -> Option<f64> {
        self.cuts
            .windows(2)
            .find(|w| {
                let (prev, next) = (w[0].bound(side), w[1].bound(side));
                match side {
                    BoundSide::Lower => next < prev,
                    BoundSide::Upper => next > prev,
                }
            })
            .map(|w| w[1].alpha)
    }

    /// Fail with [`FuzzyError::EmptySet`] when there are no cuts.
    pub fn require_non_empty(&self) -> FuzzyResult<()> {
        if self.cuts.is_empty() {
            Err(FuzzyError::EmptySet)
        } else {
            Ok(())
        }
    }

    /// Ascending α levels
    pub fn alpha_levels(&self) -> Vec<f64> {
        self.cuts.iter().map(|c| c.alpha).collect()
    }

    /// `(lower, upper)` pairs, index-aligned with [`alpha_levels`](Self::alpha_levels)
    pub fn intervals(&self) -> Vec<(f64, f64)> {
        self.cuts.iter().map(AlphaCut::interval).collect()
    }

    /// Exact-match lookup of the interval at `alpha`.
    pub fn interval_at(&self, alpha: f64) -> Option<(f64, f64)> {
        self.position(alpha).map(|i| self.cuts[i].interval())
    }

    pub(crate) fn position(&self, alpha: f64) -> Option<usize> {
        self.cuts.iter().position(|c| c.alpha == alpha)
    }

    /// Lowest and highest α level
    pub fn alpha_range(&self) -> Option<(f64, f64)> {
        Some((self.cuts.first()?.alpha, self.cuts.last()?.alpha))
    }

    /// Number of cuts
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// True when the set has no cuts
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Iterate cuts in ascending α order
    pub fn iter(&self) -> std::slice::Iter<'_, AlphaCut> {
        self.cuts.iter()
    }

    /// Borrow the sorted cuts
    pub fn cuts(&self) -> &[AlphaCut] {
        &self.cuts
    }

    /// Take the sorted cuts
    pub fn into_cuts(self) -> Vec<AlphaCut> {
        self.cuts
    }
}

impl TryFrom<Vec<AlphaCut>> for AlphaCutSet {
    type Error = FuzzyError;

    fn try_from(cuts: Vec<AlphaCut>) -> FuzzyResult<Self> {
        Self::new(cuts)
    }
}

impl From<AlphaCutSet> for Vec<AlphaCut> {
    fn from(set: AlphaCutSet) -> Self {
        set.cuts
    }
}

impl<'a> IntoIterator for &'a AlphaCutSet {
    type Item = &'a AlphaCut;
    type IntoIter = std::slice::Iter<'a, AlphaCut>;

    fn into_iter(self) -> Self::IntoIter {
        self.cuts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_rejects_alpha_out_of_range() {
        assert_eq!(
            AlphaCut::new(1.5, 0.0, 1.0),
            Err(FuzzyError::AlphaOutOfRange { alpha: 1.5 })
        );
        assert_eq!(
            AlphaCut::new(-0.1, 0.0, 1.0),
            Err(FuzzyError::AlphaOutOfRange { alpha: -0.1 })
        );
        assert!(AlphaCut::new(0.0, 0.0, 1.0).is_ok());
        assert!(AlphaCut::new(1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_cut_rejects_non_finite() {
        assert_eq!(
            AlphaCut::new(0.5, f64::NAN, 1.0),
            Err(FuzzyError::NonFiniteValue)
        );
        assert_eq!(
            AlphaCut::new(0.5, 1.0, f64::INFINITY),
            Err(FuzzyError::NonFiniteValue)
        );
    }

    #[test]
    fn test_proper_cut() {
        assert!(AlphaCut::proper(0.5, 2.0, 2.0).is_ok());
        assert_eq!(
            AlphaCut::proper(0.5, 3.0, 2.0),
            Err(FuzzyError::InvertedBounds {
                alpha: 0.5,
                lower: 3.0,
                upper: 2.0
            })
        );
        assert!(!AlphaCut::new(0.5, 3.0, 2.0).unwrap().is_proper());
    }

    #[test]
    fn test_set_sorts_by_alpha() {
        let set = AlphaCutSet::from_triples(&[(1.0, 3.0, 4.0), (0.0, 1.0, 9.0), (0.5, 2.0, 8.0)])
            .unwrap();
        assert_eq!(set.alpha_levels(), vec![0.0, 0.5, 1.0]);
        assert_eq!(set.intervals(), vec![(1.0, 9.0), (2.0, 8.0), (3.0, 4.0)]);
        assert_eq!(set.alpha_range(), Some((0.0, 1.0)));
    }

    #[test]
    fn test_set_rejects_duplicate_alpha() {
        let result = AlphaCutSet::from_triples(&[(0.5, 1.0, 2.0), (0.5, 1.0, 3.0)]);
        assert_eq!(result, Err(FuzzyError::DuplicateAlpha { alpha: 0.5 }));
    }

    #[test]
    fn test_validate_accepts_nested_cuts() {
        let set = AlphaCutSet::from_triples(&[(0.0, 1.0, 9.0), (0.5, 2.0, 8.0), (1.0, 3.0, 4.0)])
            .unwrap();
        let valid = set.validate().unwrap();
        assert_eq!(valid.set().len(), 3);
    }

    #[test]
    fn test_validate_accepts_flat_bounds() {
        let set = AlphaCutSet::from_triples(&[(0.0, 2.0, 5.0), (1.0, 2.0, 5.0)]).unwrap();
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_lower_side() {
        let set = AlphaCutSet::from_triples(&[(0.0, 5.0, 9.0), (0.5, 6.0, 8.0), (1.0, 3.0, 4.0)])
            .unwrap();
        assert_eq!(
            set.validate().unwrap_err(),
            FuzzyError::ConvexityViolation {
                side: BoundSide::Lower,
                alpha: 1.0
            }
        );
    }

    #[test]
    fn test_validate_reports_upper_side() {
        let set = AlphaCutSet::from_triples(&[(0.0, 1.0, 8.0), (0.5, 2.0, 9.0), (1.0, 3.0, 4.0)])
            .unwrap();
        assert_eq!(
            set.validate().unwrap_err(),
            FuzzyError::ConvexityViolation {
                side: BoundSide::Upper,
                alpha: 0.5
            }
        );
    }

    #[test]
    fn test_validate_empty_set() {
        assert_eq!(
            AlphaCutSet::empty().validate().unwrap_err(),
            FuzzyError::EmptySet
        );
    }

    #[test]
    fn test_interval_at_is_exact() {
        let set = AlphaCutSet::from_triples(&[(0.0, 1.0, 9.0), (0.5, 2.0, 8.0)]).unwrap();
        assert_eq!(set.interval_at(0.5), Some((2.0, 8.0)));
        assert_eq!(set.interval_at(0.25), None);
    }

    #[test]
    fn test_serde_row_representation() {
        let set = AlphaCutSet::from_triples(&[(0.5, 2.0, 8.0), (0.0, 1.0, 9.0)]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[[0.0,1.0,9.0],[0.5,2.0,8.0]]");

        let back: AlphaCutSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        assert!(serde_json::from_str::<AlphaCutSet>("[[0.5,1,2],[0.5,1,3]]").is_err());
        assert!(serde_json::from_str::<AlphaCut>("[2.0,1,3]").is_err());
    }
}
