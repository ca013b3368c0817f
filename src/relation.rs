// Copyright 2025 Cowboy AI, LLC.

//! Dominance relations between two aligned fuzzy numbers.
//!
//! Each relation is a predicate over every aligned level and is evaluated on
//! its own. The six verdicts are neither mutually exclusive nor exhaustive:
//! `>` and `>=` can hold together, and for overlapping numbers none of the
//! order relations may hold.
//!
//! `A > B` means A's intervals strictly contain B's at every level
//! (`l_a < l_b` and `r_a > r_b`); `A < B` is the strict reverse.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::AlignedPair;
use crate::alpha_cut::AlphaCut;
use crate::errors::FuzzyError;

/// Order-like relation between two fuzzy numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl Relation {
    /// All relations in table order
    pub const ALL: [Relation; 6] = [
        Relation::Greater,
        Relation::GreaterOrEqual,
        Relation::Less,
        Relation::LessOrEqual,
        Relation::Equal,
        Relation::NotEqual,
    ];

    /// Operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Greater => ">",
            Relation::GreaterOrEqual => ">=",
            Relation::Less => "<",
            Relation::LessOrEqual => "<=",
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
        }
    }

    fn holds_at(&self, a: &AlphaCut, b: &AlphaCut) -> bool {
        let (la, ra) = a.interval();
        let (lb, rb) = b.interval();
        match self {
            Relation::Greater => la < lb && ra > rb,
            Relation::GreaterOrEqual => la <= lb && ra >= rb,
            Relation::Less => la > lb && ra < rb,
            Relation::LessOrEqual => la >= lb && ra <= rb,
            Relation::Equal => la == lb && ra == rb,
            Relation::NotEqual => la != lb || ra != rb,
        }
    }

    /// Evaluate this relation across every aligned level.
    ///
    /// `!=` holds when *any* level differs; all others must hold at *every* level.
    pub fn evaluate(&self, pair: &AlignedPair) -> bool {
        let mut levels = pair.levels();
        match self {
            Relation::NotEqual => levels.any(|(a, b)| self.holds_at(a, b)),
            _ => levels.all(|(a, b)| self.holds_at(a, b)),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Relation {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The calculator labels equality with a single `=`.
        let symbol = match s.trim() {
            "=" => "==",
            trimmed => trimmed,
        };
        Self::ALL
            .into_iter()
            .find(|r| r.symbol() == symbol)
            .ok_or_else(|| FuzzyError::UnknownOperator(s.to_string()))
    }
}

/// The six verdicts for one aligned pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationTable {
    verdicts: [bool; 6],
}

impl RelationTable {
    /// Verdict for one relation
    pub fn get(&self, relation: Relation) -> bool {
        self.verdicts[relation as usize]
    }

    /// `(relation, verdict)` in table order
    pub fn iter(&self) -> impl Iterator<Item = (Relation, bool)> + '_ {
        Relation::ALL.into_iter().zip(self.verdicts)
    }

    /// Relations that hold
    pub fn holds(&self) -> Vec<Relation> {
        self.iter().filter(|(_, v)| *v).map(|(r, _)| r).collect()
    }

    /// `{symbol: verdict}` in table order, as the host displays it
    pub fn to_symbol_map(&self) -> IndexMap<&'static str, bool> {
        self.iter().map(|(r, v)| (r.symbol(), v)).collect()
    }
}

/// Evaluate every relation for `pair`.
pub fn compare(pair: &AlignedPair) -> RelationTable {
    let verdicts = Relation::ALL.map(|r| r.evaluate(pair));
    debug!(levels = pair.len(), ?verdicts, "compared fuzzy numbers");
    RelationTable { verdicts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::align;
    use crate::alpha_cut::AlphaCutSet;

    fn pair(a: &[(f64, f64, f64)], b: &[(f64, f64, f64)]) -> AlignedPair {
        align(
            &AlphaCutSet::from_triples(a).unwrap(),
            &AlphaCutSet::from_triples(b).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_table_indexing_matches_enum_order() {
        for (i, relation) in Relation::ALL.iter().enumerate() {
            assert_eq!(*relation as usize, i);
        }
    }

    #[test]
    fn test_overlapping_numbers() {
        let table = compare(&pair(&[(0.0, 1.0, 9.0)], &[(0.0, 2.0, 10.0)]));
        assert_eq!(table.holds(), vec![Relation::NotEqual]);
    }

    #[test]
    fn test_strict_containment_holds_with_non_strict() {
        let table = compare(&pair(&[(0.0, 1.0, 9.0)], &[(0.0, 2.0, 8.0)]));
        assert!(table.get(Relation::Greater));
        assert!(table.get(Relation::GreaterOrEqual));
        assert!(!table.get(Relation::Less));
        assert!(!table.get(Relation::LessOrEqual));
        assert!(table.get(Relation::NotEqual));

        let reversed = compare(&pair(&[(0.0, 2.0, 8.0)], &[(0.0, 1.0, 9.0)]));
        assert_eq!(
            reversed.holds(),
            vec![Relation::Less, Relation::LessOrEqual, Relation::NotEqual]
        );
    }

    #[test]
    fn test_equal_numbers() {
        let table = compare(&pair(
            &[(0.0, 1.0, 9.0), (1.0, 3.0, 4.0)],
            &[(0.0, 1.0, 9.0), (1.0, 3.0, 4.0)],
        ));
        assert_eq!(
            table.holds(),
            vec![Relation::GreaterOrEqual, Relation::LessOrEqual, Relation::Equal]
        );
    }

    #[test]
    fn test_not_equal_is_any_level() {
        let p = pair(
            &[(0.0, 1.0, 9.0), (1.0, 3.0, 4.0)],
            &[(0.0, 1.0, 9.0), (1.0, 3.0, 5.0)],
        );
        assert!(Relation::NotEqual.evaluate(&p));
        assert!(!Relation::Equal.evaluate(&p));
    }

    #[test]
    fn test_symbol_map_order() {
        let table = compare(&pair(&[(0.0, 1.0, 9.0)], &[(0.0, 1.0, 9.0)]));
        let keys: Vec<_> = table.to_symbol_map().keys().copied().collect();
        assert_eq!(keys, vec![">", ">=", "<", "<=", "==", "!="]);
        assert!(table.to_symbol_map()["=="]);
    }

    #[test]
    fn test_relation_from_symbol() {
        assert_eq!("=".parse::<Relation>().unwrap(), Relation::Equal);
        assert_eq!(">=".parse::<Relation>().unwrap(), Relation::GreaterOrEqual);
        assert!("=>".parse::<Relation>().is_err());
    }

    #[test]
    fn test_unknown_relation_keeps_raw_input() {
        assert_eq!(
            " <> ".parse::<Relation>(),
            Err(FuzzyError::UnknownOperator(" <> ".to_string()))
        );
        assert_eq!(
            " % ".parse::<crate::arithmetic::ArithmeticOp>(),
            Err(FuzzyError::UnknownOperator(" % ".to_string()))
        );
    }
}
