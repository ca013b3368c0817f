// Copyright 2025 Cowboy AI, LLC.

//! Calculator session: the host-side state around the pure core.
//!
//! A session owns the two operands, the last result and the set of outlines
//! already handed to the plotter. Aligning for an operation rewrites both
//! operands in the session with their aligned form, mirroring how the editing
//! grid shows the aligned rows. A failed operation leaves the previous result untouched.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alignment::{AlignedPair, Aligner, AlignmentOptions};
use crate::alpha_cut::AlphaCutSet;
use crate::arithmetic::{compute, ArithmeticOp};
use crate::errors::FuzzyResult;
use crate::membership::MembershipOutline;
use crate::relation::{compare, RelationTable};
use crate::rows::{RawRow, RejectedRow};

/// A set held by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// First operand
    A,
    /// Second operand
    B,
    /// Result
    C,
}

/// Legend label of a plotted outline. The result is labelled by the operation
/// that produced it, so results of different operations plot side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotLabel {
    /// Operand A
    A,
    /// Operand B
    B,
    /// Result, with the operation that produced it if any
    C(Option<ArithmeticOp>),
}

impl Display for PlotLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PlotLabel::A => f.write_str("A"),
            PlotLabel::B => f.write_str("B"),
            PlotLabel::C(None) => f.write_str("C"),
            PlotLabel::C(Some(op)) => write!(f, "({op}) C"),
        }
    }
}

/// Operands, result and plot bookkeeping for one calculator window.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    aligner: Aligner,
    a: AlphaCutSet,
    b: AlphaCutSet,
    c: AlphaCutSet,
    c_origin: Option<ArithmeticOp>,
    plotted: IndexSet<PlotLabel>,
}

impl Calculator {
    /// Create a session over two operands with default alignment options.
    pub fn new(a: AlphaCutSet, b: AlphaCutSet) -> Self {
        Self::with_options(a, b, AlignmentOptions::default())
    }

    /// Create a session with explicit alignment options.
    pub fn with_options(a: AlphaCutSet, b: AlphaCutSet, options: AlignmentOptions) -> Self {
        Self {
            aligner: Aligner::new(options),
            a,
            b,
            ..Default::default()
        }
    }

    /// The set in `slot`
    pub fn get(&self, slot: Slot) -> &AlphaCutSet {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
            Slot::C => &self.c,
        }
    }

    /// Replace the set in `slot`. Replacing C forgets its origin.
    pub fn set(&mut self, slot: Slot, set: AlphaCutSet) {
        match slot {
            Slot::A => self.a = set,
            Slot::B => self.b = set,
            Slot::C => {
                self.c = set;
                self.c_origin = None;
            }
        }
    }

    /// Replace the set in `slot` from host rows, returning the dropped rows.
    pub fn load(&mut self, slot: Slot, rows: &[RawRow]) -> Vec<RejectedRow> {
        let ingest = AlphaCutSet::from_rows(rows);
        self.set(slot, ingest.set);
        ingest.rejected
    }

    /// Label the result would be plotted under
    pub fn result_label(&self) -> PlotLabel {
        PlotLabel::C(self.c_origin)
    }

    fn label(&self, slot: Slot) -> PlotLabel {
        match slot {
            Slot::A => PlotLabel::A,
            Slot::B => PlotLabel::B,
            Slot::C => self.result_label(),
        }
    }

    fn align_in_place(&mut self) -> FuzzyResult<AlignedPair> {
        let alignment = self.aligner.align(&self.a, &self.b)?;
        debug!(
            resampled = ?alignment.resampled,
            dropped = alignment.dropped.len(),
            "writing aligned operands back"
        );
        self.a = alignment.pair.left().clone();
        self.b = alignment.pair.right().clone();
        Ok(alignment.pair)
    }

    /// Align A and B, then store `A op B` as the new result.
    pub fn calculate(&mut self, op: ArithmeticOp) -> FuzzyResult<&AlphaCutSet> {
        let pair = self.align_in_place()?;
        let result = compute(op, &pair)?;
        info!(%op, levels = result.len(), "result replaced");
        self.c = result;
        self.c_origin = Some(op);
        Ok(&self.c)
    }

    /// Align A and B, then evaluate every relation.
    pub fn compare(&mut self) -> FuzzyResult<RelationTable> {
        let pair = self.align_in_place()?;
        Ok(compare(&pair))
    }

    /// Exchange A and B.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
    }

    /// Build the outline of `slot` for plotting. Returns `None` when an
    /// outline under the same label has already been plotted.
    pub fn plot(&mut self, slot: Slot) -> FuzzyResult<Option<MembershipOutline>> {
        let label = self.label(slot);
        if self.plotted.contains(&label) {
            return Ok(None);
        }
        let outline = MembershipOutline::of(self.get(slot))?;
        self.plotted.insert(label);
        Ok(Some(outline))
    }

    /// Labels plotted so far, in plotting order
    pub fn plotted(&self) -> impl Iterator<Item = &PlotLabel> {
        self.plotted.iter()
    }

    /// Forget every plotted outline.
    pub fn clear_plot(&mut self) {
        self.plotted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FuzzyError;

    fn session() -> Calculator {
        Calculator::new(
            AlphaCutSet::from_triples(&[(0.0, 1.0, 9.0), (0.5, 2.0, 8.0), (1.0, 3.0, 4.0)])
                .unwrap(),
            AlphaCutSet::from_triples(&[
                (0.0, 1.0, 9.0),
                (0.2, 2.0, 7.0),
                (0.5, 3.0, 6.0),
                (1.0, 4.0, 5.0),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_calculate_writes_back_resampled_operand() {
        let mut calc = session();
        let c = calc.calculate(ArithmeticOp::Add).unwrap();
        assert_eq!(c.interval_at(1.0), Some((7.0, 9.0)));
        assert_eq!(calc.get(Slot::A).alpha_levels(), vec![0.0, 0.2, 0.5, 1.0]);
        assert_eq!(calc.result_label().to_string(), "(+) C");
    }

    #[test]
    fn test_dropped_level_leaves_both_operands_on_shared_grid() {
        let mut calc = Calculator::new(
            AlphaCutSet::from_triples(&[(0.5, 2.0, 8.0), (1.0, 3.0, 4.0)]).unwrap(),
            AlphaCutSet::from_triples(&[(0.0, 1.0, 9.0), (0.5, 3.0, 6.0), (1.0, 4.0, 5.0)])
                .unwrap(),
        );
        let c = calc.calculate(ArithmeticOp::Add).unwrap();
        assert_eq!(c.intervals(), vec![(5.0, 14.0), (7.0, 9.0)]);
        assert_eq!(calc.get(Slot::A).alpha_levels(), vec![0.5, 1.0]);
        assert_eq!(calc.get(Slot::B).alpha_levels(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_failed_calculation_keeps_result() {
        let mut calc = session();
        calc.calculate(ArithmeticOp::Add).unwrap();
        let before = calc.get(Slot::C).clone();

        assert_eq!(
            calc.calculate(ArithmeticOp::Subtract),
            Err(FuzzyError::NegativeResult { alpha: 0.2 })
        );
        assert_eq!(calc.get(Slot::C), &before);
        assert_eq!(calc.result_label(), PlotLabel::C(Some(ArithmeticOp::Add)));
    }

    #[test]
    fn test_swap() {
        let mut calc = session();
        let (a, b) = (calc.get(Slot::A).clone(), calc.get(Slot::B).clone());
        calc.swap();
        assert_eq!(calc.get(Slot::A), &b);
        assert_eq!(calc.get(Slot::B), &a);
    }

    #[test]
    fn test_plot_guard() {
        let mut calc = session();
        assert!(calc.plot(Slot::A).unwrap().is_some());
        assert!(calc.plot(Slot::A).unwrap().is_none());

        calc.calculate(ArithmeticOp::Add).unwrap();
        assert!(calc.plot(Slot::C).unwrap().is_some());
        calc.calculate(ArithmeticOp::Multiply).unwrap();
        assert!(calc.plot(Slot::C).unwrap().is_some());

        let labels: Vec<String> = calc.plotted().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["A", "(+) C", "(*) C"]);

        calc.clear_plot();
        assert_eq!(calc.plotted().count(), 0);
        assert!(calc.plot(Slot::A).unwrap().is_some());
    }

    #[test]
    fn test_plot_rejects_invalid_set_without_recording() {
        let mut calc = session();
        calc.set(
            Slot::B,
            AlphaCutSet::from_triples(&[(0.0, 5.0, 9.0), (1.0, 3.0, 4.0)]).unwrap(),
        );
        assert!(calc.plot(Slot::B).is_err());
        assert_eq!(calc.plotted().count(), 0);
    }

    #[test]
    fn test_load_rows() {
        let mut calc = session();
        let rejected = calc.load(
            Slot::A,
            &[RawRow::new(0, 1, 9), RawRow::new("bad", 2, 8), RawRow::new(1, 3, 4)],
        );
        assert_eq!(rejected.len(), 1);
        assert_eq!(calc.get(Slot::A).len(), 2);
    }

    #[test]
    fn test_compare_on_empty_operand() {
        let mut calc = session();
        calc.load(Slot::A, &[RawRow::new("x", "y", "z")]);
        assert_eq!(calc.compare(), Err(FuzzyError::EmptySet));
    }
}
