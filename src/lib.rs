// Copyright 2025 Cowboy AI, LLC.

//! # Fuzzy Alpha
//!
//! Fuzzy numbers sampled as discrete alpha-cuts, and the machinery to combine
//! and compare two of them:
//! - **AlphaCutSet**: cuts sorted by α with a checked nesting invariant
//! - **Rows**: lenient ingestion of host grid rows (text or JSON)
//! - **Aligner**: resamples one operand onto the union of both α grids
//! - **Arithmetic**: level-wise `+ - * /` on an aligned pair
//! - **Relations**: the six dominance verdicts `> >= < <= == !=`
//! - **Membership**: the outline a plotter draws for a set
//! - **Calculator**: host session state (operands, result, plot guard)
//!
//! ```
//! use fuzzy_alpha::{align, compare, ArithmeticOp, AlphaCutSet, Relation};
//!
//! let a = AlphaCutSet::from_triples(&[(0.0, 1.0, 9.0), (0.5, 2.0, 8.0), (1.0, 3.0, 4.0)])?;
//! let b = AlphaCutSet::from_triples(&[(0.0, 1.0, 9.0), (0.2, 2.0, 7.0), (0.5, 3.0, 6.0), (1.0, 4.0, 5.0)])?;
//!
//! let pair = align(&a, &b)?;
//! let sum = ArithmeticOp::Add.apply(&pair)?;
//! assert_eq!(sum.interval_at(1.0), Some((7.0, 9.0)));
//!
//! let table = compare(&pair);
//! assert!(table.get(Relation::NotEqual));
//! # Ok::<(), fuzzy_alpha::FuzzyError>(())
//! ```
//!
//! Everything is synchronous and pure: inputs are never mutated, and each
//! failure is the terminal outcome of the call that produced it.

#![warn(missing_docs)]

pub mod alignment;
pub mod alpha_cut;
pub mod arithmetic;
pub mod calculator;
mod errors;
pub mod membership;
pub mod relation;
pub mod rows;

pub use alignment::{
    align, AlignedPair, Aligner, Alignment, AlignmentOptions, Operand, OutOfRangePolicy,
    ReferencePolicy,
};
pub use alpha_cut::{AlphaCut, AlphaCutSet, BoundSide, Valid};
pub use arithmetic::{compute, ArithmeticOp};
pub use calculator::{Calculator, PlotLabel, Slot};
pub use errors::{FuzzyError, FuzzyResult};
pub use membership::{MembershipOutline, MembershipPoint};
pub use relation::{compare, Relation, RelationTable};
pub use rows::{RawRow, RejectedRow, RowIngest};
