//! Shared builder functions used by the per-level generators.
//!
//! Every level assembles the same pieces: draw operands, keep subtraction
//! non-negative, build exact division, and format the statement. These
//! helpers centralise that work so level files only describe their ranges.
//!
//! ## RNG ordering
//!
//! Operand draws happen in statement order (left operand first). Changing the
//! order changes what a given seed produces and breaks determinism tests.

use std::ops::RangeInclusive;

use rand::Rng;
use crate::drill_engine::models::{Problem, ProblemKind};

pub const TIMES: &str = "×";
pub const DIVIDE: &str = "÷";

/// Additive operator for add/subtract and mixed problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddSub {
    Plus,
    Minus,
}

impl AddSub {
    pub fn symbol(self) -> &'static str {
        match self {
            AddSub::Plus  => "+",
            AddSub::Minus => "-",
        }
    }

    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            AddSub::Plus  => a + b,
            AddSub::Minus => a - b,
        }
    }
}

/// Pick `+` or `-` with equal probability.
pub fn pick_add_sub<R: Rng>(rng: &mut R) -> AddSub {
    if rng.gen_bool(0.5) { AddSub::Plus } else { AddSub::Minus }
}

/// Pick one entry of `choices` uniformly.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, choices: &[T]) -> T {
    choices[rng.gen_range(0..choices.len())]
}

/// Draw two operands from independent ranges.
pub fn operands<R: Rng>(
    rng: &mut R,
    left: RangeInclusive<i64>,
    right: RangeInclusive<i64>,
) -> (i64, i64) {
    let a = rng.gen_range(left);
    let b = rng.gen_range(right);
    (a, b)
}

/// Larger value first, so `a - b` is never negative.
pub fn minuend_first(a: i64, b: i64) -> (i64, i64) {
    (a.max(b), a.min(b))
}

/// `a op b = ?` with the non-negative reordering applied for subtraction.
pub fn add_sub(op: AddSub, a: i64, b: i64) -> Problem {
    let (a, b) = match op {
        AddSub::Plus  => (a, b),
        AddSub::Minus => minuend_first(a, b),
    };
    let kind = match op {
        AddSub::Plus  => ProblemKind::Add,
        AddSub::Minus => ProblemKind::Subtract,
    };
    Problem {
        statement: format!("{a} {} {b} = ?", op.symbol()),
        answer: op.apply(a, b),
        kind,
    }
}

pub fn multiply(a: i64, b: i64) -> Problem {
    Problem {
        statement: format!("{a} {TIMES} {b} = ?"),
        answer: a * b,
        kind: ProblemKind::Multiply,
    }
}

/// Exact division built backwards: the dividend is `divisor × quotient`.
pub fn divide(divisor: i64, quotient: i64) -> Problem {
    let dividend = divisor * quotient;
    Problem {
        statement: format!("{dividend} {DIVIDE} {divisor} = ?"),
        answer: quotient,
        kind: ProblemKind::Divide,
    }
}

/// `(a op b) × c = ?`; the bracketed operation is evaluated first.
pub fn grouped(op: AddSub, a: i64, b: i64, c: i64) -> Problem {
    let (a, b) = match op {
        AddSub::Plus  => (a, b),
        AddSub::Minus => minuend_first(a, b),
    };
    let inner = op.apply(a, b);
    Problem {
        statement: format!("({a} {} {b}) {TIMES} {c} = ?", op.symbol()),
        answer: inner * c,
        kind: ProblemKind::Mixed,
    }
}
