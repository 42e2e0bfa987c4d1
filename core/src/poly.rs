//! Polynomial constraint lines in ANF over GF(2).
//!
//! An emitted system is a flat sequence of [`Line`]s. Rendering follows the
//! solver's input convention: XOR-sum terms joined by `+`, AND-products
//! joined by `*`, and a bare product line (no `=`) denoting a product forced
//! to zero. Row-pinning lines use the compact `1+x_3` spelling.

use core::fmt;

use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use crate::vars::Var;

/// An AND-product of variables; never empty, at most three factors occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    factors: SmallVec<[Var; 3]>,
}

impl Term {
    pub(crate) fn single(var: Var) -> Self {
        Self { factors: smallvec![var] }
    }

    pub(crate) fn product(lhs: Var, rhs: Var) -> Self {
        Self { factors: smallvec![lhs, rhs] }
    }

    pub(crate) fn triple(a: Var, b: Var, c: Var) -> Self {
        Self { factors: smallvec![a, b, c] }
    }

    /// The variables multiplied together in this term.
    pub fn factors(&self) -> &[Var] {
        &self.factors
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factors.iter().format(" * "))
    }
}

/// An XOR-sum of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    terms: Vec<Term>,
}

impl Poly {
    pub(crate) fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub(crate) fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// The terms of this polynomial, in emission order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl From<Term> for Poly {
    fn from(term: Term) -> Self {
        Self { terms: vec![term] }
    }
}

impl FromIterator<Term> for Poly {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self { terms: iter.into_iter().collect() }
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms.iter().format(" + "))
    }
}

/// One line of an emitted equation system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `lhs = rhs`: defines a new wire as a polynomial over existing wires.
    Definition { lhs: Var, rhs: Poly },
    /// A bare two-variable product, implicitly forced to zero; at most one
    /// of the two variables may be set.
    Exclusion { lhs: Var, rhs: Var },
    /// Pins a per-row wire to a truth-table bit: `x_3` pins to zero, `1+x_3`
    /// pins to one.
    Pin { wire: Var, value: bool },
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition { lhs, rhs } => write!(f, "{lhs} = {rhs}"),
            Self::Exclusion { lhs, rhs } => write!(f, "{lhs} * {rhs}"),
            Self::Pin { wire, value: true } => write!(f, "1+{wire}"),
            Self::Pin { wire, value: false } => write!(f, "{wire}"),
        }
    }
}
