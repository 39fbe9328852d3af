//! Comparable fitness values
//!
//! The engine only ever asks two fitness values of the same shape how they
//! compare; it never looks inside them. Implementors provide a single
//! [`Fitness::compare`] and get `is_equal_to`, `is_greater_than` and
//! `is_less_than` from it, so exactly one of the three holds for any pair.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A measurement of a candidate's quality.
///
/// `compare` must be a total preorder over values produced by the same
/// scoring function: `Greater` means "better".
pub trait Fitness: fmt::Debug {
    /// The measurement carried by this fitness
    type Value;

    fn value(&self) -> &Self::Value;

    /// Order `self` against `other`, where `Greater` means `self` is the better fitness.
    fn compare(&self, other: &Self) -> Ordering;

    fn is_equal_to(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    fn is_greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    fn is_less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

/// Whether numerically higher values are better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Maximize,
    Minimize,
}

/// Single-number fitness.
///
/// NaN always ranks below every other value regardless of polarity, and two
/// NaNs are equal, which keeps the ordering total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberFitness {
    value: f64,
    polarity: Polarity,
}

impl NumberFitness {
    /// Higher is better.
    pub fn new(value: f64) -> Self {
        Self::with_polarity(value, Polarity::Maximize)
    }

    /// Lower is better.
    pub fn minimizing(value: f64) -> Self {
        Self::with_polarity(value, Polarity::Minimize)
    }

    pub fn with_polarity(value: f64, polarity: Polarity) -> Self {
        Self { value, polarity }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl Fitness for NumberFitness {
    type Value = f64;

    fn value(&self) -> &f64 {
        &self.value
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self.value.is_nan(), other.value.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let (a, b) = match self.polarity {
                    Polarity::Maximize => (self.value, other.value),
                    Polarity::Minimize => (other.value, self.value),
                };
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
        }
    }
}

impl From<f64> for NumberFitness {
    fn from(value: f64) -> Self {
        NumberFitness::new(value)
    }
}

impl fmt::Display for NumberFitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
