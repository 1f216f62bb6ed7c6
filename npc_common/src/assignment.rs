use contracts::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Literal;

/// A truth value for every variable `1..=num_vars` of a formula.
///
/// Stored densely; position `0` of the backing vector holds variable `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// All variables false.
    #[must_use]
    pub fn all_false(num_vars: usize) -> Self {
        Self {
            values: vec![false; num_vars],
        }
    }

    /// Values for variables `1..=values.len()`, in order.
    #[must_use]
    pub const fn from_values(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// Number of variables covered.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.values.len()
    }

    /// Value of the one-based variable `var`.
    #[requires(var >= 1 && var <= self.num_vars())]
    #[must_use]
    pub fn get(&self, var: usize) -> bool {
        self.values[var - 1]
    }

    /// Set the one-based variable `var`.
    #[requires(var >= 1 && var <= self.num_vars())]
    pub fn set(&mut self, var: usize, value: bool) {
        self.values[var - 1] = value;
    }

    /// Truth value of `lit` under this assignment.
    #[requires(lit.var() <= self.num_vars())]
    #[must_use]
    pub fn literal_value(&self, lit: Literal) -> bool {
        lit.evaluate(self.get(lit.var()))
    }

    /// The assignment with every variable flipped.
    ///
    /// NAE-satisfaction is closed under complement, so this is a second
    /// witness whenever `self` is one.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            values: self.values.iter().map(|v| !v).collect(),
        }
    }

    /// `(var, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.values.iter().copied().enumerate().map(|(i, v)| (i + 1, v))
    }

    /// Values in variable order.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }
}

/// `T`/`F` letter for a truth value.
#[must_use]
pub const fn truth_letter(value: bool) -> char {
    if value { 'T' } else { 'F' }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(var, value)| format!("{var}:{}", truth_letter(value)))
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_one_based() {
        let mut a = Assignment::all_false(3);
        a.set(1, true);
        assert!(a.get(1));
        assert!(!a.get(3));
        assert_eq!(a.to_string(), "1:T 2:F 3:F");
    }

    #[test]
    fn literal_value_honors_negation() {
        let a = Assignment::from_values(vec![true, false]);
        assert!(a.literal_value(Literal::positive(1)));
        assert!(a.literal_value(Literal::negative(2)));
        assert!(!a.literal_value(Literal::negative(1)));
    }

    #[test]
    fn complement_flips_everything() {
        let a = Assignment::from_values(vec![true, false, true]);
        assert_eq!(a.complement().as_slice(), &[false, true, false]);
    }

    #[test]
    fn empty_assignment_displays_empty() {
        assert_eq!(Assignment::default().to_string(), "");
    }
}
