//! 3-CNF formulas and the not-all-equal predicate.

use std::fmt;

use itertools::Itertools;

use crate::{Assignment, FormulaError, Literal, truth_letter};

/// A disjunction of exactly three literals.
///
/// Repeated variables are kept as written; `(1, 1, 1)` is a legal clause
/// that no assignment NAE-satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: [Literal; 3],
}

impl Clause {
    /// Build a clause from three literals.
    #[must_use]
    pub const fn new(literals: [Literal; 3]) -> Self {
        Self { literals }
    }

    /// Literals in clause order.
    #[must_use]
    pub const fn literals(&self) -> &[Literal; 3] {
        &self.literals
    }

    /// Largest variable index used.
    #[must_use]
    pub fn max_var(&self) -> usize {
        self.literals.iter().map(|l| l.var()).max().unwrap_or(0)
    }

    /// The three literal values under `assignment`.
    #[must_use]
    pub fn evaluate(&self, assignment: &Assignment) -> [bool; 3] {
        self.literals.map(|lit| assignment.literal_value(lit))
    }

    /// At least one literal is true and at least one is false.
    #[must_use]
    pub fn is_nae_satisfied(&self, assignment: &Assignment) -> bool {
        let [a, b, c] = self.evaluate(assignment);
        !(a == b && b == c)
    }
}

impl fmt::Display for Clause {
    /// `( 1|-2| 3)`: positive literals padded to the width of the minus sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .literals
            .iter()
            .map(|lit| {
                if lit.is_negated() {
                    lit.to_string()
                } else {
                    format!(" {lit}")
                }
            })
            .join("|");
        write!(f, "({body})")
    }
}

/// A conjunction of 3-literal clauses over variables `1..=num_vars`.
///
/// Built incrementally: [`Formula::new`] grows `num_vars` to the largest
/// variable seen, [`Formula::with_num_vars`] fixes it up front and rejects
/// literals beyond it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    num_vars: usize,
    clauses: Vec<Clause>,
    declared: bool,
}

impl Formula {
    /// Empty formula whose variable count grows with its clauses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty formula over exactly `num_vars` variables.
    #[must_use]
    pub const fn with_num_vars(num_vars: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
            declared: true,
        }
    }

    /// Build a growable formula from signed-integer triples.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::ZeroLiteral`] if any literal is `0`.
    pub fn from_raw<I>(clauses: I) -> Result<Self, FormulaError>
    where
        I: IntoIterator<Item = [i32; 3]>,
    {
        let mut formula = Self::new();
        for raw in clauses {
            formula.push_raw(raw)?;
        }
        Ok(formula)
    }

    /// Append a clause.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::LiteralOutOfRange`] if the variable count was
    /// declared and the clause exceeds it.
    pub fn push_clause(&mut self, clause: Clause) -> Result<(), FormulaError> {
        let index = self.clauses.len();
        let max_var = clause.max_var();
        if max_var > self.num_vars {
            if self.declared {
                let lit = clause
                    .literals()
                    .iter()
                    .find(|l| l.var() == max_var)
                    .copied()
                    .unwrap_or_else(|| Literal::positive(max_var));
                return Err(FormulaError::out_of_range(index, lit, self.num_vars));
            }
            self.num_vars = max_var;
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Append a clause given as three signed integers.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::ZeroLiteral`] for a `0` literal, and the errors
    /// of [`Formula::push_clause`].
    pub fn push_raw(&mut self, raw: [i32; 3]) -> Result<(), FormulaError> {
        let clause = self.clauses.len();
        let [a, b, c] = raw.map(Literal::new);
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => self.push_clause(Clause::new([a, b, c])),
            _ => Err(FormulaError::ZeroLiteral { clause }),
        }
    }

    /// Overwrite the variable count.
    ///
    /// Lowering it below a variable in use leaves the formula malformed;
    /// [`Formula::validate`] reports that.
    pub const fn set_num_vars(&mut self, num_vars: usize) {
        self.num_vars = num_vars;
    }

    /// Raise the variable count to at least `num_vars`.
    pub fn grow_num_vars(&mut self, num_vars: usize) {
        self.num_vars = self.num_vars.max(num_vars);
    }

    /// Number of variables `n`.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of clauses `k`.
    #[must_use]
    pub const fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Clauses in insertion order.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Check that every literal names a variable in `1..=num_vars`.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range literal found.
    pub fn validate(&self) -> Result<(), FormulaError> {
        for (index, clause) in self.clauses.iter().enumerate() {
            if let Some(lit) = clause.literals().iter().find(|l| l.var() > self.num_vars) {
                return Err(FormulaError::out_of_range(index, *lit, self.num_vars));
            }
        }
        Ok(())
    }

    /// Every clause is NAE-satisfied by `assignment`.
    ///
    /// The assignment must cover all variables of the formula.
    #[must_use]
    pub fn is_nae_satisfied(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|c| c.is_nae_satisfied(assignment))
    }

    /// `( T| F| T)^(...)`: the evaluated literal values clause by clause.
    #[must_use]
    pub fn render_evaluation(&self, assignment: &Assignment) -> String {
        self.clauses
            .iter()
            .map(|clause| {
                let body = clause
                    .evaluate(assignment)
                    .iter()
                    .map(|&v| format!(" {}", truth_letter(v)))
                    .join("|");
                format!("({body})")
            })
            .join("^")
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().join("^"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growable_formula_tracks_max_var() {
        let f = Formula::from_raw([[1, -4, 2], [3, 3, -1]]).unwrap();
        assert_eq!(f.num_vars(), 4);
        assert_eq!(f.num_clauses(), 2);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn declared_formula_rejects_large_literal() {
        let mut f = Formula::with_num_vars(2);
        f.push_raw([1, 2, -2]).unwrap();
        let err = f.push_raw([1, -3, 2]).unwrap_err();
        assert_eq!(err, FormulaError::out_of_range(1, -3, 2));
        assert_eq!(f.num_clauses(), 1);
    }

    #[test]
    fn zero_literal_is_rejected() {
        let err = Formula::from_raw([[1, 2, 3], [0, 1, 2]]).unwrap_err();
        assert_eq!(err, FormulaError::ZeroLiteral { clause: 1 });
    }

    #[test]
    fn shrinking_num_vars_fails_validation() {
        let mut f = Formula::from_raw([[1, 2, 3]]).unwrap();
        f.set_num_vars(2);
        assert_eq!(f.validate(), Err(FormulaError::out_of_range(0, 3, 2)));
    }

    #[test]
    fn nae_predicate() {
        let f = Formula::from_raw([[1, 2, 3]]).unwrap();
        assert!(!f.is_nae_satisfied(&Assignment::from_values(vec![true, true, true])));
        assert!(!f.is_nae_satisfied(&Assignment::from_values(vec![false, false, false])));
        assert!(f.is_nae_satisfied(&Assignment::from_values(vec![true, true, false])));
    }

    #[test]
    fn repeated_literal_is_never_nae() {
        let f = Formula::from_raw([[1, 1, 1]]).unwrap();
        assert!(!f.is_nae_satisfied(&Assignment::from_values(vec![true])));
        assert!(!f.is_nae_satisfied(&Assignment::from_values(vec![false])));
    }

    #[test]
    fn renders_clause_lines() {
        let f = Formula::from_raw([[1, -2, 3], [-1, 2, 2]]).unwrap();
        assert_eq!(f.to_string(), "( 1|-2| 3)^(-1| 2| 2)");
        let a = Assignment::from_values(vec![true, true, false]);
        assert_eq!(f.render_evaluation(&a), "( T| F| F)^( F| T| T)");
    }
}
