use contracts::*;
use std::fmt;
use std::num::NonZeroI32;

/// A variable or its negation, stored as a nonzero signed integer.
///
/// `v` denotes variable `v`, `-v` its negation. Variables are one-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Signed value, never zero.
    inner: NonZeroI32,
}

impl Literal {
    /// Wrap a signed integer; `None` for `0`.
    #[must_use]
    pub fn new(raw: i32) -> Option<Self> {
        NonZeroI32::new(raw).map(|inner| Self { inner })
    }

    /// The un-negated literal of variable `var`.
    #[requires(var >= 1 && var <= i32::MAX as usize)]
    #[ensures(ret.var() == var && !ret.is_negated())]
    #[must_use]
    pub fn positive(var: usize) -> Self {
        Self::new(var as i32).unwrap_or_else(|| unreachable!())
    }

    /// The negated literal of variable `var`.
    #[requires(var >= 1 && var <= i32::MAX as usize)]
    #[ensures(ret.var() == var && ret.is_negated())]
    #[must_use]
    pub fn negative(var: usize) -> Self {
        Self::positive(var).negate()
    }

    /// One-based variable index.
    #[must_use]
    pub const fn var(self) -> usize {
        self.inner.get().unsigned_abs() as usize
    }

    /// True for `-v`.
    #[must_use]
    pub const fn is_negated(self) -> bool {
        self.inner.get() < 0
    }

    /// The complementary literal.
    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            inner: -self.inner,
        }
    }

    /// Signed integer form.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.inner.get()
    }

    /// Truth value of this literal when its variable has value `value`.
    #[must_use]
    pub const fn evaluate(self, value: bool) -> bool {
        value != self.is_negated()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<Literal> for i64 {
    #[inline]
    fn from(lit: Literal) -> Self {
        Self::from(lit.raw())
    }
}
