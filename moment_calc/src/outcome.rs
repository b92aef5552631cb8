use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::fmt;

use num::ToPrimitive;

/// A real-valued outcome that can key a `BTreeMap` or `HashMap`.
///
/// Ordering and equality follow [`f64::total_cmp`], so `-0.0` and `0.0`
/// are distinct outcomes and NaN sorts after every number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Outcome(pub f64);

impl Outcome {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Outcome {}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// total_cmp equality is bitwise equality, so hashing the bits agrees with Eq
impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToPrimitive for Outcome {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Outcome {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<isize> for Outcome {
    fn from(value: isize) -> Self {
        Self(value as f64)
    }
}

impl From<Outcome> for f64 {
    fn from(value: Outcome) -> Self {
        value.0
    }
}

impl Add for Outcome {
    type Output = Outcome;

    fn add(self, rhs: Self) -> Self::Output {
        Outcome(self.0 + rhs.0)
    }
}

impl Sub for Outcome {
    type Output = Outcome;

    fn sub(self, rhs: Self) -> Self::Output {
        Outcome(self.0 - rhs.0)
    }
}

impl Mul for Outcome {
    type Output = Outcome;

    fn mul(self, rhs: Self) -> Self::Output {
        Outcome(self.0 * rhs.0)
    }
}

impl Add<f64> for Outcome {
    type Output = Outcome;

    fn add(self, rhs: f64) -> Self::Output {
        Outcome(self.0 + rhs)
    }
}

impl Sub<f64> for Outcome {
    type Output = Outcome;

    fn sub(self, rhs: f64) -> Self::Output {
        Outcome(self.0 - rhs)
    }
}

impl Mul<f64> for Outcome {
    type Output = Outcome;

    fn mul(self, rhs: f64) -> Self::Output {
        Outcome(self.0 * rhs)
    }
}

impl Neg for Outcome {
    type Output = Outcome;

    fn neg(self) -> Self::Output {
        Outcome(-self.0)
    }
}
