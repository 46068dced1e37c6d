//! Edge cost type with an infinite sentinel.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Stored costs at or above this value are reported as [`Cost::Infinite`]
/// by graph reads. Matches the conventional `999999` "no edge" sentinel
/// used when entering cost matrices by hand.
pub const INFINITE_COST_THRESHOLD: u64 = 999_999;

/// An edge or tour cost: a non-negative finite number, or unreachable.
///
/// `Infinite` compares greater than every finite cost and absorbs in
/// addition, so accumulating a route cost over an unreachable hop yields
/// an infinite total.
///
/// # Examples
///
/// ```
/// use tsp_route::models::Cost;
///
/// assert!(Cost::Finite(3) < Cost::Finite(5));
/// assert!(Cost::Finite(1_000_000) < Cost::Infinite);
/// assert_eq!(Cost::Finite(3) + Cost::Finite(4), Cost::Finite(7));
/// assert_eq!(Cost::Finite(3) + Cost::Infinite, Cost::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cost {
    /// A usable edge with the given cost.
    Finite(u64),
    /// No usable edge.
    Infinite,
}

impl Cost {
    /// Returns `true` for a finite cost.
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Returns `true` for the infinite sentinel.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Cost::Infinite)
    }

    /// Returns the finite value, or `None` for `Infinite`.
    pub fn value(&self) -> Option<u64> {
        match self {
            Cost::Finite(v) => Some(*v),
            Cost::Infinite => None,
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a.saturating_add(b)),
            _ => Cost::Infinite,
        }
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v}"),
            Cost::Infinite => write!(f, "∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Cost::Finite(0) < Cost::Finite(1));
        assert!(Cost::Finite(u64::MAX) < Cost::Infinite);
        assert_eq!(Cost::Infinite, Cost::Infinite);
        assert!(Cost::Infinite >= Cost::Infinite);
    }

    #[test]
    fn test_addition_absorbs_infinite() {
        assert_eq!(Cost::Infinite + Cost::Finite(5), Cost::Infinite);
        assert_eq!(Cost::Finite(5) + Cost::Infinite, Cost::Infinite);
        assert_eq!(Cost::Infinite + Cost::Infinite, Cost::Infinite);
    }

    #[test]
    fn test_addition_saturates() {
        assert_eq!(
            Cost::Finite(u64::MAX) + Cost::Finite(1),
            Cost::Finite(u64::MAX)
        );
    }

    #[test]
    fn test_add_assign() {
        let mut total = Cost::Finite(0);
        total += Cost::Finite(3);
        total += Cost::Finite(4);
        assert_eq!(total, Cost::Finite(7));
        total += Cost::Infinite;
        assert_eq!(total, Cost::Infinite);
    }

    #[test]
    fn test_accessors() {
        assert!(Cost::Finite(2).is_finite());
        assert!(!Cost::Finite(2).is_infinite());
        assert!(Cost::Infinite.is_infinite());
        assert_eq!(Cost::Finite(2).value(), Some(2));
        assert_eq!(Cost::Infinite.value(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::Finite(42).to_string(), "42");
        assert_eq!(Cost::Infinite.to_string(), "∞");
    }
}
