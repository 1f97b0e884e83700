//! Ordering capabilities
//!
//! Every operator that needs to rank values takes a [`Compare`]
//! implementation instead of reaching for a hidden, type-driven default.
//! [`NaturalOrder`] is what the plain `min`/`max`/`min_by` family uses;
//! [`Comparer`] turns a caller's three-way comparison function into one.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use rxext::comparer::{Compare, Comparer};
//!
//! struct Room {
//!   id: u32,
//! }
//!
//! let by_id = Comparer::new(|a: &Room, b: &Room| a.id.cmp(&b.id));
//! assert_eq!(by_id.compare(&Room { id: 1 }, &Room { id: 2 }), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// A reusable total order over `T`.
///
/// Implementations are expected to be antisymmetric and transitive; operators
/// rely on it without checking.
pub trait Compare<T: ?Sized> {
  fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of a `PartialOrd` type.
///
/// Incomparable pairs (a `NaN` against anything) compare as equal, so folds
/// keep the value they already hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl NaturalOrder {
  /// Largest first.
  pub fn reversed(self) -> Reversed<Self> { Reversed(self) }
}

impl<T: PartialOrd + ?Sized> Compare<T> for NaturalOrder {
  #[inline]
  fn compare(&self, a: &T, b: &T) -> Ordering { a.partial_cmp(b).unwrap_or(Ordering::Equal) }
}

/// Wraps a comparison function.
#[derive(Clone, Copy)]
pub struct Comparer<F>(F);

impl<F> Comparer<F> {
  pub fn new<T: ?Sized>(comparison: F) -> Self
  where
    F: Fn(&T, &T) -> Ordering,
  {
    Comparer(comparison)
  }

  /// The same order, back to front.
  pub fn reversed(self) -> Reversed<Self> { Reversed(self) }
}

impl<T: ?Sized, F> Compare<T> for Comparer<F>
where
  F: Fn(&T, &T) -> Ordering,
{
  #[inline]
  fn compare(&self, a: &T, b: &T) -> Ordering { (self.0)(a, b) }
}

/// Builds a [`Comparer`] from a comparison reporting its result by sign:
/// negative for less, zero for equal, positive for greater.
pub fn from_sign<T: ?Sized, G>(comparison: G) -> Comparer<impl Fn(&T, &T) -> Ordering>
where
  G: Fn(&T, &T) -> i32,
{
  Comparer(move |a: &T, b: &T| comparison(a, b).cmp(&0))
}

/// Another order, back to front.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
  #[inline]
  fn compare(&self, a: &T, b: &T) -> Ordering { self.0.compare(b, a) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[rxext_macro::test]
  fn natural_order() {
    assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
    assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    assert_eq!(NaturalOrder.compare(&f64::NAN, &1.0), Ordering::Equal);
  }

  #[rxext_macro::test]
  fn comparer_wraps_function() {
    let by_len = Comparer::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
    assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
  }

  #[rxext_macro::test]
  fn sign_comparison() {
    let cmp = from_sign(|a: &i32, b: &i32| a - b);
    assert_eq!(cmp.compare(&3, &7), Ordering::Less);
    assert_eq!(cmp.compare(&7, &7), Ordering::Equal);
    assert_eq!(cmp.compare(&9, &7), Ordering::Greater);
  }

  #[rxext_macro::test]
  fn reversed_swaps_operands() {
    let desc = NaturalOrder.reversed();
    assert_eq!(Compare::<i32>::compare(&desc, &1, &2), Ordering::Greater);
    let mut v = vec![3, 1, 2];
    v.sort_by(|a, b| desc.compare(a, b));
    assert_eq!(v, vec![3, 2, 1]);
  }
}
