//! `min` and `max` operators
//!
//! Both are a [`Reduce`] whose strategy keeps the extremum under a
//! [`Compare`]. Ties keep the value already held, so with several equal
//! extrema the first one seen wins.

use crate::{
  comparer::Compare,
  ops::{
    reduce::{Reduce, ReduceStrategy},
    throw_if_empty::ThrowIfEmpty,
  },
};

/// Which end of the order an extremum operator keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
  Min,
  Max,
}

/// Keeps the smaller or larger of the accumulator and each new value.
#[derive(Clone)]
pub struct Extremum<C> {
  order: C,
  pick: Pick,
}

impl<C> Extremum<C> {
  pub fn new(order: C, pick: Pick) -> Self { Self { order, pick } }

  /// The winner between the value held and a new one.
  pub fn select<T>(&self, held: T, value: T) -> T
  where
    C: Compare<T>,
  {
    use std::cmp::Ordering::*;
    match (self.pick, self.order.compare(&held, &value)) {
      (Pick::Min, Greater) | (Pick::Max, Less) => value,
      _ => held,
    }
  }
}

impl<C, T> ReduceStrategy<T, T> for Extremum<C>
where
  C: Compare<T>,
{
  fn apply(&mut self, acc: Option<T>, value: T) -> Option<T> {
    Some(match acc {
      Some(held) => self.select(held, value),
      None => value,
    })
  }
}

/// Unseeded `min`/`max`: errors with `SequenceError::Empty` on an empty
/// source.
pub type MinMaxOp<S, Item, C> = ThrowIfEmpty<Reduce<S, Extremum<C>, Item>>;

/// Seeded `min_initial`/`max_initial`: the seed takes part in the comparison
/// and is the result for an empty source.
pub type MinMaxInitialOp<S, Item, C> = Reduce<S, Extremum<C>, Item>;

pub fn extremum<S, Item, C>(source: S, order: C, pick: Pick) -> MinMaxOp<S, Item, C> {
  ThrowIfEmpty::new(Reduce { source, strategy: Extremum::new(order, pick), initial: None })
}

pub fn extremum_initial<S, Item, C>(
  source: S, seed: Item, order: C, pick: Pick,
) -> MinMaxInitialOp<S, Item, C> {
  Reduce { source, strategy: Extremum::new(order, pick), initial: Some(seed) }
}
