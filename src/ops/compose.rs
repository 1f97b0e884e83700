//! `filter` and `map`, rebuilt on `flat_map`
//!
//! Each value becomes a one-item observable (kept or mapped) or an empty one
//! (dropped), and `flat_map` merges them back. The results match
//! `filter`/`map` exactly, value for value.

use std::{convert::Infallible, marker::PhantomData};

use crate::{
  observable::{Either, Empty, Of},
  ops::flat_map::Projection,
};

/// Projects a value onto itself if it passes the predicate, onto nothing
/// otherwise.
pub struct KeepIf<P, Err = Infallible> {
  predicate: P,
  _marker: PhantomData<Err>,
}

impl<P, Err> KeepIf<P, Err> {
  pub fn new(predicate: P) -> Self { Self { predicate, _marker: PhantomData } }
}

impl<P: Clone, Err> Clone for KeepIf<P, Err> {
  fn clone(&self) -> Self { Self::new(self.predicate.clone()) }
}

impl<P, Item, Err> Projection<Item> for KeepIf<P, Err>
where
  P: FnMut(&Item) -> bool,
{
  type Inner = Either<Of<Item, Err>, Empty<Item, Err>>;

  fn project(&mut self, value: Item) -> Self::Inner {
    if (self.predicate)(&value) {
      Either::Left(Of::new(value))
    } else {
      Either::Right(Empty::new())
    }
  }
}

/// Projects a value onto a one-item observable of `func(value)`.
pub struct Lift<F, Err = Infallible> {
  func: F,
  _marker: PhantomData<Err>,
}

impl<F, Err> Lift<F, Err> {
  pub fn new(func: F) -> Self { Self { func, _marker: PhantomData } }
}

impl<F: Clone, Err> Clone for Lift<F, Err> {
  fn clone(&self) -> Self { Self::new(self.func.clone()) }
}

impl<F, Item, B, Err> Projection<Item> for Lift<F, Err>
where
  F: FnMut(Item) -> B,
{
  type Inner = Of<B, Err>;

  fn project(&mut self, value: Item) -> Self::Inner { Of::new((self.func)(value)) }
}

#[cfg(test)]
mod tests {
  use crate::{
    observer::Notification,
    prelude::*,
    testing::{ManualSource, Recorder},
  };

  #[rxext_macro::test]
  fn filter_by_flat_map_matches_filter() {
    let mut direct = vec![];
    let mut composed = vec![];
    Local::from_iter(0..20).filter(|v| v % 3 == 1).subscribe(|v| direct.push(v));
    Local::from_iter(0..20).filter_by_flat_map(|v| v % 3 == 1).subscribe(|v| composed.push(v));

    assert_eq!(direct, composed);
    assert_eq!(composed, vec![1, 4, 7, 10, 13, 16, 19]);
  }

  #[rxext_macro::test]
  fn map_by_flat_map_matches_map() {
    let mut direct = vec![];
    let mut composed = vec![];
    Local::from_iter(["a", "bc"]).map(str::len).subscribe(|v| direct.push(v));
    Local::from_iter(["a", "bc"]).map_by_flat_map(str::len).subscribe(|v| composed.push(v));

    assert_eq!(direct, composed);
  }

  #[rxext_macro::test]
  fn completion_and_errors_follow_the_source() {
    let source = ManualSource::<i32, &str>::new();
    let recorder = Recorder::new();
    source.clone().map_by_flat_map(|v| v * 10).subscribe_with(recorder.clone());

    source.next(1);
    source.error("gone");

    assert_eq!(recorder.notifications(), vec![Notification::Next(10), Notification::Error("gone")]);
  }

  #[rxext_macro::test]
  fn empty_source_completes() {
    let recorder = Recorder::<i32, ()>::new();
    Empty::<i32, ()>::new().filter_by_flat_map(|_| true).subscribe_with(recorder.clone());
    assert_eq!(recorder.notifications(), vec![Notification::Complete]);
  }
}
