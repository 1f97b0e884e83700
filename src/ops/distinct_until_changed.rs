//! Drops a value equal to the one emitted right before it.
//!
//! Equality is by content (`PartialEq`); the last emitted value is kept as a
//! clone to compare against. Running extrema use this to stay quiet while the
//! extremum holds.

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Emits a value only if it differs from the previous emission.
#[derive(Clone)]
pub struct DistinctUntilChanged<S>(pub S);

impl<S> ObservableType for DistinctUntilChanged<S>
where
  S: ObservableType,
{
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, O> CoreObservable<O> for DistinctUntilChanged<S>
where
  S: ObservableType + CoreObservable<DistinctUntilChangedObserver<O, <S as ObservableType>::Item>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.0.actual_subscribe(DistinctUntilChangedObserver::new(observer))
  }
}

pub struct DistinctUntilChangedObserver<O, Item> {
  observer: O,
  last: Option<Item>,
}

impl<O, Item> DistinctUntilChangedObserver<O, Item> {
  pub fn new(observer: O) -> Self { Self { observer, last: None } }
}

impl<O, Item, Err> Observer<Item, Err> for DistinctUntilChangedObserver<O, Item>
where
  O: Observer<Item, Err>,
  Item: PartialEq + Clone,
{
  fn next(&mut self, value: Item) {
    if self.last.as_ref() != Some(&value) {
      self.last = Some(value.clone());
      self.observer.next(value);
    }
  }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
