//! `element_at` and `element_at_or_default`
//!
//! Both run the source through `skip(index).take(1)`; they differ only in
//! what happens when the source completes first.

use crate::{
  error::SequenceError,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  ops::{skip::Skip, take::Take},
};

/// Emits the value at zero-based `index`, then completes and releases the
/// source. Errors with [`SequenceError::OutOfRange`] if the source completes
/// before reaching it.
#[derive(Clone)]
pub struct ElementAt<S> {
  pub source: S,
  pub index: usize,
}

/// Like [`ElementAt`], emitting `default` instead of failing.
#[derive(Clone)]
pub struct ElementAtOrDefault<S, Item> {
  pub source: S,
  pub index: usize,
  pub default: Item,
}

impl<S: ObservableType> ObservableType for ElementAt<S> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, Item> ObservableType for ElementAtOrDefault<S, Item>
where
  S: ObservableType<Item = Item>,
{
  type Item = Item;
  type Err = S::Err;
}

impl<S, O> CoreObservable<O> for ElementAt<S>
where
  S: ObservableType,
  Take<Skip<S>>: CoreObservable<ElementAtObserver<O, ()>>,
{
  type Unsub = <Take<Skip<S>> as CoreObservable<ElementAtObserver<O, ()>>>::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let ElementAt { source, index } = self;
    let at = Take { source: Skip { source, count: index }, count: 1 };
    at.actual_subscribe(ElementAtObserver { observer, index, delivered: false, fallback: () })
  }
}

impl<S, Item, O> CoreObservable<O> for ElementAtOrDefault<S, Item>
where
  S: ObservableType<Item = Item>,
  Take<Skip<S>>: CoreObservable<ElementAtObserver<O, Option<Item>>>,
{
  type Unsub = <Take<Skip<S>> as CoreObservable<ElementAtObserver<O, Option<Item>>>>::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let ElementAtOrDefault { source, index, default } = self;
    let at = Take { source: Skip { source, count: index }, count: 1 };
    at.actual_subscribe(ElementAtObserver {
      observer,
      index,
      delivered: false,
      fallback: Some(default),
    })
  }
}

/// What to do when the source completes before the index is reached.
pub trait Fallback<Item, Err> {
  fn resolve<O: Observer<Item, Err>>(self, index: usize, observer: O);
}

/// Fail with `OutOfRange`.
impl<Item, Err: From<SequenceError>> Fallback<Item, Err> for () {
  fn resolve<O: Observer<Item, Err>>(self, index: usize, observer: O) {
    observer.error(SequenceError::OutOfRange { index }.into())
  }
}

/// Emit the default value.
impl<Item, Err> Fallback<Item, Err> for Option<Item> {
  fn resolve<O: Observer<Item, Err>>(self, _: usize, mut observer: O) {
    if let Some(default) = self {
      observer.next(default);
    }
    observer.complete()
  }
}

pub struct ElementAtObserver<O, D> {
  observer: O,
  index: usize,
  delivered: bool,
  fallback: D,
}

impl<O, D, Item, Err> Observer<Item, Err> for ElementAtObserver<O, D>
where
  O: Observer<Item, Err>,
  D: Fallback<Item, Err>,
{
  fn next(&mut self, value: Item) {
    self.delivered = true;
    self.observer.next(value);
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) {
    if self.delivered {
      self.observer.complete()
    } else {
      self.fallback.resolve(self.index, self.observer)
    }
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
