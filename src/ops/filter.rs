use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// A test over borrowed values.
///
/// Closures `FnMut(&Item) -> bool` are predicates; operators that need a
/// predicate with a nameable type (see [`Contains`](crate::ops::contains))
/// implement it on a struct.
pub trait Predicate<Item> {
  fn test(&mut self, value: &Item) -> bool;
}

impl<F, Item> Predicate<Item> for F
where
  F: FnMut(&Item) -> bool,
{
  #[inline]
  fn test(&mut self, value: &Item) -> bool { self(value) }
}

/// Emits only the values passing `filter`.
#[derive(Clone)]
pub struct Filter<S, F> {
  pub source: S,
  pub filter: F,
}

pub struct FilterObserver<O, F> {
  observer: O,
  filter: F,
}

impl<S, F> ObservableType for Filter<S, F>
where
  S: ObservableType,
{
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, F, O> CoreObservable<O> for Filter<S, F>
where
  S: CoreObservable<FilterObserver<O, F>>,
  F: Predicate<S::Item>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Filter { source, filter } = self;
    source.actual_subscribe(FilterObserver { observer, filter })
  }
}

impl<O, F, Item, Err> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: Predicate<Item>,
{
  fn next(&mut self, value: Item) {
    if self.filter.test(&value) {
      self.observer.next(value)
    }
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
