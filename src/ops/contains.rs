use std::cmp::Ordering;

use crate::{
  comparer::Compare,
  observable::{CoreObservable, ObservableType},
  ops::{any::ExistsObserver, filter::Predicate, skip_while::SkipWhile, take::Take},
};

/// Emits `true` and completes at the first value equal to `target`, `false`
/// if the source completes without one.
///
/// Equality is the order reporting [`Ordering::Equal`], so a custom
/// [`Compare`] can make e.g. case-insensitive matches.
#[derive(Clone)]
pub struct Contains<S, T, C> {
  source: S,
  target: T,
  order: C,
}

impl<S, T, C> Contains<S, T, C> {
  pub fn new(source: S, target: T, order: C) -> Self { Self { source, target, order } }
}

/// Holds while a value differs from the target.
#[derive(Clone)]
pub struct DiffersFrom<T, C> {
  target: T,
  order: C,
}

impl<T, C: Compare<T>> Predicate<T> for DiffersFrom<T, C> {
  fn test(&mut self, value: &T) -> bool { self.order.compare(value, &self.target) != Ordering::Equal }
}

impl<S: ObservableType, T, C> ObservableType for Contains<S, T, C> {
  type Item = bool;
  type Err = S::Err;
}

impl<S, T, C, O> CoreObservable<O> for Contains<S, T, C>
where
  S: ObservableType,
  Take<SkipWhile<S, DiffersFrom<T, C>>>: CoreObservable<ExistsObserver<O>>,
{
  type Unsub = <Take<SkipWhile<S, DiffersFrom<T, C>>> as CoreObservable<ExistsObserver<O>>>::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Contains { source, target, order } = self;
    let predicate = DiffersFrom { target, order };
    let first_match = Take { source: SkipWhile { source, predicate }, count: 1 };
    first_match.actual_subscribe(ExistsObserver::new(observer, true))
  }
}
