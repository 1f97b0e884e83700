//! `any` and `any_match`
//!
//! Both run the source through `take(1)` and report whether that one value
//! showed up. [`ExistsObserver`] is the shared tail of every quantifier in
//! this crate: `all` and `contains` only change the pipeline in front of it
//! and the answer it gives when a value shows up.

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  ops::{filter::Filter, take::Take},
};

/// Emits `true` on the first value and completes, releasing the source; emits
/// `false` if the source completes empty.
#[derive(Clone)]
pub struct Any<S> {
  pub source: S,
}

/// `any` over the values passing `predicate`.
pub type AnyMatch<S, F> = Any<Filter<S, F>>;

impl<S: ObservableType> ObservableType for Any<S> {
  type Item = bool;
  type Err = S::Err;
}

impl<S, O> CoreObservable<O> for Any<S>
where
  S: ObservableType,
  Take<S>: CoreObservable<ExistsObserver<O>>,
{
  type Unsub = <Take<S> as CoreObservable<ExistsObserver<O>>>::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let first = Take { source: self.source, count: 1 };
    first.actual_subscribe(ExistsObserver::new(observer, true))
  }
}

/// Answers a yes/no question from whether any value arrives.
///
/// Emits `when_found` on the first value, or its negation if the source
/// completes without one, then completes.
pub struct ExistsObserver<O> {
  observer: Option<O>,
  when_found: bool,
}

impl<O> ExistsObserver<O> {
  pub fn new(observer: O, when_found: bool) -> Self {
    Self { observer: Some(observer), when_found }
  }
}

impl<O, Item, Err> Observer<Item, Err> for ExistsObserver<O>
where
  O: Observer<bool, Err>,
{
  fn next(&mut self, _: Item) {
    if let Some(mut observer) = self.observer.take() {
      observer.next(self.when_found);
      observer.complete();
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(err);
    }
  }

  fn complete(self) {
    if let Some(mut observer) = self.observer {
      observer.next(!self.when_found);
      observer.complete();
    }
  }

  fn is_closed(&self) -> bool { self.observer.as_ref().is_none_or(Observer::is_closed) }
}
