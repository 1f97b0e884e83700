//! Take operator implementation
//!
//! `take(n)` is the short-circuit every quantifier in this crate is built on:
//! once the n-th value is through it completes downstream and releases
//! upstream, even when upstream is still inside its own `subscribe` call.

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  subscription::{Subscription, SubscriptionHandle},
};

/// Emits only the first `count` values emitted by the source.
///
/// If the source emits fewer than `count` values then all of them are
/// emitted and the source's own termination is forwarded.
///
/// ```
/// use rxext::prelude::*;
///
/// let mut seen = vec![];
/// Local::from_iter(0..).take(3).subscribe(|v| seen.push(v));
/// assert_eq!(seen, vec![0, 1, 2]);
/// ```
#[derive(Clone)]
pub struct Take<S> {
  pub source: S,
  pub count: usize,
}

pub struct TakeObserver<O> {
  observer: Option<O>,
  remaining: usize,
  upstream: SubscriptionHandle,
}

impl<S: ObservableType> ObservableType for Take<S> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, O> CoreObservable<O> for Take<S>
where
  S: CoreObservable<TakeObserver<O>>,
  S::Unsub: 'static,
  O: Observer<S::Item, S::Err>,
{
  type Unsub = SubscriptionHandle;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let upstream = SubscriptionHandle::new();
    if self.count == 0 {
      observer.complete();
      upstream.clone().unsubscribe();
      return upstream;
    }

    let take_observer =
      TakeObserver { observer: Some(observer), remaining: self.count, upstream: upstream.clone() };
    let unsub = self.source.actual_subscribe(take_observer);
    upstream.add(unsub);
    upstream
  }
}

impl<O, Item, Err> Observer<Item, Err> for TakeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let Some(observer) = self.observer.as_mut() else { return };
    observer.next(value);
    self.remaining -= 1;
    if self.remaining == 0 {
      if let Some(observer) = self.observer.take() {
        observer.complete();
      }
      tracing::trace!(target: "rxext::take", "quota reached, releasing upstream");
      self.upstream.clone().unsubscribe();
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(err);
    }
  }

  fn complete(self) {
    if let Some(observer) = self.observer {
      observer.complete();
    }
  }

  fn is_closed(&self) -> bool { self.observer.as_ref().is_none_or(Observer::is_closed) }
}
