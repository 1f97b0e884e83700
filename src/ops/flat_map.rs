//! FlatMap operator implementation
//!
//! Maps every outer value to an inner observable, subscribes to it at once and
//! merges what all inner observables emit into one stream.

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  rc::{MutRc, RcDeref, RcDerefMut},
  subscription::{Subscription, SubscriptionHandle},
};

/// Turns an outer value into an inner observable.
///
/// Any `FnMut(Item) -> Inner` closure is a projection. The
/// [`compose`](crate::ops::compose) operators implement it on named structs
/// so their return types can be spelled out.
pub trait Projection<Item> {
  type Inner;

  fn project(&mut self, value: Item) -> Self::Inner;
}

impl<F, Item, Inner> Projection<Item> for F
where
  F: FnMut(Item) -> Inner,
{
  type Inner = Inner;

  #[inline]
  fn project(&mut self, value: Item) -> Inner { self(value) }
}

/// Merge-maps the source through `func`.
///
/// Completes once the source and every inner observable have completed. The
/// first error, outer or inner, terminates the stream and releases every
/// subscription still running.
///
/// ```
/// use rxext::prelude::*;
///
/// let mut seen = vec![];
/// Local::from_iter([1, 2, 3])
///   .flat_map(|v| Local::from_iter(vec![v; v]))
///   .subscribe(|v| seen.push(v));
/// assert_eq!(seen, vec![1, 2, 2, 3, 3, 3]);
/// ```
#[derive(Clone)]
pub struct FlatMap<S, F> {
  pub source: S,
  pub func: F,
}

impl<S, F> ObservableType for FlatMap<S, F>
where
  S: ObservableType,
  F: Projection<S::Item>,
  F::Inner: ObservableType<Err = S::Err>,
{
  type Item = <F::Inner as ObservableType>::Item;
  type Err = S::Err;
}

impl<S, F, O> CoreObservable<O> for FlatMap<S, F>
where
  S: CoreObservable<FlatMapObserver<O, F>>,
  S::Unsub: 'static,
  F: Projection<S::Item>,
  F::Inner: ObservableType<Err = S::Err>,
{
  type Unsub = SubscriptionHandle;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let subscription = SubscriptionHandle::new();
    let state = MutRc::own(Some(MergeState { observer, active: 0, outer_done: false }));
    let outer =
      FlatMapObserver { state, func: self.func, subscription: subscription.clone() };
    let unsub = self.source.actual_subscribe(outer);
    subscription.add(unsub);
    subscription
  }
}

struct MergeState<O> {
  observer: O,
  active: usize,
  outer_done: bool,
}

type SharedState<O> = MutRc<Option<MergeState<O>>>;

fn is_state_closed<O, Item, Err>(state: &SharedState<O>) -> bool
where
  O: Observer<Item, Err>,
{
  state.rc_deref().as_ref().is_none_or(|s| s.observer.is_closed())
}

/// Receives the outer values.
pub struct FlatMapObserver<O, F> {
  state: SharedState<O>,
  func: F,
  subscription: SubscriptionHandle,
}

impl<O, F, Item, Err> Observer<Item, Err> for FlatMapObserver<O, F>
where
  F: Projection<Item>,
  F::Inner: CoreObservable<InnerObserver<O>, Err = Err>,
  <F::Inner as CoreObservable<InnerObserver<O>>>::Unsub: 'static,
  O: Observer<<F::Inner as ObservableType>::Item, Err>,
{
  fn next(&mut self, value: Item) {
    let inner = self.func.project(value);
    match self.state.rc_deref_mut().as_mut() {
      Some(state) => state.active += 1,
      None => return,
    }
    let observer = InnerObserver { state: self.state.clone(), subscription: self.subscription.clone() };
    let unsub = inner.actual_subscribe(observer);
    self.subscription.add(unsub);
  }

  fn error(self, err: Err) {
    let state = self.state.rc_deref_mut().take();
    if let Some(state) = state {
      state.observer.error(err);
    }
    self.subscription.unsubscribe();
  }

  fn complete(self) {
    let finished = {
      let mut guard = self.state.rc_deref_mut();
      match guard.as_mut() {
        Some(state) => {
          state.outer_done = true;
          if state.active == 0 { guard.take() } else { None }
        }
        None => None,
      }
    };
    if let Some(state) = finished {
      state.observer.complete();
    }
  }

  fn is_closed(&self) -> bool {
    is_state_closed::<O, <F::Inner as ObservableType>::Item, Err>(&self.state)
  }
}

/// Receives the values of one inner observable.
pub struct InnerObserver<O> {
  state: SharedState<O>,
  subscription: SubscriptionHandle,
}

impl<O, Item, Err> Observer<Item, Err> for InnerObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(state) = self.state.rc_deref_mut().as_mut() {
      state.observer.next(value);
    }
  }

  fn error(self, err: Err) {
    let state = self.state.rc_deref_mut().take();
    if let Some(state) = state {
      state.observer.error(err);
    }
    self.subscription.unsubscribe();
  }

  fn complete(self) {
    let finished = {
      let mut guard = self.state.rc_deref_mut();
      match guard.as_mut() {
        Some(state) => {
          state.active -= 1;
          if state.active == 0 && state.outer_done { guard.take() } else { None }
        }
        None => None,
      }
    };
    if let Some(state) = finished {
      state.observer.complete();
    }
  }

  fn is_closed(&self) -> bool { is_state_closed::<O, Item, Err>(&self.state) }
}

#[cfg(test)]
mod tests {
  use crate::{
    observer::Notification,
    prelude::*,
    testing::{ManualSource, Recorder},
  };

  #[rxext_macro::test]
  fn merges_inner_values_in_order() {
    let mut seen = vec![];
    Local::from_iter([1, 2, 3])
      .flat_map(|v| Local::from_iter(vec![v; v]))
      .subscribe(|v| seen.push(v));

    assert_eq!(seen, vec![1, 2, 2, 3, 3, 3]);
  }

  #[rxext_macro::test]
  fn waits_for_inner_completion() {
    let inner = ManualSource::<i32, ()>::new();
    let c_inner = inner.clone();
    let recorder = Recorder::new();
    Of::<_, ()>::new(0)
      .flat_map(move |_| c_inner.clone())
      .subscribe_with(recorder.clone());

    inner.next(7);
    assert!(!recorder.is_completed());
    inner.complete();

    assert_eq!(recorder.values(), vec![7]);
    assert!(recorder.is_completed());
  }

  #[rxext_macro::test]
  fn inner_error_terminates_and_releases_outer() {
    let outer = ManualSource::<i32, &str>::new();
    let inner = ManualSource::<i32, &str>::new();
    let c_inner = inner.clone();
    let recorder = Recorder::new();
    outer.clone().flat_map(move |_| c_inner.clone()).subscribe_with(recorder.clone());

    outer.next(1);
    inner.error("inner failed");
    outer.next(2);

    assert_eq!(recorder.notifications(), vec![Notification::Error("inner failed")]);
    assert_eq!(outer.released(), 1);
    assert_eq!(inner.subscriptions(), 1);
  }

  #[rxext_macro::test]
  fn unsubscribe_releases_outer_and_inner() {
    let outer = ManualSource::<i32, ()>::new();
    let inner = ManualSource::<i32, ()>::new();
    let c_inner = inner.clone();
    let recorder = Recorder::new();
    let subscription =
      outer.clone().flat_map(move |_| c_inner.clone()).subscribe_with(recorder.clone());

    outer.next(1);
    subscription.unsubscribe();

    assert_eq!(outer.released(), 1);
    assert_eq!(inner.released(), 1);
    assert!(recorder.notifications().is_empty());
  }

  #[rxext_macro::test]
  fn downstream_take_stops_the_outer_source() {
    let mut seen = vec![];
    Local::from_iter(0..)
      .flat_map(|v| Local::from_iter([v, v]))
      .take(3)
      .subscribe(|v| seen.push(v));

    assert_eq!(seen, vec![0, 0, 1]);
  }
}
