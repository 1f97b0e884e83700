//! Testing utilities for reactive pipelines.
//!
//! - [`Recorder`]: an observer that keeps every notification it receives
//! - [`ManualSource`]: a hot source driven by hand, one value at a time
//! - [`DisposalCounter`]: counts how often a teardown ran
//!
//! # Quick Start
//!
//! ```
//! use rxext::{observer::Notification, prelude::*, testing::*};
//!
//! let source = ManualSource::<i32, SequenceError>::new();
//! let recorder = Recorder::new();
//! source.clone().element_at(1).subscribe_with(recorder.clone());
//!
//! source.next(7);
//! source.next(8);
//!
//! assert_eq!(recorder.notifications(), vec![Notification::Next(8), Notification::Complete]);
//! assert_eq!(source.released(), 1);
//! ```

use std::{cell::Cell, rc::Rc};

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::{BoxedObserver, Notification, Observer},
  rc::{MutRc, RcDeref, RcDerefMut},
  subscription::{ClosureSubscription, Subscription},
};

// ==================== Recorder ====================

/// Records notifications in arrival order.
///
/// Clones share the log, so keep one clone and subscribe the other.
pub struct Recorder<Item, Err>(MutRc<Vec<Notification<Item, Err>>>);

impl<Item, Err> Recorder<Item, Err> {
  pub fn new() -> Self { Self(MutRc::own(Vec::new())) }

  pub fn notifications(&self) -> Vec<Notification<Item, Err>>
  where
    Item: Clone,
    Err: Clone,
  {
    self.0.rc_deref().clone()
  }

  /// The `Next` payloads only.
  pub fn values(&self) -> Vec<Item>
  where
    Item: Clone,
  {
    self
      .0
      .rc_deref()
      .iter()
      .filter_map(|n| match n {
        Notification::Next(v) => Some(v.clone()),
        _ => None,
      })
      .collect()
  }

  /// The error payload, if the sequence failed.
  pub fn err(&self) -> Option<Err>
  where
    Err: Clone,
  {
    self.0.rc_deref().iter().find_map(|n| match n {
      Notification::Error(e) => Some(e.clone()),
      _ => None,
    })
  }

  pub fn is_completed(&self) -> bool {
    matches!(self.0.rc_deref().last(), Some(Notification::Complete))
  }
}

impl<Item, Err> Default for Recorder<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Clone for Recorder<Item, Err> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item, Err> Observer<Item, Err> for Recorder<Item, Err> {
  fn next(&mut self, value: Item) { self.0.rc_deref_mut().push(Notification::Next(value)); }

  fn error(self, err: Err) { self.0.rc_deref_mut().push(Notification::Error(err)); }

  fn complete(self) { self.0.rc_deref_mut().push(Notification::Complete); }

  fn is_closed(&self) -> bool { self.0.rc_deref().last().is_some_and(Notification::is_terminal) }
}

// ==================== ManualSource ====================

/// A source that emits only when told to.
///
/// Holds at most one observer: subscribing again replaces the previous one.
/// Notifications pushed while nobody is subscribed are dropped.
pub struct ManualSource<Item, Err>(MutRc<ManualState<Item, Err>>);

struct ManualState<Item, Err> {
  observer: Option<BoxedObserver<'static, Item, Err>>,
  live: Option<usize>,
  subscriptions: usize,
  released: usize,
}

impl<Item, Err> ManualSource<Item, Err> {
  pub fn new() -> Self {
    Self(MutRc::own(ManualState { observer: None, live: None, subscriptions: 0, released: 0 }))
  }

  pub fn next(&self, value: Item) {
    let (observer, live) = {
      let mut state = self.0.rc_deref_mut();
      (state.observer.take(), state.live)
    };
    let Some(mut observer) = observer else { return };
    observer.next(value);

    let mut state = self.0.rc_deref_mut();
    if state.live.is_some() && state.live == live && state.observer.is_none() {
      state.observer = Some(observer);
    }
  }

  pub fn error(&self, err: Err) {
    if let Some(observer) = self.finish() {
      observer.error(err);
    }
  }

  pub fn complete(&self) {
    if let Some(observer) = self.finish() {
      observer.complete();
    }
  }

  /// Whether a subscriber is currently attached.
  pub fn is_observed(&self) -> bool { self.0.rc_deref().observer.is_some() }

  /// How many times this source has been subscribed.
  pub fn subscriptions(&self) -> usize { self.0.rc_deref().subscriptions }

  /// How many subscriptions were released by unsubscribing, as opposed to
  /// ending with a terminal notification.
  pub fn released(&self) -> usize { self.0.rc_deref().released }

  fn finish(&self) -> Option<BoxedObserver<'static, Item, Err>> {
    let mut state = self.0.rc_deref_mut();
    state.live = None;
    state.observer.take()
  }
}

impl<Item, Err> Default for ManualSource<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Clone for ManualSource<Item, Err> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item, Err> ObservableType for ManualSource<Item, Err> {
  type Item = Item;
  type Err = Err;
}

impl<Item, Err, O> CoreObservable<O> for ManualSource<Item, Err>
where
  O: Observer<Item, Err> + 'static,
{
  type Unsub = ManualSubscription<Item, Err>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let replaced = {
      let mut state = self.0.rc_deref_mut();
      state.subscriptions += 1;
      state.live = Some(state.subscriptions);
      state.observer.replace(Box::new(observer))
    };
    drop(replaced);
    let id = self.0.rc_deref().subscriptions;
    ManualSubscription { source: self.0, id }
  }
}

/// Releases one [`ManualSource`] subscription.
pub struct ManualSubscription<Item, Err> {
  source: MutRc<ManualState<Item, Err>>,
  id: usize,
}

impl<Item, Err> Subscription for ManualSubscription<Item, Err> {
  fn unsubscribe(self) {
    let observer = {
      let mut state = self.source.rc_deref_mut();
      if state.live != Some(self.id) {
        return;
      }
      state.live = None;
      state.released += 1;
      state.observer.take()
    };
    drop(observer);
  }

  fn is_closed(&self) -> bool { self.source.rc_deref().live != Some(self.id) }
}

// ==================== DisposalCounter ====================

/// Hands out teardowns that count how often they ran.
#[derive(Clone, Default)]
pub struct DisposalCounter(Rc<Cell<usize>>);

impl DisposalCounter {
  pub fn new() -> Self { Self::default() }

  pub fn subscription(&self) -> ClosureSubscription<impl FnOnce() + 'static> {
    let count = self.0.clone();
    ClosureSubscription(move || count.set(count.get() + 1))
  }

  pub fn count(&self) -> usize { self.0.get() }
}
