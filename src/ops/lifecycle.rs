//! `on_error` and `on_complete`
//!
//! Terminal hooks. `on_error` is also how a fallible pipeline reaches
//! `subscribe`, which only accepts infallible streams.

use std::convert::Infallible;

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

// ==================== OnError ====================

/// Hands the error to `callback` and makes the stream infallible.
#[derive(Clone)]
pub struct OnError<S, F> {
  pub source: S,
  pub callback: F,
}

impl<S, F> OnError<S, F> {
  pub fn new(source: S, callback: F) -> Self { Self { source, callback } }
}

impl<S, F> ObservableType for OnError<S, F>
where
  S: ObservableType,
{
  type Item = S::Item;
  type Err = Infallible;
}

pub struct OnErrorObserver<O, F> {
  observer: O,
  callback: F,
}

impl<O, F, Item, Err> Observer<Item, Err> for OnErrorObserver<O, F>
where
  O: Observer<Item, Infallible>,
  F: FnOnce(Err),
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) { (self.callback)(err); }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, O> CoreObservable<O> for OnError<S, F>
where
  S: CoreObservable<OnErrorObserver<O, F>>,
  F: FnOnce(S::Err),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let OnError { source, callback } = self;
    source.actual_subscribe(OnErrorObserver { observer, callback })
  }
}

// ==================== OnComplete ====================

/// Runs `callback` when the stream completes, before forwarding completion.
#[derive(Clone)]
pub struct OnComplete<S, F> {
  pub source: S,
  pub callback: F,
}

impl<S, F> OnComplete<S, F> {
  pub fn new(source: S, callback: F) -> Self { Self { source, callback } }
}

impl<S, F> ObservableType for OnComplete<S, F>
where
  S: ObservableType,
{
  type Item = S::Item;
  type Err = S::Err;
}

pub struct OnCompleteObserver<O, F> {
  observer: O,
  callback: F,
}

impl<O, F, Item, Err> Observer<Item, Err> for OnCompleteObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(),
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(self) {
    (self.callback)();
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, O> CoreObservable<O> for OnComplete<S, F>
where
  S: CoreObservable<OnCompleteObserver<O, F>>,
  F: FnOnce(),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let OnComplete { source, callback } = self;
    source.actual_subscribe(OnCompleteObserver { observer, callback })
  }
}
