//! The consuming side of the push protocol
//!
//! An [`Observer`] gets any number of values and then at most one terminal
//! notification. [`Notification`] is the same protocol as data, which is what
//! the recording test doubles store.

use std::convert::Infallible;

use crate::rc::{MutRc, RcDeref, RcDerefMut};

// ============================================================================
// Observer Trait
// ============================================================================

/// Receives a sequence.
///
/// `error` and `complete` consume the observer, so nothing can follow a
/// terminal notification.
pub trait Observer<Item, Err> {
  fn next(&mut self, value: Item);

  fn error(self, err: Err);

  fn complete(self);

  /// `true` once the observer wants nothing more. Sources poll it to stop
  /// producing early, e.g. once a downstream `take` has its quota.
  fn is_closed(&self) -> bool;
}

// ============================================================================
// Emitter Trait
// ============================================================================

/// A trait for emitting items to an Observer via mutable reference.
///
/// Unlike `Observer`, which consumes `self` for `error` and `complete`,
/// `Emitter` takes `&mut self` for all methods so `create` can hand its
/// closure a `&mut dyn Emitter` without boxing the downstream observer or
/// leaking its concrete type into the observable's signature.
pub trait Emitter<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);

  /// `true` once downstream has terminated or stopped listening. Producers
  /// of unbounded sequences poll this to stop pushing.
  fn is_closed(&self) -> bool;
}

// ============================================================================
// FnMutObserver - Closure adapter
// ============================================================================

/// Closure adapter used by `subscribe`.
///
/// The closure becomes the `next` handler. Only infallible streams can be
/// subscribed this way; fallible ones go through `on_error` first.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item> Observer<Item, Infallible> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(self, err: Infallible) { match err {} }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_closed(&self) -> bool { false }
}

// ============================================================================
// Observer for Option
// ============================================================================

/// An empty slot ignores everything.
impl<O, Item, Err> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(inner) = self {
      inner.next(value);
    }
  }

  fn error(self, err: Err) {
    if let Some(inner) = self {
      inner.error(err);
    }
  }

  fn complete(self) {
    if let Some(inner) = self {
      inner.complete();
    }
  }

  fn is_closed(&self) -> bool { self.as_ref().is_none_or(Observer::is_closed) }
}

// ============================================================================
// SharedObserver - the slot behind a Subscriber
// ============================================================================

/// The observer slot shared between a running source and the [`Subscriber`]
/// returned to the caller.
///
/// The observer is moved out of the slot while it handles a value, so the
/// callback may cancel its own subscription. Cancelling marks the slot closed
/// and the observer is dropped once the callback returns.
///
/// [`Subscriber`]: crate::subscription::Subscriber
pub struct SharedObserver<O>(MutRc<Slot<O>>);

enum Slot<O> {
  Idle(O),
  Busy,
  Closed,
}

impl<O> SharedObserver<O> {
  pub fn new(observer: O) -> Self { Self(MutRc::own(Slot::Idle(observer))) }

  /// Empties the slot. Nothing reaches the observer afterwards.
  pub fn close(&self) {
    let slot = std::mem::replace(&mut *self.0.rc_deref_mut(), Slot::Closed);
    drop(slot);
  }

  /// `true` once the observer got a terminal notification or was closed.
  pub fn is_released(&self) -> bool { matches!(*self.0.rc_deref(), Slot::Closed) }

  fn terminate(&self) -> Option<O> {
    match std::mem::replace(&mut *self.0.rc_deref_mut(), Slot::Closed) {
      Slot::Idle(observer) => Some(observer),
      _ => None,
    }
  }
}

impl<O> Clone for SharedObserver<O> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<O, Item, Err> Observer<Item, Err> for SharedObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let mut observer = {
      let mut slot = self.0.rc_deref_mut();
      match std::mem::replace(&mut *slot, Slot::Busy) {
        Slot::Idle(observer) => observer,
        other => {
          *slot = other;
          return;
        }
      }
    };
    observer.next(value);

    let cancelled = {
      let mut slot = self.0.rc_deref_mut();
      if matches!(*slot, Slot::Busy) {
        *slot = Slot::Idle(observer);
        None
      } else {
        Some(observer)
      }
    };
    drop(cancelled);
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.terminate() {
      observer.error(err);
    }
  }

  fn complete(self) {
    if let Some(observer) = self.terminate() {
      observer.complete();
    }
  }

  fn is_closed(&self) -> bool {
    match &*self.0.rc_deref() {
      Slot::Idle(observer) => observer.is_closed(),
      Slot::Busy => false,
      Slot::Closed => true,
    }
  }
}

// ============================================================================
// DynObserver - object-safe Observer
// ============================================================================

/// Object-safe mirror of [`Observer`].
///
/// `Observer` consumes `self` on termination, which a vtable can only do
/// through `Box<Self>`.
pub trait DynObserver<Item, Err> {
  fn box_next(&mut self, value: Item);
  fn box_error(self: Box<Self>, err: Err);
  fn box_complete(self: Box<Self>);
  fn box_is_closed(&self) -> bool;
}

impl<T, Item, Err> DynObserver<Item, Err> for T
where
  T: Observer<Item, Err>,
{
  fn box_next(&mut self, value: Item) { self.next(value); }
  fn box_error(self: Box<Self>, err: Err) { self.error(err); }
  fn box_complete(self: Box<Self>) { self.complete(); }
  fn box_is_closed(&self) -> bool { self.is_closed() }
}

/// A type-erased observer.
pub type BoxedObserver<'a, Item, Err> = Box<dyn DynObserver<Item, Err> + 'a>;

impl<'a, Item, Err> Observer<Item, Err> for BoxedObserver<'a, Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { (**self).box_next(value) }

  #[inline]
  fn error(self, err: Err) { self.box_error(err) }

  #[inline]
  fn complete(self) { self.box_complete() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).box_is_closed() }
}

// ============================================================================
// Notification
// ============================================================================

/// One event of the push protocol, reified.
///
/// A well-formed sequence is any number of `Next` followed by at most one of
/// `Error` or `Complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<Item, Err> {
  Next(Item),
  Error(Err),
  Complete,
}

impl<Item, Err> Notification<Item, Err> {
  pub fn is_terminal(&self) -> bool { !matches!(self, Notification::Next(_)) }
}

// ============================================================================
// Tests
// ============================================================================
