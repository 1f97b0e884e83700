//! Trivial observables
//!
//! | Observable | Completion | Values Emitted | Error Emitted |
//! |------------|------------|----------------|---------------|
//! | [`Empty`]  | Yes        | None           | None          |
//! | [`Never`]  | No         | None           | None          |
//! | [`ThrowErr`] | No       | None           | Yes           |

use std::{convert::Infallible, marker::PhantomData};

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Completes immediately without emitting any values.
pub struct Empty<Item, Err = Infallible>(PhantomData<(Item, Err)>);

impl<Item, Err> Empty<Item, Err> {
  pub fn new() -> Self { Self(PhantomData) }
}

impl<Item, Err> Default for Empty<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Clone for Empty<Item, Err> {
  fn clone(&self) -> Self { Self::new() }
}

impl<Item, Err> ObservableType for Empty<Item, Err> {
  type Item = Item;
  type Err = Err;
}

impl<Item, Err, O> CoreObservable<O> for Empty<Item, Err>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.complete(); }
}

/// Never emits and never terminates.
pub struct Never<Item, Err = Infallible>(PhantomData<(Item, Err)>);

impl<Item, Err> Never<Item, Err> {
  pub fn new() -> Self { Self(PhantomData) }
}

impl<Item, Err> Default for Never<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Clone for Never<Item, Err> {
  fn clone(&self) -> Self { Self::new() }
}

impl<Item, Err> ObservableType for Never<Item, Err> {
  type Item = Item;
  type Err = Err;
}

impl<Item, Err, O> CoreObservable<O> for Never<Item, Err>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, _observer: O) -> Self::Unsub {}
}

/// Terminates with the given error without emitting any values.
pub struct ThrowErr<Item, Err>(Err, PhantomData<Item>);

impl<Item, Err> ThrowErr<Item, Err> {
  pub fn new(err: Err) -> Self { Self(err, PhantomData) }
}

impl<Item, Err: Clone> Clone for ThrowErr<Item, Err> {
  fn clone(&self) -> Self { Self::new(self.0.clone()) }
}

impl<Item, Err> ObservableType for ThrowErr<Item, Err> {
  type Item = Item;
  type Err = Err;
}

impl<Item, Err, O> CoreObservable<O> for ThrowErr<Item, Err>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.error(self.0); }
}
