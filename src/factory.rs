//! Observable factory pattern
//!
//! `ObservableFactory` gathers the constructors for source observables
//! (`of`, `from_iter`, `create`, ...) behind one namespace. Every method has a
//! default body, so a marker type only needs an empty `impl` to gain them;
//! [`Local`] is the marker this crate ships.
//!
//! ## Examples
//!
//! ```rust
//! use rxext::prelude::*;
//!
//! let mut seen = vec![];
//! Local::from_iter(vec![3, 1, 2]).running_max().subscribe(|v| seen.push(v));
//! assert_eq!(seen, vec![3]);
//! ```
//!
//! ## Trivial Observables
//!
//! | Method | Completion | Values Emitted | Error Emitted |
//! |--------|------------|----------------|---------------|
//! | `empty()` | Yes | None | None |
//! | `never()` | No | None | None |
//! | `throw_err()` | No | None | Yes |
//!
//! Sources built here are infallible unless they say otherwise. Operators that
//! can fail on their own (`min`, `reduce`, `element_at`, ...) need an error
//! type that accepts [`SequenceError`](crate::error::SequenceError); widen the
//! source first:
//!
//! ```rust
//! use rxext::prelude::*;
//!
//! let mut failure = None;
//! Local::from_iter(Vec::<i32>::new())
//!   .err_into::<SequenceError>()
//!   .min()
//!   .on_error(|e| failure = Some(e))
//!   .subscribe(|_| {});
//! assert_eq!(failure, Some(SequenceError::Empty));
//! ```

use crate::{
  observable::{Create, Empty, FromIter, Never, Of, ThrowErr},
  observer::Emitter,
  subscription::Subscription,
};

pub trait ObservableFactory {
  /// Creates an observable from a function run once per subscription.
  ///
  /// The function receives an [`Emitter`] and returns the teardown for that
  /// subscription (`()` when there is nothing to release).
  ///
  /// ```rust
  /// use rxext::prelude::*;
  ///
  /// let mut sum = 0;
  /// Local::create(|emitter| {
  ///   emitter.next(1);
  ///   emitter.next(2);
  ///   emitter.complete();
  /// })
  /// .subscribe(|v: i32| sum += v);
  /// assert_eq!(sum, 3);
  /// ```
  fn create<Item, Err, F, U>(f: F) -> Create<F, Item, Err>
  where
    F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
    U: Subscription,
  {
    Create::new(f)
  }

  /// Emits `v` and completes.
  fn of<V>(v: V) -> Of<V> { Of::new(v) }

  /// Emits every item of `iter` in order and completes.
  fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I> { FromIter::new(iter) }

  /// Completes immediately.
  fn empty<Item>() -> Empty<Item> { Empty::new() }

  /// Never emits and never terminates; only unsubscribing ends it.
  fn never<Item>() -> Never<Item> { Never::new() }

  /// Errors immediately with `error`.
  fn throw_err<Item, Err>(error: Err) -> ThrowErr<Item, Err> { ThrowErr::new(error) }
}

/// Factory for single-threaded, synchronous observables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Local;

impl ObservableFactory for Local {}
