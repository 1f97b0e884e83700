//! Observable traits
//!
//! [`ObservableType`] names what a stream carries, [`CoreObservable`] is how
//! an observer gets attached to it, and [`Observable`] is the chainable
//! operator surface every stream gets for free.

use std::{convert::Infallible, hash::Hash};

mod create;
mod either;
mod from_iter;
mod of;
mod trivial;

pub use create::*;
pub use either::*;
pub use from_iter::*;
pub use of::*;
pub use trivial::*;

use crate::{
  comparer::{Compare, NaturalOrder},
  error::SequenceError,
  observer::{FnMutObserver, Observer, SharedObserver},
  ops::{
    all::All,
    any::{Any, AnyMatch},
    average::{self, AverageInitialOp, AverageOp, Averageable},
    compose::{KeepIf, Lift},
    contains::Contains,
    count::{self, CountOp, LongCountOp},
    distinct_until_changed::DistinctUntilChanged,
    element_at::{ElementAt, ElementAtOrDefault},
    extremum_by::{ComparerKeys, ExtremumBy, NaturalKeys},
    filter::Filter,
    flat_map::FlatMap,
    lifecycle::{OnComplete, OnError},
    map::Map,
    map_err::MapErr,
    minmax::{self, MinMaxInitialOp, MinMaxOp, Pick},
    reduce::{Reduce, ReduceFn, ReduceInitialFn},
    running::{self, RunningOp},
    scan::Scan,
    skip::Skip,
    skip_while::SkipWhile,
    sum::{self, SumInitialOp, SumOp},
    take::Take,
    tap::Tap,
    throw_if_empty::ThrowIfEmpty,
  },
  subscription::{Subscriber, Subscription},
};

/// The item and error types of a stream.
pub trait ObservableType {
  type Item;
  type Err;
}

/// Attaching an observer of type `O`.
///
/// Operators implement this by wrapping `O` in their own observer and
/// subscribing the result to their source, so the whole chain is assembled
/// from the bottom up when the outermost observer arrives.
pub trait CoreObservable<O>: ObservableType {
  type Unsub: Subscription;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}


/// Chainable operators, available on every [`ObservableType`].
pub trait Observable: ObservableType + Sized {
  // ==================== Subscribing ====================

  /// Subscribe with a closure receiving each value.
  ///
  /// Only infallible streams can be subscribed this way; route errors through
  /// [`on_error`](Observable::on_error) first.
  fn subscribe<F>(
    self, next: F,
  ) -> Subscriber<FnMutObserver<F>, <Self as CoreObservable<SharedObserver<FnMutObserver<F>>>>::Unsub>
  where
    F: FnMut(Self::Item),
    Self: ObservableType<Err = Infallible> + CoreObservable<SharedObserver<FnMutObserver<F>>>,
  {
    self.subscribe_with(FnMutObserver(next))
  }

  /// Subscribe a full observer.
  fn subscribe_with<O>(
    self, observer: O,
  ) -> Subscriber<O, <Self as CoreObservable<SharedObserver<O>>>::Unsub>
  where
    O: Observer<Self::Item, Self::Err>,
    Self: CoreObservable<SharedObserver<O>>,
  {
    let observer = SharedObserver::new(observer);
    let upstream = self.actual_subscribe(observer.clone());
    Subscriber::new(observer, upstream)
  }

  // ==================== Primitive combinators ====================

  fn map<B, F>(self, func: F) -> Map<Self, F>
  where
    F: FnMut(Self::Item) -> B,
  {
    Map { source: self, func }
  }

  fn filter<F>(self, filter: F) -> Filter<Self, F>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    Filter { source: self, filter }
  }

  /// Emit the first `count` values, then complete and release upstream.
  fn take(self, count: usize) -> Take<Self> { Take { source: self, count } }

  fn skip(self, count: usize) -> Skip<Self> { Skip { source: self, count } }

  fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, F>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    SkipWhile { source: self, predicate }
  }

  /// Emit every intermediate accumulation, starting from `initial`.
  fn scan<Acc, F>(self, initial: Acc, func: F) -> Scan<Self, ReduceInitialFn<F>, Acc>
  where
    F: FnMut(Acc, Self::Item) -> Acc,
  {
    Scan { source: self, strategy: ReduceInitialFn(func), initial: Some(initial) }
  }

  fn distinct_until_changed(self) -> DistinctUntilChanged<Self>
  where
    Self::Item: PartialEq + Clone,
  {
    DistinctUntilChanged(self)
  }

  /// Fold without a seed; an empty source fails with
  /// [`SequenceError::Empty`].
  fn reduce<F>(self, func: F) -> ThrowIfEmpty<Reduce<Self, ReduceFn<F>, Self::Item>>
  where
    F: FnMut(Self::Item, Self::Item) -> Self::Item,
    Self::Err: From<SequenceError>,
  {
    ThrowIfEmpty::new(Reduce { source: self, strategy: ReduceFn(func), initial: None })
  }

  /// Fold from `initial`; always emits, even for an empty source.
  fn reduce_initial<Acc, F>(self, initial: Acc, func: F) -> Reduce<Self, ReduceInitialFn<F>, Acc>
  where
    F: FnMut(Acc, Self::Item) -> Acc,
  {
    Reduce { source: self, strategy: ReduceInitialFn(func), initial: Some(initial) }
  }

  /// Fail with [`SequenceError::Empty`] if the source completes without a
  /// value.
  fn throw_if_empty(self) -> ThrowIfEmpty<Self>
  where
    Self::Err: From<SequenceError>,
  {
    ThrowIfEmpty::new(self)
  }

  /// Subscribe to the observable returned for every value and merge their
  /// outputs.
  fn flat_map<Inner, F>(self, func: F) -> FlatMap<Self, F>
  where
    F: FnMut(Self::Item) -> Inner,
    Inner: ObservableType<Err = Self::Err>,
  {
    FlatMap { source: self, func }
  }

  fn map_err<E, F>(self, func: F) -> MapErr<Self, F>
  where
    F: FnOnce(Self::Err) -> E,
  {
    MapErr { source: self, func }
  }

  /// Widen the error type through `Into`, e.g. an infallible source into one
  /// that operators raising [`SequenceError`] accept.
  fn err_into<E>(self) -> MapErr<Self, fn(Self::Err) -> E>
  where
    Self::Err: Into<E>,
  {
    MapErr { source: self, func: Into::into }
  }

  /// Handle the error, turning the stream infallible.
  fn on_error<F>(self, callback: F) -> OnError<Self, F>
  where
    F: FnOnce(Self::Err),
  {
    OnError::new(self, callback)
  }

  fn on_complete<F>(self, callback: F) -> OnComplete<Self, F>
  where
    F: FnOnce(),
  {
    OnComplete::new(self, callback)
  }

  /// Observe each value by reference without changing the stream.
  fn tap<F>(self, func: F) -> Tap<Self, F>
  where
    F: FnMut(&Self::Item),
  {
    Tap { source: self, func }
  }

  /// Log every notification under `label` and pass it through unchanged.
  #[cfg(feature = "dump")]
  fn dump(self, label: impl Into<String>) -> crate::ops::dump::Dump<Self>
  where
    Self::Item: std::fmt::Debug,
    Self::Err: std::fmt::Debug,
  {
    crate::ops::dump::Dump { source: self, label: label.into() }
  }

  // ==================== Terminal aggregation ====================

  fn count(self) -> CountOp<Self, Self::Item> { count::count(self) }

  fn long_count(self) -> LongCountOp<Self, Self::Item> { count::long_count(self) }

  fn sum(self) -> SumOp<Self, Self::Item>
  where
    Self::Item: std::ops::Add<Output = Self::Item>,
    Self::Err: From<SequenceError>,
  {
    sum::sum(self)
  }

  fn sum_initial(self, seed: Self::Item) -> SumInitialOp<Self, Self::Item>
  where
    Self::Item: std::ops::Add<Output = Self::Item>,
  {
    sum::sum_initial(self, seed)
  }

  fn average(self) -> AverageOp<Self, Self::Item>
  where
    Self::Item: Averageable,
    Self::Err: From<SequenceError>,
  {
    average::average(self)
  }

  /// Average with `seed` counted as one extra sample.
  fn average_initial(self, seed: Self::Item) -> AverageInitialOp<Self, Self::Item>
  where
    Self::Item: Averageable,
  {
    average::average_initial(self, seed)
  }

  fn min(self) -> MinMaxOp<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd,
    Self::Err: From<SequenceError>,
  {
    minmax::extremum(self, NaturalOrder, Pick::Min)
  }

  fn max(self) -> MinMaxOp<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd,
    Self::Err: From<SequenceError>,
  {
    minmax::extremum(self, NaturalOrder, Pick::Max)
  }

  fn min_initial(self, seed: Self::Item) -> MinMaxInitialOp<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd,
  {
    minmax::extremum_initial(self, seed, NaturalOrder, Pick::Min)
  }

  fn max_initial(self, seed: Self::Item) -> MinMaxInitialOp<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd,
  {
    minmax::extremum_initial(self, seed, NaturalOrder, Pick::Max)
  }

  fn min_with<C>(self, order: C) -> MinMaxOp<Self, Self::Item, C>
  where
    C: Compare<Self::Item>,
    Self::Err: From<SequenceError>,
  {
    minmax::extremum(self, order, Pick::Min)
  }

  fn max_with<C>(self, order: C) -> MinMaxOp<Self, Self::Item, C>
  where
    C: Compare<Self::Item>,
    Self::Err: From<SequenceError>,
  {
    minmax::extremum(self, order, Pick::Max)
  }

  // ==================== Running aggregation ====================

  /// Emit the smallest value seen so far whenever it changes.
  fn running_min(self) -> RunningOp<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd + Clone,
  {
    running::running(self, NaturalOrder, Pick::Min)
  }

  /// Emit the largest value seen so far whenever it changes.
  fn running_max(self) -> RunningOp<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd + Clone,
  {
    running::running(self, NaturalOrder, Pick::Max)
  }

  // ==================== Key-extremum selection ====================

  /// All values whose key is the smallest key seen.
  fn min_by<Key, F>(self, key_selector: F) -> ExtremumBy<Self, F, NaturalKeys>
  where
    F: FnMut(&Self::Item) -> Key,
    Key: PartialOrd + Hash + Eq + Clone,
  {
    ExtremumBy::new(self, key_selector, NaturalKeys::new(Pick::Min))
  }

  /// All values whose key is the largest key seen.
  fn max_by<Key, F>(self, key_selector: F) -> ExtremumBy<Self, F, NaturalKeys>
  where
    F: FnMut(&Self::Item) -> Key,
    Key: PartialOrd + Hash + Eq + Clone,
  {
    ExtremumBy::new(self, key_selector, NaturalKeys::new(Pick::Max))
  }

  /// All values whose key sorts first under `order`.
  fn min_by_with<Key, F, C>(self, key_selector: F, order: C) -> ExtremumBy<Self, F, ComparerKeys<C>>
  where
    F: FnMut(&Self::Item) -> Key,
    Key: Hash + Eq + Clone,
    C: Compare<Key>,
  {
    ExtremumBy::new(self, key_selector, ComparerKeys::new(order, Pick::Min))
  }

  /// All values whose key sorts last under `order`.
  fn max_by_with<Key, F, C>(self, key_selector: F, order: C) -> ExtremumBy<Self, F, ComparerKeys<C>>
  where
    F: FnMut(&Self::Item) -> Key,
    Key: Hash + Eq + Clone,
    C: Compare<Key>,
  {
    ExtremumBy::new(self, key_selector, ComparerKeys::new(order, Pick::Max))
  }

  // ==================== Quantifiers & inspection ====================

  /// `true` as soon as one value arrives, `false` if the source completes
  /// empty.
  fn any(self) -> Any<Self> { Any { source: self } }

  fn any_match<F>(self, predicate: F) -> AnyMatch<Self, F>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    Any { source: self.filter(predicate) }
  }

  /// `false` as soon as a value fails `predicate`, `true` if none does.
  fn all<F>(self, predicate: F) -> All<Self, F>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    All { source: self, predicate }
  }

  fn contains(self, target: Self::Item) -> Contains<Self, Self::Item, NaturalOrder>
  where
    Self::Item: PartialOrd,
  {
    Contains::new(self, target, NaturalOrder)
  }

  /// Like [`contains`](Observable::contains), with equality decided by
  /// `order` reporting `Equal`.
  fn contains_with<C>(self, target: Self::Item, order: C) -> Contains<Self, Self::Item, C>
  where
    C: Compare<Self::Item>,
  {
    Contains::new(self, target, order)
  }

  /// The value at `index`; fails with [`SequenceError::OutOfRange`] if the
  /// source completes first.
  fn element_at(self, index: usize) -> ElementAt<Self>
  where
    Self::Err: From<SequenceError>,
  {
    ElementAt { source: self, index }
  }

  /// The value at `index`, or `default` if the source completes first.
  fn element_at_or_default(
    self, index: usize, default: Self::Item,
  ) -> ElementAtOrDefault<Self, Self::Item> {
    ElementAtOrDefault { source: self, index, default }
  }

  // ==================== Composition ====================

  /// `filter`, spelled as a `flat_map` onto a one-item or an empty sequence.
  fn filter_by_flat_map<F>(self, predicate: F) -> FlatMap<Self, KeepIf<F, Self::Err>>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    FlatMap { source: self, func: KeepIf::new(predicate) }
  }

  /// `map`, spelled as a `flat_map` onto a one-item sequence.
  fn map_by_flat_map<B, F>(self, func: F) -> FlatMap<Self, Lift<F, Self::Err>>
  where
    F: FnMut(Self::Item) -> B,
  {
    FlatMap { source: self, func: Lift::new(func) }
  }
}

impl<T: ObservableType> Observable for T {}
