//! `min_by`/`max_by` and their comparer-taking variants
//!
//! Collects every value under its key, then picks the winning key once the
//! source completes and emits all values filed under it, in arrival order.
//! Picking the key reuses the other operators: the natural-order variants
//! re-stream the keys through a `min`/`max` fold, the comparer variants sort
//! them and `take(1)`.

use std::{collections::HashMap, hash::Hash};

use crate::{
  comparer::{Compare, NaturalOrder},
  error::SequenceError,
  observable::{CoreObservable, FromIter, ObservableType},
  observer::Observer,
  ops::{
    minmax::{Extremum, Pick},
    reduce::Reduce,
    take::Take,
    throw_if_empty::ThrowIfEmpty,
  },
};

/// Emits, as one `Vec`, the values whose key is the extremum of all keys.
///
/// An empty source errors with [`SequenceError::Empty`].
///
/// ```
/// use rxext::prelude::*;
///
/// let mut winners = vec![];
/// Local::from_iter(["pear", "fig", "kiwi", "yam"])
///   .err_into::<SequenceError>()
///   .min_by(|s| s.len())
///   .on_error(|_| {})
///   .subscribe(|group| winners = group);
/// assert_eq!(winners, vec!["fig", "yam"]);
/// ```
#[derive(Clone)]
pub struct ExtremumBy<S, F, R> {
  source: S,
  key_selector: F,
  resolution: R,
}

impl<S, F, R> ExtremumBy<S, F, R> {
  pub fn new(source: S, key_selector: F, resolution: R) -> Self {
    Self { source, key_selector, resolution }
  }
}

impl<S: ObservableType, F, R> ObservableType for ExtremumBy<S, F, R> {
  type Item = Vec<S::Item>;
  type Err = S::Err;
}

impl<S, F, R, O, Key> CoreObservable<O> for ExtremumBy<S, F, R>
where
  S: ObservableType
    + CoreObservable<KeyGroupObserver<O, F, R, Key, <S as ObservableType>::Item>>,
  F: FnMut(&<S as ObservableType>::Item) -> Key,
{
  type Unsub =
    <S as CoreObservable<KeyGroupObserver<O, F, R, Key, <S as ObservableType>::Item>>>::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let ExtremumBy { source, key_selector, resolution } = self;
    source.actual_subscribe(KeyGroupObserver {
      observer,
      key_selector,
      resolution,
      keys: Vec::new(),
      groups: HashMap::new(),
    })
  }
}

/// Decides which collected key wins and delivers its group.
pub trait KeyResolution<Key> {
  /// `keys` holds one entry per source value, in arrival order.
  fn resolve<Item, Err, O>(self, keys: Vec<Key>, groups: HashMap<Key, Vec<Item>>, observer: O)
  where
    Key: Hash + Eq,
    O: Observer<Vec<Item>, Err>,
    Err: From<SequenceError>;
}

/// Winner by the keys' own `PartialOrd`.
#[derive(Debug, Clone, Copy)]
pub struct NaturalKeys {
  pick: Pick,
}

impl NaturalKeys {
  pub fn new(pick: Pick) -> Self { Self { pick } }
}

impl<Key: PartialOrd> KeyResolution<Key> for NaturalKeys {
  fn resolve<Item, Err, O>(self, keys: Vec<Key>, groups: HashMap<Key, Vec<Item>>, observer: O)
  where
    Key: Hash + Eq,
    O: Observer<Vec<Item>, Err>,
    Err: From<SequenceError>,
  {
    let winner = ThrowIfEmpty::new(Reduce {
      source: FromIter::<_, Err>::new(keys),
      strategy: Extremum::new(NaturalOrder, self.pick),
      initial: None,
    });
    winner.actual_subscribe(GroupResolver::new(observer, groups));
  }
}

/// Winner by a caller-supplied [`Compare`]: the first key after a stable sort,
/// ascending for `min`, descending for `max`.
#[derive(Clone, Copy)]
pub struct ComparerKeys<C> {
  order: C,
  pick: Pick,
}

impl<C> ComparerKeys<C> {
  pub fn new(order: C, pick: Pick) -> Self { Self { order, pick } }
}

impl<Key, C: Compare<Key>> KeyResolution<Key> for ComparerKeys<C> {
  fn resolve<Item, Err, O>(self, mut keys: Vec<Key>, groups: HashMap<Key, Vec<Item>>, observer: O)
  where
    Key: Hash + Eq,
    O: Observer<Vec<Item>, Err>,
    Err: From<SequenceError>,
  {
    let order = self.order;
    match self.pick {
      Pick::Min => keys.sort_by(|a, b| order.compare(a, b)),
      Pick::Max => keys.sort_by(|a, b| order.compare(b, a)),
    }
    let first = Take { source: FromIter::<_, Err>::new(keys), count: 1 };
    first.actual_subscribe(GroupResolver::new(observer, groups));
  }
}

/// Files every value under its key until the source completes.
pub struct KeyGroupObserver<O, F, R, Key, Item> {
  observer: O,
  key_selector: F,
  resolution: R,
  keys: Vec<Key>,
  groups: HashMap<Key, Vec<Item>>,
}

impl<O, F, R, Key, Item, Err> Observer<Item, Err> for KeyGroupObserver<O, F, R, Key, Item>
where
  O: Observer<Vec<Item>, Err>,
  F: FnMut(&Item) -> Key,
  R: KeyResolution<Key>,
  Key: Hash + Eq + Clone,
  Err: From<SequenceError>,
{
  fn next(&mut self, value: Item) {
    let key = (self.key_selector)(&value);
    self.keys.push(key.clone());
    self.groups.entry(key).or_default().push(value);
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) {
    let KeyGroupObserver { observer, resolution, keys, groups, .. } = self;
    resolution.resolve(keys, groups, observer);
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

/// Receives the winning key and emits its group.
struct GroupResolver<O, Key, Item> {
  observer: O,
  groups: HashMap<Key, Vec<Item>>,
  winner: Option<Vec<Item>>,
}

impl<O, Key, Item> GroupResolver<O, Key, Item> {
  fn new(observer: O, groups: HashMap<Key, Vec<Item>>) -> Self {
    Self { observer, groups, winner: None }
  }
}

impl<O, Key, Item, Err> Observer<Key, Err> for GroupResolver<O, Key, Item>
where
  O: Observer<Vec<Item>, Err>,
  Key: Hash + Eq,
  Err: From<SequenceError>,
{
  fn next(&mut self, key: Key) {
    if self.winner.is_none() {
      self.winner = self.groups.remove(&key);
    }
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(mut self) {
    match self.winner.take() {
      Some(group) => {
        self.observer.next(group);
        self.observer.complete();
      }
      None => self.observer.error(SequenceError::Empty.into()),
    }
  }

  fn is_closed(&self) -> bool { self.winner.is_some() || self.observer.is_closed() }
}

#[cfg(test)]
mod tests {
  use crate::{
    comparer::{from_sign, Comparer},
    observer::Notification,
    prelude::*,
    testing::Recorder,
  };

  #[derive(Debug, Clone, PartialEq)]
  struct Reading {
    room: &'static str,
    level: i32,
  }

  fn readings() -> Vec<Reading> {
    vec![
      Reading { room: "hall", level: 3 },
      Reading { room: "attic", level: 1 },
      Reading { room: "porch", level: 7 },
      Reading { room: "cellar", level: 1 },
      Reading { room: "study", level: 7 },
    ]
  }

  fn rooms(recorder: &Recorder<Vec<Reading>, SequenceError>) -> Vec<Vec<&'static str>> {
    recorder.values().iter().map(|g| g.iter().map(|r| r.room).collect()).collect()
  }

  #[rxext_macro::test]
  fn min_by_collects_every_tie() {
    let recorder = Recorder::new();
    Local::from_iter(readings())
      .err_into::<SequenceError>()
      .min_by(|r| r.level)
      .subscribe_with(recorder.clone());

    assert_eq!(rooms(&recorder), vec![vec!["attic", "cellar"]]);
    assert!(recorder.is_completed());
  }

  #[rxext_macro::test]
  fn max_by_collects_every_tie() {
    let recorder = Recorder::new();
    Local::from_iter(readings())
      .err_into::<SequenceError>()
      .max_by(|r| r.level)
      .subscribe_with(recorder.clone());

    assert_eq!(rooms(&recorder), vec![vec!["porch", "study"]]);
  }

  #[rxext_macro::test]
  fn comparer_variants() {
    let recorder = Recorder::new();
    Local::from_iter(readings())
      .err_into::<SequenceError>()
      .min_by_with(|r| r.level, from_sign(|a: &i32, b: &i32| a - b))
      .subscribe_with(recorder.clone());
    assert_eq!(rooms(&recorder), vec![vec!["attic", "cellar"]]);

    let recorder = Recorder::new();
    Local::from_iter(readings())
      .err_into::<SequenceError>()
      .max_by_with(|r| r.level, Comparer::new(|a: &i32, b: &i32| a.cmp(b)))
      .subscribe_with(recorder.clone());
    assert_eq!(rooms(&recorder), vec![vec!["porch", "study"]]);
  }

  #[rxext_macro::test]
  fn comparer_ties_between_distinct_keys_keep_first_seen() {
    let by_parity = Comparer::new(|a: &i32, b: &i32| (a % 2).cmp(&(b % 2)));
    let recorder = Recorder::new();
    Local::from_iter(readings())
      .err_into::<SequenceError>()
      .max_by_with(|r| r.level, by_parity)
      .subscribe_with(recorder.clone());

    assert_eq!(rooms(&recorder), vec![vec!["hall"]]);
  }

  #[rxext_macro::test]
  fn empty_source_errors() {
    let recorder = Recorder::<Vec<i32>, SequenceError>::new();
    Local::empty::<i32>()
      .err_into::<SequenceError>()
      .max_by(|v| *v)
      .subscribe_with(recorder.clone());
    assert_eq!(recorder.notifications(), vec![Notification::Error(SequenceError::Empty)]);

    let recorder = Recorder::<Vec<i32>, SequenceError>::new();
    Local::empty::<i32>()
      .err_into::<SequenceError>()
      .min_by_with(|v| *v, Comparer::new(|a: &i32, b: &i32| a.cmp(b)))
      .subscribe_with(recorder.clone());
    assert_eq!(recorder.err(), Some(SequenceError::Empty));
  }

  #[rxext_macro::test]
  fn upstream_error_is_forwarded() {
    let recorder = Recorder::<Vec<i32>, SequenceError>::new();
    Local::throw_err(SequenceError::OutOfRange { index: 1 })
      .min_by(|v: &i32| *v)
      .subscribe_with(recorder.clone());

    assert_eq!(recorder.err(), Some(SequenceError::OutOfRange { index: 1 }));
  }
}
