//! Folding a sequence into one value
//!
//! `Reduce` drives a [`ReduceStrategy`] over every value and emits the final
//! accumulator on completion. `count`, `sum`, `min`, `max` and `average` are
//! all `Reduce` with their own strategy; the accumulator lives in the
//! observer, so every subscription folds from scratch.

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// One fold step.
pub trait ReduceStrategy<Acc, Item> {
  /// `acc` is `None` before the first value of an unseeded fold.
  fn apply(&mut self, acc: Option<Acc>, value: Item) -> Option<Acc>;
}

/// Unseeded step: the first value becomes the accumulator.
#[derive(Clone)]
pub struct ReduceFn<F>(pub F);

impl<F, Item> ReduceStrategy<Item, Item> for ReduceFn<F>
where
  F: FnMut(Item, Item) -> Item,
{
  fn apply(&mut self, acc: Option<Item>, value: Item) -> Option<Item> {
    match acc {
      Some(acc) => Some((self.0)(acc, value)),
      None => Some(value),
    }
  }
}

/// Seeded step.
#[derive(Clone)]
pub struct ReduceInitialFn<F>(pub F);

impl<F, Acc, Item> ReduceStrategy<Acc, Item> for ReduceInitialFn<F>
where
  F: FnMut(Acc, Item) -> Acc,
{
  fn apply(&mut self, acc: Option<Acc>, value: Item) -> Option<Acc> {
    // seeded, so `acc` is only `None` if the caller built the operator by hand
    acc.map(|a| (self.0)(a, value))
  }
}

/// The `Reduce` operator.
///
/// Emits nothing but the final accumulator, right before completing. With no
/// seed and no values there is nothing to emit and it simply completes; wrap
/// it in [`ThrowIfEmpty`](crate::ops::throw_if_empty::ThrowIfEmpty) to turn
/// that into an error.
#[derive(Clone)]
pub struct Reduce<S, Strategy, Acc> {
  /// The source Observable.
  pub source: S,
  /// The reduction strategy (encapsulating the accumulator function).
  pub strategy: Strategy,
  /// The initial accumulated value (None for unseeded reduction).
  pub initial: Option<Acc>,
}

impl<S, Strategy, Acc> ObservableType for Reduce<S, Strategy, Acc>
where
  S: ObservableType,
{
  type Item = Acc;
  type Err = S::Err;
}

impl<S, Strategy, Acc, O> CoreObservable<O> for Reduce<S, Strategy, Acc>
where
  S: CoreObservable<ReduceObserver<O, Strategy, Acc>>,
  Strategy: ReduceStrategy<Acc, S::Item>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Reduce { source, strategy, initial } = self;
    source.actual_subscribe(ReduceObserver { observer, strategy, acc: initial })
  }
}

/// Observer implementation for the Reduce operator.
pub struct ReduceObserver<O, Strategy, Acc> {
  observer: O,
  strategy: Strategy,
  acc: Option<Acc>,
}

impl<O, Strategy, Acc, Item, Err> Observer<Item, Err> for ReduceObserver<O, Strategy, Acc>
where
  O: Observer<Acc, Err>,
  Strategy: ReduceStrategy<Acc, Item>,
{
  fn next(&mut self, value: Item) { self.acc = self.strategy.apply(self.acc.take(), value); }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(mut self) {
    if let Some(acc) = self.acc.take() {
      self.observer.next(acc);
    }
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
