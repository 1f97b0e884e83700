use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  ops::reduce::ReduceStrategy,
};

/// Applies an accumulator over the source and emits every intermediate
/// result.
///
/// Shares [`ReduceStrategy`] with [`Reduce`](crate::ops::reduce::Reduce):
/// `scan(seed, f)` uses the seeded strategy, `running_min`/`running_max` an
/// unseeded one whose first accumulation is the first value itself.
///
/// ```
/// use rxext::prelude::*;
///
/// let mut sums = vec![];
/// Local::from_iter([1, 1, 1]).scan(100, |acc, v| acc + v).subscribe(|v| sums.push(v));
/// assert_eq!(sums, vec![101, 102, 103]);
/// ```
#[derive(Clone)]
pub struct Scan<S, Strategy, Acc> {
  pub source: S,
  pub strategy: Strategy,
  pub initial: Option<Acc>,
}

pub struct ScanObserver<O, Strategy, Acc> {
  observer: O,
  strategy: Strategy,
  acc: Option<Acc>,
}

impl<S, Strategy, Acc> ObservableType for Scan<S, Strategy, Acc>
where
  S: ObservableType,
{
  type Item = Acc;
  type Err = S::Err;
}

impl<S, Strategy, Acc, O> CoreObservable<O> for Scan<S, Strategy, Acc>
where
  S: CoreObservable<ScanObserver<O, Strategy, Acc>>,
  Strategy: ReduceStrategy<Acc, S::Item>,
  Acc: Clone,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Scan { source, strategy, initial } = self;
    source.actual_subscribe(ScanObserver { observer, strategy, acc: initial })
  }
}

impl<O, Strategy, Acc, Item, Err> Observer<Item, Err> for ScanObserver<O, Strategy, Acc>
where
  O: Observer<Acc, Err>,
  Strategy: ReduceStrategy<Acc, Item>,
  Acc: Clone,
{
  fn next(&mut self, value: Item) {
    self.acc = self.strategy.apply(self.acc.take(), value);
    if let Some(acc) = &self.acc {
      self.observer.next(acc.clone());
    }
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
