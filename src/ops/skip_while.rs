use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  ops::filter::Predicate,
};

/// Drops values while `predicate` holds, then emits the first failing value
/// and everything after it without testing again.
#[derive(Clone)]
pub struct SkipWhile<S, F> {
  pub source: S,
  pub predicate: F,
}

impl<S: ObservableType, F> ObservableType for SkipWhile<S, F> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, F, O> CoreObservable<O> for SkipWhile<S, F>
where
  S: CoreObservable<SkipWhileObserver<O, F>>,
  F: Predicate<S::Item>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let SkipWhile { source, predicate } = self;
    source.actual_subscribe(SkipWhileObserver { observer, predicate, done_skipping: false })
  }
}

pub struct SkipWhileObserver<O, F> {
  observer: O,
  predicate: F,
  done_skipping: bool,
}

impl<O, Item, Err, F> Observer<Item, Err> for SkipWhileObserver<O, F>
where
  O: Observer<Item, Err>,
  F: Predicate<Item>,
{
  fn next(&mut self, value: Item) {
    if self.done_skipping {
      self.observer.next(value);
    } else if !self.predicate.test(&value) {
      self.done_skipping = true;
      self.observer.next(value);
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err); }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
