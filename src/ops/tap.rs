use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Calls `func` with a reference to each value before passing it on.
#[derive(Clone)]
pub struct Tap<S, F> {
  pub source: S,
  pub func: F,
}

impl<S: ObservableType, F> ObservableType for Tap<S, F> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, F, O> CoreObservable<O> for Tap<S, F>
where
  S: CoreObservable<TapObserver<O, F>>,
  F: FnMut(&S::Item),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Tap { source, func } = self;
    source.actual_subscribe(TapObserver { observer, func })
  }
}

pub struct TapObserver<O, F> {
  observer: O,
  func: F,
}

impl<O, F, Item, Err> Observer<Item, Err> for TapObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item),
{
  fn next(&mut self, value: Item) {
    (self.func)(&value);
    self.observer.next(value)
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
