use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Converts the error with `func`; values and completion pass unchanged.
///
/// Also backs `err_into`, with `Into::into` as the function.
#[derive(Clone)]
pub struct MapErr<S, F> {
  pub source: S,
  pub func: F,
}

pub struct MapErrObserver<O, F> {
  observer: O,
  func: F,
}

impl<O, F, Item, Err, OutErr> Observer<Item, Err> for MapErrObserver<O, F>
where
  O: Observer<Item, OutErr>,
  F: FnOnce(Err) -> OutErr,
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) {
    let out_err = (self.func)(err);
    self.observer.error(out_err);
  }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, OutErr> ObservableType for MapErr<S, F>
where
  S: ObservableType,
  F: FnOnce(S::Err) -> OutErr,
{
  type Item = S::Item;
  type Err = OutErr;
}

impl<S, F, O, OutErr> CoreObservable<O> for MapErr<S, F>
where
  S: CoreObservable<MapErrObserver<O, F>>,
  F: FnOnce(S::Err) -> OutErr,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let MapErr { source, func } = self;
    source.actual_subscribe(MapErrObserver { observer, func })
  }
}
