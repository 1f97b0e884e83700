use std::fmt::Debug;

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Logs every notification at `INFO` level under the `rxext::dump` target,
/// then forwards it unchanged.
///
/// The messages are `"{label} --> {value:?}"`, `"{label} failed --> {err:?}"`
/// and `"{label} completed"`. Install any `tracing` subscriber to see them.
#[derive(Clone)]
pub struct Dump<S> {
  pub source: S,
  pub label: String,
}

impl<S: ObservableType> ObservableType for Dump<S> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, O> CoreObservable<O> for Dump<S>
where
  S: CoreObservable<DumpObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Dump { source, label } = self;
    source.actual_subscribe(DumpObserver { observer, label })
  }
}

pub struct DumpObserver<O> {
  observer: O,
  label: String,
}

impl<O, Item, Err> Observer<Item, Err> for DumpObserver<O>
where
  O: Observer<Item, Err>,
  Item: Debug,
  Err: Debug,
{
  fn next(&mut self, value: Item) {
    tracing::info!(target: "rxext::dump", "{} --> {:?}", self.label, value);
    self.observer.next(value)
  }

  fn error(self, err: Err) {
    tracing::info!(target: "rxext::dump", "{} failed --> {:?}", self.label, err);
    self.observer.error(err)
  }

  fn complete(self) {
    tracing::info!(target: "rxext::dump", "{} completed", self.label);
    self.observer.complete()
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
