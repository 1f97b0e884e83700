use crate::{
  error::SequenceError,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Fails with a [`SequenceError`] if the source completes without emitting.
///
/// Every unseeded fold sits behind one of these: [`Reduce`] with no seed
/// simply completes on an empty source, and this turns that completion into
/// [`SequenceError::Empty`].
///
/// [`Reduce`]: crate::ops::reduce::Reduce
#[derive(Clone)]
pub struct ThrowIfEmpty<S> {
  pub source: S,
  pub error: SequenceError,
}

impl<S> ThrowIfEmpty<S> {
  pub fn new(source: S) -> Self { Self { source, error: SequenceError::Empty } }
}

impl<S: ObservableType> ObservableType for ThrowIfEmpty<S> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, O> CoreObservable<O> for ThrowIfEmpty<S>
where
  S: CoreObservable<ThrowIfEmptyObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let ThrowIfEmpty { source, error } = self;
    source.actual_subscribe(ThrowIfEmptyObserver { observer, error, emitted: false })
  }
}

pub struct ThrowIfEmptyObserver<O> {
  observer: O,
  error: SequenceError,
  emitted: bool,
}

impl<O, Item, Err> Observer<Item, Err> for ThrowIfEmptyObserver<O>
where
  O: Observer<Item, Err>,
  Err: From<SequenceError>,
{
  fn next(&mut self, value: Item) {
    self.emitted = true;
    self.observer.next(value);
  }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) {
    if self.emitted {
      self.observer.complete()
    } else {
      self.observer.error(self.error.into())
    }
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
