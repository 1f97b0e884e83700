use std::{convert::Infallible, marker::PhantomData};

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Observable that pushes every item of an iterator, then completes.
///
/// Stops pulling from the iterator as soon as the observer reports itself
/// closed, so `Local::from_iter(0..).take(3)` terminates.
///
/// This struct is created by `ObservableFactory::from_iter`. The error type is
/// `Infallible` there; operators that replay collected data into another
/// stream pick the error type they need.
pub struct FromIter<I, Err = Infallible> {
  iter: I,
  _marker: PhantomData<Err>,
}

impl<I, Err> FromIter<I, Err> {
  pub fn new(iter: I) -> Self { Self { iter, _marker: PhantomData } }
}

impl<I: Clone, Err> Clone for FromIter<I, Err> {
  fn clone(&self) -> Self { Self::new(self.iter.clone()) }
}

impl<I, Err> ObservableType for FromIter<I, Err>
where
  I: IntoIterator,
{
  type Item = I::Item;
  type Err = Err;
}

impl<I, Err, O> CoreObservable<O> for FromIter<I, Err>
where
  I: IntoIterator,
  O: Observer<I::Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    let mut iter = self.iter.into_iter();
    loop {
      if observer.is_closed() {
        return;
      }
      match iter.next() {
        Some(v) => observer.next(v),
        None => break,
      }
    }
    observer.complete();
  }
}
