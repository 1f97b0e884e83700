use std::{convert::Infallible, marker::PhantomData};

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Observable that emits a single value and completes.
///
/// This struct is created by `ObservableFactory::of`.
pub struct Of<V, Err = Infallible> {
  value: V,
  _marker: PhantomData<Err>,
}

impl<V, Err> Of<V, Err> {
  pub fn new(value: V) -> Self { Self { value, _marker: PhantomData } }
}

impl<V: Clone, Err> Clone for Of<V, Err> {
  fn clone(&self) -> Self { Self::new(self.value.clone()) }
}

impl<V, Err> ObservableType for Of<V, Err> {
  type Item = V;
  type Err = Err;
}

impl<V, Err, O> CoreObservable<O> for Of<V, Err>
where
  O: Observer<V, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    observer.next(self.value);
    observer.complete();
  }
}
