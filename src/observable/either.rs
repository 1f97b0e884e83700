use crate::{
  observable::{CoreObservable, ObservableType},
  subscription::Subscription,
};

/// One of two observables with the same item and error types.
///
/// Lets a closure pick between differently-typed sources at runtime, e.g. a
/// `flat_map` projection that returns either a one-item or an empty
/// sequence.
#[derive(Clone)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

impl<L, R> ObservableType for Either<L, R>
where
  L: ObservableType,
  R: ObservableType<Item = L::Item, Err = L::Err>,
{
  type Item = L::Item;
  type Err = L::Err;
}

impl<L, R, O> CoreObservable<O> for Either<L, R>
where
  L: CoreObservable<O>,
  R: CoreObservable<O, Item = L::Item, Err = L::Err>,
{
  type Unsub = EitherSubscription<L::Unsub, R::Unsub>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    match self {
      Either::Left(l) => EitherSubscription::Left(l.actual_subscribe(observer)),
      Either::Right(r) => EitherSubscription::Right(r.actual_subscribe(observer)),
    }
  }
}

/// The subscription of whichever arm of an [`Either`] was subscribed.
pub enum EitherSubscription<L, R> {
  Left(L),
  Right(R),
}

impl<L: Subscription, R: Subscription> Subscription for EitherSubscription<L, R> {
  fn unsubscribe(self) {
    match self {
      EitherSubscription::Left(l) => l.unsubscribe(),
      EitherSubscription::Right(r) => r.unsubscribe(),
    }
  }

  fn is_closed(&self) -> bool {
    match self {
      EitherSubscription::Left(l) => l.is_closed(),
      EitherSubscription::Right(r) => r.is_closed(),
    }
  }
}
