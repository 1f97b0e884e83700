use std::marker::PhantomData;

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::{Emitter, Observer},
  subscription::Subscription,
};

/// Observable created from a function.
///
/// The function runs once per subscription, receives an [`Emitter`] and
/// returns the teardown for that subscription. This struct is created by
/// `ObservableFactory::create`.
pub struct Create<F, Item, Err> {
  f: F,
  _marker: PhantomData<(Item, Err)>,
}

impl<F, Item, Err> Create<F, Item, Err> {
  pub fn new(f: F) -> Self { Self { f, _marker: PhantomData } }
}

impl<F: Clone, Item, Err> Clone for Create<F, Item, Err> {
  fn clone(&self) -> Self { Self::new(self.f.clone()) }
}

impl<F, Item, Err> ObservableType for Create<F, Item, Err> {
  type Item = Item;
  type Err = Err;
}

/// Hands notifications to the observer until the first terminal one.
struct CreateEmitter<O>(Option<O>);

impl<O, Item, Err> Emitter<Item, Err> for CreateEmitter<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(observer) = &mut self.0 {
      observer.next(value);
    }
  }

  #[inline]
  fn error(&mut self, err: Err) {
    if let Some(observer) = self.0.take() {
      observer.error(err);
    }
  }

  #[inline]
  fn complete(&mut self) {
    if let Some(observer) = self.0.take() {
      observer.complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_closed() }
}

impl<O, F, Item, Err, U> CoreObservable<O> for Create<F, Item, Err>
where
  O: Observer<Item, Err>,
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  type Unsub = U;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let mut emitter = CreateEmitter(Some(observer));
    (self.f)(&mut emitter)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    observer::Notification,
    prelude::*,
    testing::{DisposalCounter, Recorder},
  };

  #[rxext_macro::test]
  fn nothing_passes_after_a_terminal() {
    let recorder = Recorder::<i32, &str>::new();
    Local::create(|emitter| {
      emitter.next(1);
      emitter.complete();
      emitter.next(2);
      emitter.error("late");
    })
    .subscribe_with(recorder.clone());

    assert_eq!(recorder.notifications(), vec![Notification::Next(1), Notification::Complete]);
  }

  #[rxext_macro::test]
  fn errors_are_delivered() {
    let recorder = Recorder::<i32, &str>::new();
    Local::create(|emitter| emitter.error("oops")).subscribe_with(recorder.clone());
    assert_eq!(recorder.err(), Some("oops"));
  }

  #[rxext_macro::test]
  fn returned_teardown_runs_on_unsubscribe() {
    let counter = DisposalCounter::new();
    let c_counter = counter.clone();
    let subscription = Local::create(move |emitter: &mut dyn Emitter<i32, _>| {
      emitter.next(1);
      c_counter.subscription()
    })
    .subscribe(|_| {});

    assert_eq!(counter.count(), 0);
    subscription.unsubscribe();
    assert_eq!(counter.count(), 1);
  }

  #[rxext_macro::test]
  fn emitter_reports_closed_after_complete() {
    let mut closed_after = None;
    Local::create(|emitter: &mut dyn Emitter<i32, _>| {
      emitter.complete();
      closed_after = Some(emitter.is_closed());
    })
    .subscribe(|_| {});

    assert_eq!(closed_after, Some(true));
  }
}
