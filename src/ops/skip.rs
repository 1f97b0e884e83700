//! `skip(n)`, the positioning half of `element_at`.

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Ignores the first `count` values from the source.
///
/// If the source completes before emitting `count` values, `skip` completes
/// without emitting anything.
///
/// # Examples
///
/// ```
/// use rxext::prelude::*;
///
/// let mut result = Vec::new();
/// Local::from_iter([1, 2, 3, 4, 5]).skip(2).subscribe(|v| result.push(v));
/// assert_eq!(result, vec![3, 4, 5]);
/// ```
#[derive(Clone)]
pub struct Skip<S> {
  pub source: S,
  pub count: usize,
}

impl<S: ObservableType> ObservableType for Skip<S> {
  type Item = S::Item;
  type Err = S::Err;
}

pub struct SkipObserver<O> {
  observer: O,
  remaining: usize,
}

impl<O, Item, Err> Observer<Item, Err> for SkipObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, v: Item) {
    if self.remaining > 0 {
      self.remaining -= 1;
    } else {
      self.observer.next(v);
    }
  }

  fn error(self, e: Err) { self.observer.error(e); }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, O> CoreObservable<O> for Skip<S>
where
  S: CoreObservable<SkipObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Skip { source, count } = self;
    source.actual_subscribe(SkipObserver { observer, remaining: count })
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    observer::Notification,
    prelude::*,
    testing::{ManualSource, Recorder},
  };

  #[rxext_macro::test]
  fn drops_the_prefix() {
    let recorder = Recorder::new();
    Local::from_iter(0..100).skip(95).subscribe_with(recorder.clone());

    assert_eq!(recorder.values(), vec![95, 96, 97, 98, 99]);
    assert!(recorder.is_completed());
  }

  #[rxext_macro::test]
  fn skip_more_than_emitted() {
    let recorder = Recorder::new();
    Local::from_iter(0..10).skip(20).subscribe_with(recorder.clone());
    assert_eq!(recorder.notifications(), vec![Notification::<i32, _>::Complete]);
  }

  #[rxext_macro::test]
  fn skip_zero_passes_everything() {
    let mut result = vec![];
    Local::from_iter([7, 8]).skip(0).subscribe(|v| result.push(v));
    assert_eq!(result, vec![7, 8]);
  }

  #[rxext_macro::test]
  fn error_during_the_prefix() {
    let source = ManualSource::<i32, &str>::new();
    let recorder = Recorder::new();
    source.clone().skip(3).subscribe_with(recorder.clone());

    source.next(1);
    source.error("early");

    assert_eq!(recorder.notifications(), vec![Notification::Error("early")]);
  }
}
