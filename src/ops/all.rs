use crate::{
  observable::{CoreObservable, ObservableType},
  ops::{any::ExistsObserver, skip_while::SkipWhile, take::Take},
};

/// Emits `false` and completes at the first value failing `predicate`, or
/// `true` once the source completes without one (vacuously so when empty).
///
/// Runs as `skip_while(predicate).take(1)`: a value getting through means a
/// counterexample exists.
#[derive(Clone)]
pub struct All<S, F> {
  pub source: S,
  pub predicate: F,
}

impl<S: ObservableType, F> ObservableType for All<S, F> {
  type Item = bool;
  type Err = S::Err;
}

impl<S, F, O> CoreObservable<O> for All<S, F>
where
  S: ObservableType,
  Take<SkipWhile<S, F>>: CoreObservable<ExistsObserver<O>>,
{
  type Unsub = <Take<SkipWhile<S, F>> as CoreObservable<ExistsObserver<O>>>::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let All { source, predicate } = self;
    let counterexample = Take { source: SkipWhile { source, predicate }, count: 1 };
    counterexample.actual_subscribe(ExistsObserver::new(observer, false))
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
  fn all_hold() {
    let mut emitted = vec![];
    Local::from_iter([2, 4, 6]).all(|v| v % 2 == 0).subscribe(|v| emitted.push(v));
    assert_eq!(emitted, vec![true]);
  }

  #[rxext_macro::test]
  fn counterexample() {
    let mut emitted = vec![];
    Local::from_iter([2, 3, 6]).all(|v| v % 2 == 0).subscribe(|v| emitted.push(v));
    assert_eq!(emitted, vec![false]);
  }

  #[rxext_macro::test]
  fn vacuous_truth_on_empty() {
    let mut emitted = vec![];
    Local::empty::<i32>().all(|_| false).subscribe(|v| emitted.push(v));
    assert_eq!(emitted, vec![true]);
  }

  #[rxext_macro::test]
  fn answers_before_the_source_completes() {
    let source = ManualSource::<i32, ()>::new();
    let recorder = Recorder::new();
    source.clone().all(|v| *v > 0).subscribe_with(recorder.clone());

    source.next(5);
    assert!(recorder.notifications().is_empty());
    source.next(-1);

    assert_eq!(recorder.notifications(), vec![Notification::Next(false), Notification::Complete]);
    assert_eq!(source.released(), 1);
  }
}
