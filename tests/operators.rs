//! End-to-end behavior of the derived operators.
//!
//! Chains operators the way callers do and checks the observable contract:
//! values, termination and upstream release.

use std::{
  cell::{Cell, RefCell},
  convert::Infallible,
  rc::Rc,
};

use proptest::prelude::*;
use rxext::{
  observer::Notification,
  prelude::*,
  testing::{DisposalCounter, ManualSource, Recorder},
};

#[rxext_macro::test]
fn running_max_emits_each_new_high() {
  let mut emitted = vec![];
  Local::from_iter([1, 3, 2, 5, 4]).running_max().subscribe(|v| emitted.push(v));
  assert_eq!(emitted, vec![1, 3, 5]);
}

#[rxext_macro::test]
fn running_min_emits_each_new_low() {
  let mut emitted = vec![];
  Local::from_iter([4, 5, 2, 2, 3, 1]).running_min().subscribe(|v| emitted.push(v));
  assert_eq!(emitted, vec![4, 2, 1]);
}

#[rxext_macro::test]
fn min_by_groups_by_remainder() {
  let mut groups = vec![];
  Local::from_iter([1, 4, 7, 2, 5])
    .err_into::<SequenceError>()
    .min_by(|v| v % 3)
    .on_error(|_| {})
    .subscribe(|group| groups.push(group));

  assert_eq!(groups, vec![vec![1, 4, 7]]);
}

#[rxext_macro::test]
fn max_by_with_sorts_last_under_the_order() {
  let recorder = Recorder::new();
  Local::from_iter(["a", "bb", "c", "dd"])
    .err_into::<SequenceError>()
    .max_by_with(|s| s.len(), NaturalOrder)
    .subscribe_with(recorder.clone());

  assert_eq!(
    recorder.notifications(),
    vec![Notification::Next(vec!["bb", "dd"]), Notification::Complete]
  );
}

#[rxext_macro::test]
fn key_extremum_on_empty_source_fails() {
  let natural = Recorder::<Vec<i32>, SequenceError>::new();
  Local::empty::<i32>().err_into::<SequenceError>().max_by(|v| *v).subscribe_with(natural.clone());

  let ordered = Recorder::<Vec<i32>, SequenceError>::new();
  Local::empty::<i32>()
    .err_into::<SequenceError>()
    .min_by_with(|v| *v, NaturalOrder)
    .subscribe_with(ordered.clone());

  assert_eq!(natural.notifications(), vec![Notification::Error(SequenceError::Empty)]);
  assert_eq!(ordered.notifications(), vec![Notification::Error(SequenceError::Empty)]);
}

#[rxext_macro::test]
fn any_match_on_unbounded_source_takes_one_value() {
  let pushed = Rc::new(Cell::new(0));
  let counter = DisposalCounter::new();
  let (c_pushed, c_counter) = (pushed.clone(), counter.clone());
  let recorder = Recorder::new();

  let subscription = Local::create(move |emitter: &mut dyn Emitter<u64, Infallible>| {
    let mut value = 0;
    while !emitter.is_closed() {
      c_pushed.set(c_pushed.get() + 1);
      emitter.next(value);
      value += 1;
    }
    c_counter.subscription()
  })
  .any_match(|v| *v == 0)
  .subscribe_with(recorder.clone());

  assert_eq!(recorder.notifications(), vec![Notification::Next(true), Notification::Complete]);
  assert_eq!(pushed.get(), 1);
  assert_eq!(counter.count(), 1);

  subscription.unsubscribe();
  assert_eq!(counter.count(), 1);
}

#[rxext_macro::test]
fn all_answers_without_consuming_the_rest() {
  let pulled = Rc::new(Cell::new(0));
  let c_pulled = pulled.clone();
  let mut emitted = vec![];
  Local::from_iter([1, 2, 3, 6, 4].into_iter().inspect(move |_| c_pulled.set(c_pulled.get() + 1)))
    .all(|v| *v < 5)
    .subscribe(|v| emitted.push(v));

  assert_eq!(emitted, vec![false]);
  assert_eq!(pulled.get(), 4);
}

#[rxext_macro::test]
fn quantifiers_release_a_live_source_once() {
  let source = ManualSource::<i32, ()>::new();
  let recorder = Recorder::new();
  source.clone().contains(3).subscribe_with(recorder.clone());

  source.next(1);
  source.next(3);
  source.next(5);

  assert_eq!(recorder.notifications(), vec![Notification::Next(true), Notification::Complete]);
  assert_eq!(source.released(), 1);
  assert!(!source.is_observed());
}

#[rxext_macro::test]
fn element_at_or_default_examples() {
  let mut emitted = vec![];
  Local::from_iter([7, 8, 9]).element_at_or_default(10, -1).subscribe(|v| emitted.push(v));
  Local::from_iter([7, 8, 9]).element_at_or_default(1, -1).subscribe(|v| emitted.push(v));
  assert_eq!(emitted, vec![-1, 8]);
}

#[rxext_macro::test]
fn double_disposal_is_harmless() {
  let source = ManualSource::<i32, ()>::new();
  let recorder = Recorder::new();
  let subscription = source.clone().take(10).subscribe_with(recorder.clone());

  source.next(1);
  subscription.clone().unsubscribe();
  subscription.unsubscribe();
  source.next(2);
  source.complete();

  assert_eq!(recorder.notifications(), vec![Notification::Next(1)]);
  assert_eq!(source.released(), 1);
}

#[rxext_macro::test]
fn value_callback_can_cancel_its_own_subscription() {
  let source = ManualSource::<i32, Infallible>::new();
  let cancel: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::default();
  let seen = Rc::new(RefCell::new(vec![]));
  let (c_cancel, c_seen) = (cancel.clone(), seen.clone());

  let subscription = source.clone().running_max().subscribe(move |v| {
    c_seen.borrow_mut().push(v);
    if v >= 3 {
      let cancel = c_cancel.borrow_mut().take();
      if let Some(cancel) = cancel {
        cancel();
      }
    }
  });
  *cancel.borrow_mut() = Some(Box::new(move || subscription.unsubscribe()));

  source.next(1);
  source.next(3);
  source.next(5);

  assert_eq!(*seen.borrow(), vec![1, 3]);
  assert_eq!(source.released(), 1);
  assert!(!source.is_observed());
}

#[rxext_macro::test]
fn seeded_average_counts_the_seed() {
  let mut emitted = vec![];
  Local::from_iter([2, 4]).average_initial(0).subscribe(|v| emitted.push(v));
  Local::empty::<i32>().average_initial(5).subscribe(|v| emitted.push(v));
  assert_eq!(emitted, vec![2, 5]);
}

#[rxext_macro::test]
fn upstream_errors_reach_every_aggregate() {
  let failure = SequenceError::OutOfRange { index: 9 };
  let feed = |source: &ManualSource<i32, SequenceError>| {
    source.next(1);
    source.error(failure);
  };

  let (source, sum) = (ManualSource::<i32, SequenceError>::new(), Recorder::new());
  source.clone().sum().subscribe_with(sum.clone());
  feed(&source);

  let (source, average) = (ManualSource::<i32, SequenceError>::new(), Recorder::new());
  source.clone().average().subscribe_with(average.clone());
  feed(&source);

  let (source, grouped) = (ManualSource::<i32, SequenceError>::new(), Recorder::new());
  source.clone().min_by(|v| v % 2).subscribe_with(grouped.clone());
  feed(&source);

  assert_eq!(sum.notifications(), vec![Notification::Error(failure)]);
  assert_eq!(average.notifications(), vec![Notification::Error(failure)]);
  assert_eq!(grouped.notifications(), vec![Notification::Error(failure)]);
}

proptest! {
  #[test]
  fn count_matches_length(values in prop::collection::vec(any::<i16>(), 0..64)) {
    let recorder = Recorder::new();
    Local::from_iter(values.clone()).count().subscribe_with(recorder.clone());

    prop_assert_eq!(recorder.values(), vec![values.len()]);
    prop_assert!(recorder.is_completed());
  }

  #[test]
  fn min_and_max_bound_every_value(values in prop::collection::vec(any::<i32>(), 1..64)) {
    let mut low = None;
    let mut high = None;
    Local::from_iter(values.clone())
      .err_into::<SequenceError>()
      .min()
      .on_error(|_| {})
      .subscribe(|v| low = Some(v));
    Local::from_iter(values.clone())
      .err_into::<SequenceError>()
      .max()
      .on_error(|_| {})
      .subscribe(|v| high = Some(v));

    let (low, high) = (low.unwrap(), high.unwrap());
    prop_assert!(values.iter().all(|v| low <= *v && *v <= high));
    prop_assert!(values.contains(&low) && values.contains(&high));
  }

  #[test]
  fn flat_map_spellings_match_primitives(values in prop::collection::vec(any::<i32>(), 0..64)) {
    let (mut filtered, mut filtered_by_flat_map) = (vec![], vec![]);
    Local::from_iter(values.clone()).filter(|v| v % 2 == 0).subscribe(|v| filtered.push(v));
    Local::from_iter(values.clone())
      .filter_by_flat_map(|v| v % 2 == 0)
      .subscribe(|v| filtered_by_flat_map.push(v));
    prop_assert_eq!(filtered, filtered_by_flat_map);

    let (mut mapped, mut mapped_by_flat_map) = (vec![], vec![]);
    Local::from_iter(values.clone()).map(|v| v.wrapping_mul(3)).subscribe(|v| mapped.push(v));
    Local::from_iter(values)
      .map_by_flat_map(|v| v.wrapping_mul(3))
      .subscribe(|v| mapped_by_flat_map.push(v));
    prop_assert_eq!(mapped, mapped_by_flat_map);
  }
}
