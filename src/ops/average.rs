use std::ops::Add;

use crate::ops::{
  map::Map,
  reduce::{Reduce, ReduceStrategy},
  throw_if_empty::ThrowIfEmpty,
};

/// Sums that can be divided by their sample count.
pub trait Averageable: Add<Output = Self> + Sized {
  fn div_count(self, count: usize) -> Self;
}

impl Averageable for f32 {
  fn div_count(self, count: usize) -> Self { self / (count as f32) }
}

impl Averageable for f64 {
  fn div_count(self, count: usize) -> Self { self / (count as f64) }
}

// A count too wide for the item type exceeds any total that fits in it, so the
// truncated quotient is zero.
macro_rules! impl_averageable_int {
  ($($t:ty),*) => {
    $(
      impl Averageable for $t {
        fn div_count(self, count: usize) -> Self {
          <$t>::try_from(count).map_or(0, |count| self / count)
        }
      }
    )*
  };
}

impl_averageable_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Running `(total, samples)` pair. The first value of an unseeded average
/// opens it as `(value, 1)`; every later value adds itself and one sample.
#[derive(Clone, Copy, Default)]
pub struct AverageStep;

impl<T: Add<Output = T>> ReduceStrategy<(T, usize), T> for AverageStep {
  fn apply(&mut self, acc: Option<(T, usize)>, value: T) -> Option<(T, usize)> {
    Some(match acc {
      Some((total, samples)) => (total + value, samples + 1),
      None => (value, 1),
    })
  }
}

type Finish<Item> = fn((Item, usize)) -> Item;

/// Arithmetic mean; errors with `SequenceError::Empty` on an empty source.
pub type AverageOp<S, Item> = ThrowIfEmpty<Map<Reduce<S, AverageStep, (Item, usize)>, Finish<Item>>>;

/// Mean with the seed counted as one extra sample: `(seed + Σv) / (n + 1)`.
/// An empty source yields the seed itself.
pub type AverageInitialOp<S, Item> = Map<Reduce<S, AverageStep, (Item, usize)>, Finish<Item>>;

fn finish<Item: Averageable>((total, samples): (Item, usize)) -> Item { total.div_count(samples) }

pub fn average<S, Item: Averageable>(source: S) -> AverageOp<S, Item> {
  let reduce = Reduce { source, strategy: AverageStep, initial: None };
  ThrowIfEmpty::new(Map { source: reduce, func: finish as Finish<Item> })
}

pub fn average_initial<S, Item: Averageable>(source: S, seed: Item) -> AverageInitialOp<S, Item> {
  let reduce = Reduce { source, strategy: AverageStep, initial: Some((seed, 1)) };
  Map { source: reduce, func: finish as Finish<Item> }
}

#[cfg(test)]
mod tests {
  use float_cmp::approx_eq;

  use crate::{observer::Notification, prelude::*, testing::Recorder};

  #[rxext_macro::test]
  fn average_of_floats() {
    let recorder = Recorder::new();
    Local::from_iter(vec![3., 4., 5., 6., 7.])
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(recorder.clone());

    assert!(approx_eq!(f64, recorder.values()[0], 5.));
  }

  #[rxext_macro::test]
  fn average_of_integers_truncates() {
    let recorder = Recorder::new();
    Local::from_iter([1, 2])
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(recorder.clone());

    assert_eq!(recorder.values(), vec![1]);
  }

  #[rxext_macro::test]
  fn narrow_integers_survive_counts_past_their_range() {
    let zeros = Recorder::new();
    Local::from_iter(vec![0u8; 256])
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(zeros.clone());

    let mostly_zeros = Recorder::new();
    Local::from_iter(std::iter::repeat_n(0u8, 250).chain(std::iter::repeat_n(1, 50)))
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(mostly_zeros.clone());

    let signed = Recorder::new();
    Local::from_iter(std::iter::repeat_n(-1i8, 100).chain(std::iter::repeat_n(0, 100)))
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(signed.clone());

    assert_eq!(zeros.values(), vec![0]);
    assert_eq!(mostly_zeros.values(), vec![0]);
    assert_eq!(signed.values(), vec![0]);
  }

  #[rxext_macro::test]
  fn narrow_integers_within_range_divide_exactly() {
    let mut emitted = 0;
    Local::from_iter(vec![1u8; 200])
      .err_into::<SequenceError>()
      .average()
      .on_error(|_| {})
      .subscribe(|v| emitted = v);
    assert_eq!(emitted, 1);
  }

  #[rxext_macro::test]
  fn average_on_single_item() {
    let recorder = Recorder::new();
    Local::of(123.)
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(recorder.clone());

    assert!(approx_eq!(f64, recorder.values()[0], 123.));
  }

  #[rxext_macro::test]
  fn average_on_empty_errors() {
    let recorder = Recorder::<f64, SequenceError>::new();
    Local::empty::<f64>()
      .err_into::<SequenceError>()
      .average()
      .subscribe_with(recorder.clone());

    assert_eq!(recorder.notifications(), vec![Notification::Error(SequenceError::Empty)]);
  }

  #[rxext_macro::test]
  fn seed_counts_as_a_sample() {
    let mut emitted = 0.;
    Local::from_iter([2., 4.]).average_initial(0.).subscribe(|v| emitted = v);
    assert!(approx_eq!(f64, emitted, 2.));
  }

  #[rxext_macro::test]
  fn seeded_average_on_empty_is_the_seed() {
    let mut emitted = 0;
    Local::empty::<i32>().average_initial(8).subscribe(|v| emitted = v);
    assert_eq!(emitted, 8);
  }
}
