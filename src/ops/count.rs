use crate::ops::reduce::{Reduce, ReduceInitialFn};

/// Emits the number of values once the source completes; `0` for an empty
/// source. Counting wraps on overflow.
pub type CountOp<S, Item> = Reduce<S, ReduceInitialFn<fn(usize, Item) -> usize>, usize>;

/// `count` with a 64-bit counter regardless of the platform's pointer width.
pub type LongCountOp<S, Item> = Reduce<S, ReduceInitialFn<fn(u64, Item) -> u64>, u64>;

pub fn count<S, Item>(source: S) -> CountOp<S, Item> {
  let step: fn(usize, Item) -> usize = |acc, _| acc.wrapping_add(1);
  Reduce { source, strategy: ReduceInitialFn(step), initial: Some(0) }
}

pub fn long_count<S, Item>(source: S) -> LongCountOp<S, Item> {
  let step: fn(u64, Item) -> u64 = |acc, _| acc.wrapping_add(1);
  Reduce { source, strategy: ReduceInitialFn(step), initial: Some(0) }
}
