use std::ops::Add;

use crate::ops::{
  reduce::{Reduce, ReduceFn, ReduceInitialFn},
  throw_if_empty::ThrowIfEmpty,
};

/// Sum of all values; an empty source errors with `SequenceError::Empty`.
pub type SumOp<S, Item> = ThrowIfEmpty<Reduce<S, ReduceFn<fn(Item, Item) -> Item>, Item>>;

/// Sum starting from a seed, which is also the result for an empty source.
pub type SumInitialOp<S, Item> = Reduce<S, ReduceInitialFn<fn(Item, Item) -> Item>, Item>;

fn add<Item: Add<Output = Item>>(acc: Item, v: Item) -> Item { acc + v }

pub fn sum<S, Item>(source: S) -> SumOp<S, Item>
where
  Item: Add<Output = Item>,
{
  ThrowIfEmpty::new(Reduce { source, strategy: ReduceFn(add as fn(Item, Item) -> Item), initial: None })
}

pub fn sum_initial<S, Item>(source: S, seed: Item) -> SumInitialOp<S, Item>
where
  Item: Add<Output = Item>,
{
  Reduce { source, strategy: ReduceInitialFn(add as fn(Item, Item) -> Item), initial: Some(seed) }
}
