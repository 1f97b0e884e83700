use crate::ops::{
  distinct_until_changed::DistinctUntilChanged,
  minmax::{Extremum, Pick},
  scan::Scan,
};

/// `running_min`/`running_max`: an unseeded scan keeping the extremum so far,
/// with consecutive repeats of it suppressed.
///
/// The first value is always emitted; after that a value is emitted only when
/// it strictly improves on the extremum. An empty source just completes.
pub type RunningOp<S, Item, C> = DistinctUntilChanged<Scan<S, Extremum<C>, Item>>;

pub fn running<S, Item, C>(source: S, order: C, pick: Pick) -> RunningOp<S, Item, C> {
  DistinctUntilChanged(Scan { source, strategy: Extremum::new(order, pick), initial: None })
}
