use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Applies `func` to every value.
#[derive(Clone)]
pub struct Map<S, F> {
  pub source: S,
  pub func: F,
}

pub struct MapObserver<O, F> {
  observer: O,
  func: F,
}

impl<S, F, B> ObservableType for Map<S, F>
where
  S: ObservableType,
  F: FnMut(S::Item) -> B,
{
  type Item = B;
  type Err = S::Err;
}

impl<S, F, B, O> CoreObservable<O> for Map<S, F>
where
  S: CoreObservable<MapObserver<O, F>>,
  F: FnMut(S::Item) -> B,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Map { source, func } = self;
    source.actual_subscribe(MapObserver { observer, func })
  }
}

impl<O, F, Item, B, Err> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> B,
{
  fn next(&mut self, value: Item) { self.observer.next((self.func)(value)) }

  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[rxext_macro::test]
  fn primitive_type() {
    let mut i = 0;
    Local::from_iter(100..101).map(|v| v * 2).subscribe(|v| i += v);
    assert_eq!(i, 200);
  }

  #[rxext_macro::test]
  fn reference_lifetime_should_work() {
    let mut i = 0;
    Local::of(100).map(|v| v).subscribe(|v| i += v);
    assert_eq!(i, 100);
  }

  #[rxext_macro::test]
  fn changes_item_type() {
    let mut seen = vec![];
    Local::from_iter(['a', 'b']).map(|c| c.to_string()).subscribe(|s| seen.push(s));
    assert_eq!(seen, vec!["a".to_string(), "b".to_string()]);
  }
}
