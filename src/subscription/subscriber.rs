use super::Subscription;
use crate::observer::SharedObserver;

/// The subscription returned by `Observable::subscribe`.
///
/// Shares the downstream observer slot with the running source. Unsubscribing
/// empties the slot, so nothing reaches the observer afterwards even if the
/// producer keeps pushing, and then releases upstream. Cloning is cheap when
/// the upstream subscription is a clonable handle; every `unsubscribe` after
/// the first is a no-op.
pub struct Subscriber<O, U> {
  observer: SharedObserver<O>,
  upstream: U,
}

impl<O, U> Subscriber<O, U> {
  pub(crate) fn new(observer: SharedObserver<O>, upstream: U) -> Self {
    Self { observer, upstream }
  }
}

impl<O, U: Clone> Clone for Subscriber<O, U> {
  fn clone(&self) -> Self {
    Self { observer: self.observer.clone(), upstream: self.upstream.clone() }
  }
}

impl<O, U> Subscription for Subscriber<O, U>
where
  U: Subscription,
{
  fn unsubscribe(self) {
    self.observer.close();
    self.upstream.unsubscribe();
  }

  /// Closed once the observer received a terminal notification or the
  /// subscription was cancelled.
  fn is_closed(&self) -> bool { self.observer.is_released() }
}
