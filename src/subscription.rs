//! Subscription handles
//!
//! A subscription is the disposal side of the push protocol: whoever holds it
//! can tell the producer to stop and release whatever it allocated for this
//! one observer.

mod handle;
mod subscriber;

pub use handle::*;
pub use subscriber::*;

/// The disposal capability returned by `subscribe`.
pub trait Subscription {
  /// Stop the stream and release its resources.
  ///
  /// Consumes the subscription. Handles that can be cloned
  /// ([`SubscriptionHandle`], [`Subscriber`]) make every call after the first
  /// a no-op.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;
}

/// Synchronous sources have nothing left to release once `subscribe`
/// returns, so they report themselves as already closed.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

/// Runs a closure as the teardown logic.
pub struct ClosureSubscription<F>(pub F);

impl<F> Subscription for ClosureSubscription<F>
where
  F: FnOnce(),
{
  #[inline]
  fn unsubscribe(self) { (self.0)() }

  #[inline]
  fn is_closed(&self) -> bool { false }
}
