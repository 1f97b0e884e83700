use smallvec::SmallVec;

use super::Subscription;
use crate::rc::{MutRc, RcDeref, RcDerefMut};

/// Object-safe view of a [`Subscription`], whose `unsubscribe` takes `self`
/// by value.
trait Teardown {
  fn release(self: Box<Self>);
  fn is_released(&self) -> bool;
}

impl<S: Subscription> Teardown for S {
  fn release(self: Box<Self>) { (*self).unsubscribe() }

  fn is_released(&self) -> bool { self.is_closed() }
}

/// A shared, idempotent disposal handle.
///
/// Collects the teardown of one or more upstream subscriptions. Clones share
/// state: the first `unsubscribe` on any clone releases everything, later
/// calls are no-ops. A subscription added after the handle closed is released
/// on the spot, which is how an operator that finishes *during* a synchronous
/// `subscribe` call (before upstream has returned its subscription) still
/// releases upstream.
#[derive(Clone, Default)]
pub struct SubscriptionHandle(MutRc<HandleState>);

#[derive(Default)]
struct HandleState {
  closed: bool,
  teardown: SmallVec<[Box<dyn Teardown>; 1]>,
}

impl SubscriptionHandle {
  pub fn new() -> Self { Self::default() }

  /// Attaches `subscription` to this handle, or releases it immediately if
  /// the handle is already closed.
  pub fn add<S: Subscription + 'static>(&self, subscription: S) {
    let mut state = self.0.rc_deref_mut();
    if state.closed {
      drop(state);
      subscription.unsubscribe();
    } else {
      state.teardown.retain(|t| !t.is_released());
      state.teardown.push(Box::new(subscription));
    }
  }

  /// Number of live teardowns held.
  pub fn teardown_size(&self) -> usize { self.0.rc_deref().teardown.len() }
}

impl Subscription for SubscriptionHandle {
  fn unsubscribe(self) {
    let teardown = {
      let mut state = self.0.rc_deref_mut();
      if state.closed {
        return;
      }
      state.closed = true;
      std::mem::take(&mut state.teardown)
    };
    for t in teardown {
      t.release();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.rc_deref().closed }
}
