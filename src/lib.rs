//! # rxext: derived operators for push-based sequences
//!
//! Aggregates (`count`, `sum`, `average`, `min`, `max`), key extrema
//! (`min_by`, `max_by`), running extrema, quantifiers (`any`, `all`,
//! `contains`) and positional access (`element_at`), each assembled from a
//! small set of primitive combinators.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxext::prelude::*;
//!
//! let mut total = None;
//! Local::from_iter(1..=4)
//!   .err_into::<SequenceError>()
//!   .sum()
//!   .on_error(|_| {})
//!   .subscribe(|v| total = Some(v));
//! assert_eq!(total, Some(10));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Local`] | Factory for source observables |
//! | [`Observable`] | The chainable operator surface |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`SequenceError`] | Failures the operators raise themselves |
//!
//! ## Feature Flags
//!
//! - **`dump`** (default): the `dump` debugging operator, logging through
//!   `tracing`
//!
//! [`Local`]: prelude::Local
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`SequenceError`]: error::SequenceError

pub mod comparer;
pub mod error;
pub mod factory;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod subscription;
pub mod testing;

pub use prelude::*;
