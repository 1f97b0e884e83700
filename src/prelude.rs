//! Everything needed to build and subscribe pipelines.

pub use crate::{
  comparer::{Compare, Comparer, NaturalOrder},
  error::SequenceError,
  factory::{Local, ObservableFactory},
  observable::*,
  observer::{Emitter, Observer},
  subscription::*,
};
