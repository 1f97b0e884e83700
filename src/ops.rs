//! Operators
//!
//! Primitive combinators each wrap the downstream observer in their own
//! observer type. The derived operators (`count`, `min`, `average`,
//! `running_max`, `any`, ...) are assembled from those primitives, either as
//! type aliases over a pipeline or as a thin struct that builds one when it is
//! subscribed.

// primitive combinators
pub mod distinct_until_changed;
#[cfg(feature = "dump")]
pub mod dump;
pub mod filter;
pub mod flat_map;
pub mod lifecycle;
pub mod map;
pub mod map_err;
pub mod reduce;
pub mod scan;
pub mod skip;
pub mod skip_while;
pub mod take;
pub mod tap;
pub mod throw_if_empty;

// derived operators
pub mod all;
pub mod any;
pub mod average;
pub mod compose;
pub mod contains;
pub mod count;
pub mod element_at;
pub mod extremum_by;
pub mod minmax;
pub mod running;
pub mod sum;
