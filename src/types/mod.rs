//! Supporting value types.
//!
//! - [`LazyValue`]: a deferred computation cached after its first read
//! - [`Optional`]: an `Option` with symmetric present/absent callbacks
//!
//! # Examples
//!
//! ```
//! use trial_rail::{LazyValue, Optional};
//!
//! let mut greeting = LazyValue::new(|| "hello".to_string());
//! let shown = Optional::of(greeting.get().len());
//! assert_eq!(shown.or_else(0), 5);
//! ```
pub mod alloc_type;
pub mod lazy_value;
pub mod optional;

pub use lazy_value::*;
pub use optional::*;
