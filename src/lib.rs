//! Composable control-flow utilities: trial-and-error fallback chains, lazy
//! values and optional wrappers.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `trial_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Fallback Chain
//!
//! ```
//! use trial_rail::{fail_trial, TrialFailed, UnaryTrial};
//!
//! let port: UnaryTrial<'_, &str, u16, TrialFailed> = UnaryTrial::first_try(|raw: &&str| {
//!     raw.parse::<u16>().or_else(|_| fail_trial("not a number"))
//! })
//! .or_else_try(|raw: &&str| match *raw {
//!     "http" => Ok(80),
//!     "https" => Ok(443),
//!     _ => fail_trial("unknown scheme"),
//! })
//! .if_all_else_fails(8080);
//!
//! assert_eq!(port.on("9000"), Some(9000));
//! assert_eq!(port.on("https"), Some(443));
//! assert_eq!(port.on("gopher"), Some(8080));
//! ```
//!
//! ## Lazy Value
//!
//! ```
//! use trial_rail::LazyValue;
//!
//! let mut value = LazyValue::of(13);
//! assert!(value.is_not_evaluated());
//! assert_eq!(*value.get(), 13);
//! assert!(!value.refresh());
//! ```
//!
//! ## Optional Wrapper
//!
//! ```
//! use trial_rail::Optional;
//!
//! let name = Optional::of("rail").filter(|n| n.len() > 3);
//! assert_eq!(name.iter().count(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for failing trial attempts
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Fallback chains, their arity variants and the chain-failure type
pub mod trial;
/// Lazy values, optional wrappers and allocation shims
pub mod types;

/// Tracing helpers for failure handlers (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use trial::{fail_trial, BinaryTrial, NoArgTrial, TrialAndError, TrialFailed, UnaryTrial};
pub use types::{AbsentValue, LazyValue, Optional};
