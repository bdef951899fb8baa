//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use trial_rail::prelude::*;
//!
//! let chain: NoArgTrial<'_, i32, TrialFailed> = NoArgTrial::first_try(|| fail_trial("skip"))
//!     .or_else_try(|| Ok(1));
//! assert_eq!(chain.run(), Some(1));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail_trial!`](crate::fail_trial!)
//! - **Chains**: [`TrialAndError`], [`NoArgTrial`], [`UnaryTrial`], [`BinaryTrial`]
//! - **Failures**: [`TrialFailed`], [`fail_trial`]
//! - **Values**: [`LazyValue`], [`Optional`]

// Chains, plus the `fail_trial` function and macro
pub use crate::fail_trial;
pub use crate::trial::{BinaryTrial, NoArgTrial, TrialAndError, TrialFailed, UnaryTrial};

// Values
pub use crate::types::{AbsentValue, LazyValue, Optional};
