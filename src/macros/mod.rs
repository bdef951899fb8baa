//! Ergonomic macros for failing a trial attempt.
//!
//! - [`macro@crate::fail_trial`] - Builds a formatted [`TrialFailed`](crate::trial::TrialFailed)
//!   and returns it as `Err`, converted into the attempt's error type.
//!
//! # Examples
//!
//! ```
//! use trial_rail::{fail_trial, trial::{UnaryTrial, TrialFailed}};
//!
//! let lookup: UnaryTrial<'_, u32, &str, TrialFailed> = UnaryTrial::first_try(|id: &u32| {
//!     if *id == 1 {
//!         Ok("admin")
//!     } else {
//!         fail_trial!("unknown user {}", id)
//!     }
//! })
//! .if_all_else_fails("guest");
//!
//! assert_eq!(lookup.on(1), Some("admin"));
//! assert_eq!(lookup.on(7), Some("guest"));
//! ```

/// Produces `Err` holding a [`TrialFailed`](crate::trial::TrialFailed) with a formatted message.
///
/// Accepts the same arguments as the standard `format!` macro. The error is
/// converted with `From`, so it works for any error type that accepts a
/// `TrialFailed`.
///
/// # Examples
///
/// ```
/// use trial_rail::{fail_trial, trial::TrialFailed};
///
/// fn pick(index: usize) -> Result<char, TrialFailed> {
///     match "abc".chars().nth(index) {
///         Some(c) => Ok(c),
///         None => fail_trial!("index {} out of range", index),
///     }
/// }
///
/// assert_eq!(pick(1), Ok('b'));
/// assert_eq!(pick(5).unwrap_err().message(), "index 5 out of range");
/// ```
#[macro_export]
macro_rules! fail_trial {
    ($($arg:tt)*) => {
        $crate::trial::fail_trial(format!($($arg)*))
    };
}
