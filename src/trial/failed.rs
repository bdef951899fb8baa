//! The distinguished chain-failure an attempt raises to step aside.
//!
//! Any `Err` returned by an attempt moves the chain on to the next entry, but
//! an ordinary error usually means something went wrong. [`TrialFailed`] says
//! something different: "this strategy does not apply here, try the next one".
//!
//! # Examples
//!
//! ```
//! use trial_rail::trial::{fail_trial, NoArgTrial, TrialFailed};
//!
//! let chain: NoArgTrial<'_, &str, TrialFailed> =
//!     NoArgTrial::first_try(|| fail_trial("not applicable"))
//!         .or_else_try(|| Ok("ok"));
//!
//! assert_eq!(chain.run(), Some("ok"));
//! ```
use core::fmt::{self, Display};

use crate::types::alloc_type::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failure raised deliberately by an attempt to abstain from producing a value.
///
/// From the chain's point of view this is handled exactly like any other
/// error: it is routed to the entry's handler and the next entry is tried.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrialFailed {
    message: Cow<'static, str>,
}

impl TrialFailed {
    /// Creates a chain-failure with the given detail message.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::trial::TrialFailed;
    ///
    /// let failure = TrialFailed::new("cache miss");
    /// assert_eq!(failure.message(), "cache miss");
    /// ```
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into() }
    }

    /// Returns the detail message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for TrialFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trial failed: {}", self.message)
    }
}

impl core::error::Error for TrialFailed {}

/// Fails the current attempt with a [`TrialFailed`] carrying `message`.
///
/// Works for any error type that can be built from a [`TrialFailed`], which
/// includes `TrialFailed` itself and `Box<dyn Error + Send + Sync>`.
///
/// # Examples
///
/// ```
/// use trial_rail::trial::{fail_trial, TrialFailed};
///
/// fn parse_port(raw: &str) -> Result<u16, TrialFailed> {
///     if raw.is_empty() {
///         return fail_trial("no port given");
///     }
///     raw.parse::<u16>().or_else(|_| fail_trial("not a number"))
/// }
///
/// assert_eq!(parse_port("8080"), Ok(8080));
/// assert_eq!(parse_port("").unwrap_err().message(), "no port given");
/// ```
#[inline]
pub fn fail_trial<T, E>(message: impl Into<Cow<'static, str>>) -> Result<T, E>
where
    E: From<TrialFailed>,
{
    Err(TrialFailed::new(message).into())
}
