//! Tracing integration for trial-rail.
//!
//! Handlers exist to observe failures, and logging is the most common thing
//! they do. This module provides ready-made logging for them.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! trial-rail = { version = "0.1", features = ["tracing"] }
//! ```
use core::fmt::Display;

/// Logs a failed attempt at `WARN` level.
///
/// Usable inside a handler of any arity.
///
/// # Example
///
/// ```rust,ignore
/// use trial_rail::{trial::UnaryTrial, tracing_ext::log_failure};
///
/// let chain: UnaryTrial<'_, &str, u8, std::num::ParseIntError> =
///     UnaryTrial::first_try_with(|raw: &&str| raw.parse(), |e, _| log_failure(e));
/// ```
pub fn log_failure<E>(error: &E)
where
    E: Display + ?Sized,
{
    tracing::warn!(error = %error, "trial attempt failed");
}

/// Builds a no-argument handler that logs failures under `label`.
///
/// # Example
///
/// ```rust,ignore
/// use trial_rail::{trial::NoArgTrial, tracing_ext::traced_handler};
///
/// let chain: NoArgTrial<'_, String, std::io::Error> =
///     NoArgTrial::first_try_with(|| std::fs::read_to_string("a.toml"), traced_handler("a.toml"))
///         .or_else_try_with(|| std::fs::read_to_string("b.toml"), traced_handler("b.toml"));
/// ```
pub fn traced_handler<E>(label: &'static str) -> impl Fn(&E)
where
    E: Display + ?Sized,
{
    move |error: &E| {
        tracing::warn!(attempt = label, error = %error, "trial attempt failed");
    }
}
