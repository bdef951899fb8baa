//! Trial-and-error fallback chains.
//!
//! A [`TrialAndError`] holds an ordered list of attempts, each paired with a
//! handler, plus an optional default supplier. Invoking the chain tries each
//! attempt in registration order and returns the first success. Every failure
//! is passed to the handler registered with the attempt that produced it, and
//! then the next attempt runs. If every attempt fails, the default supplier
//! provides the result, or the chain returns `None` when no default was set.
//!
//! The chain is generic over an argument tuple `A`; the three supported
//! shapes are exposed as [`NoArgTrial`], [`UnaryTrial`] and [`BinaryTrial`],
//! each with its own entry point (`run`, `on(value)`, `on(first, second)`).
//!
//! # Examples
//!
//! ```
//! use trial_rail::trial::BinaryTrial;
//!
//! #[derive(Debug)]
//! struct DivideByZero;
//!
//! let divide: BinaryTrial<'_, i32, i32, i32, DivideByZero> =
//!     BinaryTrial::first_try(|a: &i32, b: &i32| a.checked_div(*b).ok_or(DivideByZero));
//!
//! assert_eq!(divide.on(4, 2), Some(2));
//! assert_eq!(divide.on(2, 0), None);
//!
//! let divide = divide.if_all_else_fails(0);
//! assert_eq!(divide.on(2, 0), Some(0));
//! ```
use core::fmt;

use smallvec::SmallVec;

use crate::types::alloc_type::Box;

mod arity;
mod failed;

pub use arity::{BinaryTrial, NoArgTrial, UnaryTrial};
pub use failed::{fail_trial, TrialFailed};

/// Type-erased attempt taking the argument tuple by reference.
pub(crate) type Attempt<'a, A, R, E> = Box<dyn Fn(&A) -> Result<R, E> + 'a>;

/// Type-erased failure observer for an attempt.
pub(crate) type Handler<'a, A, E> = Box<dyn Fn(&E, &A) + 'a>;

/// Type-erased default value supplier.
pub(crate) type Supplier<'a, R> = Box<dyn Fn() -> R + 'a>;

/// One attempt paired with the handler that observes its failures.
pub(crate) struct ChainEntry<'a, A, R, E> {
    attempt: Attempt<'a, A, R, E>,
    handler: Handler<'a, A, E>,
}

/// Inline storage for two entries, enough for the common "try this, else that" chain.
pub(crate) type EntryVec<'a, A, R, E> = SmallVec<[ChainEntry<'a, A, R, E>; 2]>;

/// An ordered fallback chain of fallible attempts.
///
/// Built with `first_try`, extended with `or_else_try` and given a default
/// with [`if_all_else_fails`](Self::if_all_else_fails). Building never runs an
/// attempt. Invocation borrows the chain immutably, so a chain cannot be
/// changed while it runs and can be invoked any number of times.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the borrowed state captured by attempts and handlers
/// * `A` - Argument tuple: `()`, `(T,)` or `(T, U)`
/// * `R` - Result type produced by a successful attempt
/// * `E` - Error type attempts fail with
#[must_use]
pub struct TrialAndError<'a, A, R, E> {
    entries: EntryVec<'a, A, R, E>,
    default: Option<Supplier<'a, R>>,
}

impl<'a, A, R, E> TrialAndError<'a, A, R, E> {
    pub(crate) fn from_entry(attempt: Attempt<'a, A, R, E>, handler: Handler<'a, A, E>) -> Self {
        let mut entries = EntryVec::new();
        entries.push(ChainEntry { attempt, handler });
        Self { entries, default: None }
    }

    pub(crate) fn push_entry(
        mut self,
        attempt: Attempt<'a, A, R, E>,
        handler: Handler<'a, A, E>,
    ) -> Self {
        self.entries.push(ChainEntry { attempt, handler });
        self
    }

    /// Sets a constant value to return when every attempt fails.
    ///
    /// Replaces any previously registered default.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::trial::{fail_trial, NoArgTrial, TrialFailed};
    ///
    /// let chain: NoArgTrial<'_, u8, TrialFailed> =
    ///     NoArgTrial::first_try(|| fail_trial("nope")).if_all_else_fails(7);
    ///
    /// assert_eq!(chain.run(), Some(7));
    /// ```
    #[inline]
    pub fn if_all_else_fails(self, value: R) -> Self
    where
        R: Clone + 'a,
    {
        self.if_all_else_fails_with(move || value.clone())
    }

    /// Sets a supplier to produce the result when every attempt fails.
    ///
    /// The supplier runs each time the chain is exhausted; its value is never
    /// cached. Replaces any previously registered default.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use trial_rail::trial::{fail_trial, NoArgTrial, TrialFailed};
    ///
    /// let calls = Cell::new(0);
    /// let chain: NoArgTrial<'_, i32, TrialFailed> = NoArgTrial::first_try(|| fail_trial("nope"))
    ///     .if_all_else_fails_with(|| {
    ///         calls.set(calls.get() + 1);
    ///         calls.get()
    ///     });
    ///
    /// assert_eq!(chain.run(), Some(1));
    /// assert_eq!(chain.run(), Some(2));
    /// ```
    #[inline]
    pub fn if_all_else_fails_with<S>(mut self, supplier: S) -> Self
    where
        S: Fn() -> R + 'a,
    {
        self.default = Some(Box::new(supplier));
        self
    }

    /// Returns the number of registered attempts. Never zero.
    #[inline]
    pub fn attempts(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if a default supplier is registered.
    #[inline]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Drives the chain for one invocation.
    pub(crate) fn run_trial(&self, args: &A) -> Option<R> {
        let total = self.entries.len();

        for (index, entry) in self.entries.iter().enumerate() {
            match (entry.attempt)(args) {
                Ok(value) => return Some(value),
                Err(error) => {
                    trace_failed_attempt(index, total);
                    (entry.handler)(&error, args);
                },
            }
        }

        trace_exhausted(total, self.default.is_some());
        self.default.as_ref().map(|supply| supply())
    }
}

impl<A, R, E> fmt::Debug for TrialAndError<'_, A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrialAndError")
            .field("attempts", &self.entries.len())
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

#[cfg(feature = "tracing")]
#[inline]
fn trace_failed_attempt(index: usize, total: usize) {
    tracing::debug!(attempt = index + 1, total, "trial attempt failed");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_failed_attempt(_index: usize, _total: usize) {}

#[cfg(feature = "tracing")]
#[inline]
fn trace_exhausted(total: usize, has_default: bool) {
    tracing::debug!(total, has_default, "all trial attempts failed");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_exhausted(_total: usize, _has_default: bool) {}
