//! Deferred, cached values.
//!
//! [`LazyValue`] wraps a supplier and runs it only on the first read. The
//! result is cached and returned by every later read until the value is
//! explicitly refreshed or the supplier is replaced.
//!
//! # Examples
//!
//! ```
//! use trial_rail::LazyValue;
//!
//! let mut calls = 0;
//! let mut config = LazyValue::new(|| {
//!     calls += 1;
//!     String::from("loaded")
//! });
//!
//! assert!(config.is_not_evaluated());
//! assert_eq!(config.get(), "loaded");
//! assert_eq!(config.get(), "loaded");
//! drop(config);
//! assert_eq!(calls, 1);
//! ```
use core::fmt;

use crate::types::alloc_type::Box;

/// A value computed on first access and cached afterwards.
///
/// Reads take `&mut self`; sharing a `LazyValue` across threads requires
/// external synchronization.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the state borrowed by the supplier
/// * `T` - The value type
pub struct LazyValue<'a, T> {
    supplier: Box<dyn FnMut() -> T + 'a>,
    cached: Option<T>,
}

impl<'a, T> LazyValue<'a, T> {
    /// Creates a lazy value from a supplier. The supplier is not called yet.
    #[inline]
    pub fn new<S>(supplier: S) -> Self
    where
        S: FnMut() -> T + 'a,
    {
        Self { supplier: Box::new(supplier), cached: None }
    }

    /// Creates a lazy value that yields a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::LazyValue;
    ///
    /// let mut answer = LazyValue::of(42);
    /// assert!(!answer.is_evaluated());
    /// assert_eq!(*answer.get(), 42);
    /// assert!(answer.is_evaluated());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Clone + 'a,
    {
        Self::new(move || value.clone())
    }

    /// Returns the value, running the supplier if it has not run yet.
    #[inline]
    pub fn get(&mut self) -> &T {
        let supplier = &mut self.supplier;
        self.cached.get_or_insert_with(|| supplier())
    }

    /// Returns the cached value without evaluating.
    #[inline]
    pub fn cached(&self) -> Option<&T> {
        self.cached.as_ref()
    }

    /// Returns `true` once the supplier has produced the cached value.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.cached.is_some()
    }

    /// Returns `true` while no value is cached.
    #[inline]
    pub fn is_not_evaluated(&self) -> bool {
        !self.is_evaluated()
    }

    /// Re-runs the supplier and overwrites the cache.
    ///
    /// Returns `true` if the new value differs from the previously cached one.
    /// A value that was never evaluated counts as changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::LazyValue;
    ///
    /// let mut count = 0;
    /// let mut counter = LazyValue::new(|| {
    ///     count += 1;
    ///     count
    /// });
    ///
    /// assert_eq!(*counter.get(), 1);
    /// assert!(counter.refresh());
    /// assert_eq!(*counter.get(), 2);
    /// ```
    pub fn refresh(&mut self) -> bool
    where
        T: PartialEq,
    {
        let fresh = (self.supplier)();
        let changed = self.cached.as_ref() != Some(&fresh);
        self.cached = Some(fresh);
        changed
    }

    /// Replaces the supplier and drops the cached value.
    ///
    /// The next [`get`](Self::get) runs the new supplier.
    #[inline]
    pub fn update<S>(&mut self, supplier: S) -> &mut Self
    where
        S: FnMut() -> T + 'a,
    {
        self.supplier = Box::new(supplier);
        self.cached = None;
        self
    }

    /// Consumes the lazy value, evaluating it if needed.
    #[inline]
    pub fn into_value(mut self) -> T {
        match self.cached.take() {
            Some(value) => value,
            None => (self.supplier)(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cached {
            Some(value) => f.debug_tuple("LazyValue").field(value).finish(),
            None => f.write_str("LazyValue(<not evaluated>)"),
        }
    }
}
