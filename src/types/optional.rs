//! An `Option` with symmetric callbacks.
//!
//! [`Optional`] is a thin wrapper around [`Option`] that adds chaining
//! callbacks for both the present and the absent case, a fallible
//! [`get`](Optional::get) and a `Display` form. Converting to and from
//! `Option` is free.
//!
//! # Examples
//!
//! ```
//! use trial_rail::Optional;
//!
//! let mut seen = Vec::new();
//! Optional::of(3)
//!     .if_present(|v| seen.push(*v))
//!     .if_absent(|| seen.push(0));
//!
//! assert_eq!(seen, [3]);
//! assert_eq!(Optional::of(3).map(|v| v * 2).to_string(), "Optional[6]");
//! assert_eq!(Optional::<i32>::empty().to_string(), "Optional.empty");
//! ```
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error returned by [`Optional::get`] when no value is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbsentValue;

impl Display for AbsentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no value present")
    }
}

impl core::error::Error for AbsentValue {}

/// A present-or-absent value.
///
/// # Serde Support
///
/// Serializes transparently as the wrapped `Option`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Optional<T>(Option<T>);

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Optional<T> {
    /// Wraps a present value.
    #[must_use]
    #[inline]
    pub fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates an absent value.
    #[must_use]
    #[inline]
    pub fn empty() -> Self {
        Self(None)
    }

    /// Returns the value, or [`AbsentValue`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::{AbsentValue, Optional};
    ///
    /// assert_eq!(Optional::of("x").get(), Ok(&"x"));
    /// assert_eq!(Optional::<&str>::empty().get(), Err(AbsentValue));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T, AbsentValue> {
        self.0.as_ref().ok_or(AbsentValue)
    }

    /// Borrows the wrapped `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unwraps into the underlying `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Calls `consumer` with the value if present. Returns `self` for chaining.
    #[inline]
    pub fn if_present<F>(&self, consumer: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            consumer(value);
        }
        self
    }

    /// Calls `action` if no value is present. Returns `self` for chaining.
    #[inline]
    pub fn if_absent<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.0.is_none() {
            action();
        }
        self
    }

    /// Calls `consumer` with the value if present, otherwise `action`.
    #[inline]
    pub fn if_present_or_else<F, G>(&self, consumer: F, action: G) -> &Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.0 {
            Some(value) => consumer(value),
            None => action(),
        }
        self
    }

    /// Keeps the value only if it matches `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    /// Applies `mapper` to a present value.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(mapper))
    }

    /// Applies an `Optional`-returning `mapper` to a present value.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::Optional;
    ///
    /// let half = |v: i32| if v % 2 == 0 { Optional::of(v / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::of(8).flat_map(half), Optional::of(4));
    /// assert!(Optional::of(7).flat_map(half).is_absent());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Returns the value if present, otherwise `other`.
    #[inline]
    pub fn or_else(self, other: T) -> T {
        self.0.unwrap_or(other)
    }

    /// Returns the value if present, otherwise the result of `supplier`.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(supplier)
    }

    /// Returns the value if present, otherwise the error built by `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::Optional;
    ///
    /// let port: Result<u16, &str> = Optional::empty().or_else_err(|| "port not configured");
    /// assert_eq!(port, Err("port not configured"));
    /// ```
    #[inline]
    pub fn or_else_err<X, F>(self, error: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        self.0.ok_or_else(error)
    }

    /// Returns `self` if a value is present, otherwise the `Optional` from `supplier`.
    #[inline]
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.0 {
            Some(_) => self,
            None => supplier(),
        }
    }

    /// Iterates over the value: one item if present, none otherwise.
    #[inline]
    pub fn iter(&self) -> core::option::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = core::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Optional[{}]", value),
            None => f.write_str("Optional.empty"),
        }
    }
}
