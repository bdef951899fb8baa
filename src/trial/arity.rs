//! Arity-specific constructors and entry points.
//!
//! Each shape adapts its closures to the shared tuple form stored by
//! [`TrialAndError`] and exposes its own invocation method. Arguments reach
//! attempts and handlers by reference, so every entry sees the same inputs.
use crate::trial::TrialAndError;
use crate::types::alloc_type::Box;

/// A chain whose attempts take no arguments. Invoked with [`run`](TrialAndError::run).
pub type NoArgTrial<'a, R, E> = TrialAndError<'a, (), R, E>;

/// A chain whose attempts take one argument. Invoked with `on(value)`.
pub type UnaryTrial<'a, T, R, E> = TrialAndError<'a, (T,), R, E>;

/// A chain whose attempts take two arguments. Invoked with `on(first, second)`.
pub type BinaryTrial<'a, T, U, R, E> = TrialAndError<'a, (T, U), R, E>;

impl<'a, R, E> TrialAndError<'a, (), R, E> {
    /// Starts a chain with its first attempt and no failure handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::trial::NoArgTrial;
    ///
    /// let chain: NoArgTrial<'_, u16, std::num::ParseIntError> =
    ///     NoArgTrial::first_try(|| "8080".parse());
    /// assert_eq!(chain.run(), Some(8080));
    /// ```
    #[inline]
    pub fn first_try<F>(attempt: F) -> Self
    where
        F: Fn() -> Result<R, E> + 'a,
    {
        Self::first_try_with(attempt, |_: &E| {})
    }

    /// Starts a chain with its first attempt and the handler for its failures.
    #[inline]
    pub fn first_try_with<F, H>(attempt: F, handler: H) -> Self
    where
        F: Fn() -> Result<R, E> + 'a,
        H: Fn(&E) + 'a,
    {
        Self::from_entry(
            Box::new(move |_: &()| attempt()),
            Box::new(move |e: &E, _: &()| handler(e)),
        )
    }

    /// Appends an attempt with no failure handler.
    #[inline]
    pub fn or_else_try<F>(self, attempt: F) -> Self
    where
        F: Fn() -> Result<R, E> + 'a,
    {
        self.or_else_try_with(attempt, |_: &E| {})
    }

    /// Appends an attempt and the handler for its failures.
    #[inline]
    pub fn or_else_try_with<F, H>(self, attempt: F, handler: H) -> Self
    where
        F: Fn() -> Result<R, E> + 'a,
        H: Fn(&E) + 'a,
    {
        self.push_entry(
            Box::new(move |_: &()| attempt()),
            Box::new(move |e: &E, _: &()| handler(e)),
        )
    }

    /// Runs the chain.
    ///
    /// Returns the first successful result, else the default, else `None`.
    #[inline]
    pub fn run(&self) -> Option<R> {
        self.run_trial(&())
    }
}

impl<'a, T, R, E> TrialAndError<'a, (T,), R, E> {
    /// Starts a chain with its first attempt and no failure handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use trial_rail::trial::UnaryTrial;
    ///
    /// let parse: UnaryTrial<'_, &str, i64, std::num::ParseIntError> =
    ///     UnaryTrial::first_try(|raw: &&str| raw.parse())
    ///         .or_else_try(|raw: &&str| i64::from_str_radix(raw.trim_start_matches("0x"), 16));
    ///
    /// assert_eq!(parse.on("42"), Some(42));
    /// assert_eq!(parse.on("0xff"), Some(255));
    /// assert_eq!(parse.on("zz"), None);
    /// ```
    #[inline]
    pub fn first_try<F>(attempt: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'a,
    {
        Self::first_try_with(attempt, |_: &E, _: &T| {})
    }

    /// Starts a chain with its first attempt and the handler for its failures.
    #[inline]
    pub fn first_try_with<F, H>(attempt: F, handler: H) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'a,
        H: Fn(&E, &T) + 'a,
    {
        Self::from_entry(
            Box::new(move |(t,): &(T,)| attempt(t)),
            Box::new(move |e: &E, (t,): &(T,)| handler(e, t)),
        )
    }

    /// Appends an attempt with no failure handler.
    #[inline]
    pub fn or_else_try<F>(self, attempt: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'a,
    {
        self.or_else_try_with(attempt, |_: &E, _: &T| {})
    }

    /// Appends an attempt and the handler for its failures.
    #[inline]
    pub fn or_else_try_with<F, H>(self, attempt: F, handler: H) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'a,
        H: Fn(&E, &T) + 'a,
    {
        self.push_entry(
            Box::new(move |(t,): &(T,)| attempt(t)),
            Box::new(move |e: &E, (t,): &(T,)| handler(e, t)),
        )
    }

    /// Runs the chain on `value`.
    ///
    /// Returns the first successful result, else the default, else `None`.
    #[inline]
    pub fn on(&self, value: T) -> Option<R> {
        self.run_trial(&(value,))
    }
}

impl<'a, T, U, R, E> TrialAndError<'a, (T, U), R, E> {
    /// Starts a chain with its first attempt and no failure handler.
    #[inline]
    pub fn first_try<F>(attempt: F) -> Self
    where
        F: Fn(&T, &U) -> Result<R, E> + 'a,
    {
        Self::first_try_with(attempt, |_: &E, _: &T, _: &U| {})
    }

    /// Starts a chain with its first attempt and the handler for its failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use trial_rail::trial::BinaryTrial;
    ///
    /// let failures = RefCell::new(Vec::new());
    /// let divide: BinaryTrial<'_, i32, i32, i32, &str> = BinaryTrial::first_try_with(
    ///     |a: &i32, b: &i32| a.checked_div(*b).ok_or("division by zero"),
    ///     |e: &&str, a: &i32, b: &i32| failures.borrow_mut().push(format!("{a}/{b}: {e}")),
    /// );
    ///
    /// assert_eq!(divide.on(2, 0), None);
    /// assert_eq!(failures.borrow().as_slice(), ["2/0: division by zero"]);
    /// ```
    #[inline]
    pub fn first_try_with<F, H>(attempt: F, handler: H) -> Self
    where
        F: Fn(&T, &U) -> Result<R, E> + 'a,
        H: Fn(&E, &T, &U) + 'a,
    {
        Self::from_entry(
            Box::new(move |(t, u): &(T, U)| attempt(t, u)),
            Box::new(move |e: &E, (t, u): &(T, U)| handler(e, t, u)),
        )
    }

    /// Appends an attempt with no failure handler.
    #[inline]
    pub fn or_else_try<F>(self, attempt: F) -> Self
    where
        F: Fn(&T, &U) -> Result<R, E> + 'a,
    {
        self.or_else_try_with(attempt, |_: &E, _: &T, _: &U| {})
    }

    /// Appends an attempt and the handler for its failures.
    #[inline]
    pub fn or_else_try_with<F, H>(self, attempt: F, handler: H) -> Self
    where
        F: Fn(&T, &U) -> Result<R, E> + 'a,
        H: Fn(&E, &T, &U) + 'a,
    {
        self.push_entry(
            Box::new(move |(t, u): &(T, U)| attempt(t, u)),
            Box::new(move |e: &E, (t, u): &(T, U)| handler(e, t, u)),
        )
    }

    /// Runs the chain on `first` and `second`.
    ///
    /// Returns the first successful result, else the default, else `None`.
    #[inline]
    pub fn on(&self, first: T, second: U) -> Option<R> {
        self.run_trial(&(first, second))
    }
}
