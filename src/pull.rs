/// The result of pulling once on a [`Generator`](crate::Generator).
///
/// A pull either produces the next value of the sequence or the shared
/// "no value here" marker:
///
///   * `Value(v)`: the generator produced `v` and may produce more values on
///     later pulls.
///   * `Sentinel`: the generator has nothing to produce. For every generator
///     in this crate, exhaustion is a steady state: once a pull comes back
///     `Sentinel`, every later pull does too.
///
/// `Sentinel` is a marker kind, not a payload. Callers check it by pattern
/// match, never by comparing some reserved domain value, which is what lets a
/// generator produce any `T` at all, including `Option<T>` values, without
/// ambiguity.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Pull<T> {
    Value(T),
    Sentinel,
}

use Pull::*;

impl<T> Pull<T> {
    /// Returns the produced value, or `None` if this pull hit the sentinel.
    ///
    /// Compare to `Result::ok()` or `ControlFlow::continue_value()`.
    ///
    /// ```rust
    /// use pullchain::{Pull, Sentinel, Value};
    ///
    /// assert_eq!(Value(7).into_value(), Some(7));
    /// assert_eq!(Pull::<i32>::Sentinel.into_value(), None);
    /// ```
    pub fn into_value(self) -> Option<T> {
        match self {
            Value(v) => Some(v),
            Sentinel => None,
        }
    }

    /// Whether this pull produced a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Value(_))
    }

    /// Whether this pull hit the sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Sentinel)
    }

    /// Transforms the produced value, forwarding the sentinel unchanged.
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Value(v) => Value(f(v)),
            Sentinel => Sentinel,
        }
    }

    /// Returns the produced value, or `default` on the sentinel.
    pub fn value_or(self, default: T) -> T {
        match self {
            Value(v) => v,
            Sentinel => default,
        }
    }
}

/// `None` is the sentinel of `Option`-shaped APIs (`slice::get`,
/// `Iterator::next`); the conversions keep the two worlds aligned.
impl<T> From<Option<T>> for Pull<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Value(v),
            None => Sentinel,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(pull: Pull<T>) -> Self {
        pull.into_value()
    }
}
