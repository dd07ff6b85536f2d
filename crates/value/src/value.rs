use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::NoElement;
use crate::iter::Iter;
use crate::sentinel::Sentinel;

/// A value that may or may not be present.
///
/// Every operation either borrows or consumes the container and produces a
/// new one; a `Present` never turns into an `Absent` in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value<T> {
    Present(T),
    Absent,
}

impl<T> Value<T> {
    /// Wraps a value as `Present`.
    pub const fn present(value: T) -> Self {
        Value::Present(value)
    }

    /// The canonical absent container.
    pub const fn absent() -> Self {
        Value::Absent
    }

    /// Adapts an `Option`, mapping `None` to `Absent`.
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Value::Present(value),
            None => Value::Absent,
        }
    }

    /// `Absent` iff `value` is the nil sentinel of `T`.
    pub fn of_nullable(value: T) -> Self
    where
        T: Sentinel,
    {
        if value.is_nil() { Value::Absent } else { Value::Present(value) }
    }

    /// Returns true if the container holds a value.
    pub const fn is_present(&self) -> bool {
        matches!(self, Value::Present(_))
    }

    /// Returns true if the container is empty.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Converts from `&Value<T>` to `Value<&T>`.
    pub const fn as_ref(&self) -> Value<&T> {
        match self {
            Value::Present(value) => Value::Present(value),
            Value::Absent => Value::Absent,
        }
    }

    /// Converts from `&mut Value<T>` to `Value<&mut T>`.
    pub fn as_mut(&mut self) -> Value<&mut T> {
        match self {
            Value::Present(value) => Value::Present(value),
            Value::Absent => Value::Absent,
        }
    }

    /// Extracts the value, or reports that none was there.
    ///
    /// The only partial operation on the container. The error is always
    /// [`NoElement`]; nothing else can surface here.
    pub fn get(self) -> Result<T, NoElement> {
        match self {
            Value::Present(value) => Ok(value),
            Value::Absent => Err(NoElement),
        }
    }

    /// Extracts the value, or returns `fallback`.
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Value::Present(value) => value,
            Value::Absent => fallback,
        }
    }

    /// Extracts the value, or computes a fallback.
    ///
    /// `fallback` is never invoked when the value is present.
    pub fn get_or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self {
            Value::Present(value) => value,
            Value::Absent => fallback(),
        }
    }

    /// Extracts the value, or fails with the caller-supplied error.
    ///
    /// `err` is never invoked when the value is present, and its result is
    /// returned untouched.
    pub fn get_or_fail<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            Value::Present(value) => Ok(value),
            Value::Absent => Err(err()),
        }
    }

    /// Converts to an `Option`, preserving presence exactly.
    pub fn into_option(self) -> Option<T> {
        match self {
            Value::Present(value) => Some(value),
            Value::Absent => None,
        }
    }

    /// Writes presence back into `T`'s own nil convention.
    pub fn into_nullable(self) -> T
    where
        T: Sentinel,
    {
        match self {
            Value::Present(value) => value,
            Value::Absent => T::NIL,
        }
    }

    /// Returns this container if present, else `other` unchanged.
    pub fn or(self, other: Value<T>) -> Value<T> {
        match self {
            Value::Absent => other,
            present => present,
        }
    }

    /// Returns this container if present, else the supplied one.
    ///
    /// `other` is invoked only when this container is absent.
    pub fn or_else<F: FnOnce() -> Value<T>>(self, other: F) -> Value<T> {
        match self {
            Value::Absent => other(),
            present => present,
        }
    }

    /// Keeps a present value only if `pred` accepts it.
    ///
    /// Absent stays absent and `pred` is not evaluated.
    pub fn filter<P: FnOnce(&T) -> bool>(self, pred: P) -> Value<T> {
        match self {
            Value::Present(value) if pred(&value) => Value::Present(value),
            _ => Value::Absent,
        }
    }

    /// Maps the contained value, wrapping the result as `Present`.
    ///
    /// `f` is never invoked on an absent container, and its result is never
    /// flattened; use [`Value::and_then`] for functions that themselves
    /// return a container.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Value<U> {
        match self {
            Value::Present(value) => Value::Present(f(value)),
            Value::Absent => Value::Absent,
        }
    }

    /// Monadic bind: chains a function that itself returns a container.
    ///
    /// The container produced by `f` is returned directly, never
    /// double-wrapped. Equivalent to `map(f)` followed by flattening one
    /// level of nesting.
    pub fn and_then<U, F: FnOnce(T) -> Value<U>>(self, f: F) -> Value<U> {
        match self {
            Value::Present(value) => f(value),
            Value::Absent => Value::Absent,
        }
    }

    /// Applies `f` to the whole container, exactly once.
    pub fn transform<U, F: FnOnce(Value<T>) -> U>(self, f: F) -> U {
        f(self)
    }

    /// Runs `action` iff the container is absent.
    pub fn if_absent<F: FnOnce()>(&self, action: F) {
        if self.is_absent() {
            action();
        }
    }

    /// Feeds the value to `action` iff present.
    pub fn if_present<F: FnOnce(T)>(self, action: F) {
        if let Value::Present(value) = self {
            action(value);
        }
    }

    /// Feeds the value to `consume` if present, else runs `otherwise`.
    ///
    /// Exactly one of the two is invoked.
    pub fn if_present_or_else<F: FnOnce(T), G: FnOnce()>(self, consume: F, otherwise: G) {
        match self {
            Value::Present(value) => consume(value),
            Value::Absent => otherwise(),
        }
    }

    /// Feeds the value to `consume` if present, else fails with the
    /// caller-supplied error.
    pub fn if_present_or_fail<E, F, G>(self, consume: F, err: G) -> Result<(), E>
    where
        F: FnOnce(T),
        G: FnOnce() -> E,
    {
        match self {
            Value::Present(value) => {
                consume(value);
                Ok(())
            }
            Value::Absent => Err(err()),
        }
    }

    /// Guard: fails with the caller-supplied error iff a value is present.
    pub fn fail_if_present<E, F: FnOnce() -> E>(&self, err: F) -> Result<(), E> {
        match self {
            Value::Present(_) => Err(err()),
            Value::Absent => Ok(()),
        }
    }

    /// Guard: fails with the caller-supplied error iff the container is empty.
    pub fn fail_if_absent<E, F: FnOnce() -> E>(&self, err: F) -> Result<(), E> {
        match self {
            Value::Present(_) => Ok(()),
            Value::Absent => Err(err()),
        }
    }

    /// A freshly constructed view of zero or one borrowed elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_option())
    }
}

impl Value<()> {
    /// Present with no payload; signals "succeeded, no data".
    pub const fn unit() -> Self {
        Value::Present(())
    }
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Absent
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Present(value)
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(option: Option<T>) -> Self {
        Value::from_option(option)
    }
}

impl<T> From<Value<T>> for Option<T> {
    fn from(value: Value<T>) -> Self {
        value.into_option()
    }
}

// Absent hashes to a fixed constant; Present hashes exactly as its payload
// does, so hash(Present(v)) == hash(v) under the same hasher.
impl<T: Hash> Hash for Value<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Present(value) => value.hash(state),
            Value::Absent => state.write_u8(1),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Present(value) => write!(f, "Present({value})"),
            Value::Absent => f.write_str("Absent"),
        }
    }
}
