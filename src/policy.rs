//! Default policies for consume-side resolution
//!
//! When a consume call finds no published value, the effective
//! [`DefaultPolicy`] decides the outcome. The two fallback behaviors are
//! mutually exclusive, so they are modeled as variants of one sum type
//! rather than as independent optional fields.

use crate::error::BoxError;
use std::sync::Arc;

/// Zero-argument initializer producing a value of type `T`.
pub type InitFn<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Zero-argument factory producing the error raised when no provider exists.
pub type ErrorFn = Arc<dyn Fn() -> BoxError + Send + Sync>;

/// Fallback value used by [`DefaultPolicy::InjectDefault`].
///
/// The variant is chosen by the caller: a `Value` is returned as-is even
/// when `T` itself is callable, and a `Factory` is invoked once per
/// resolution. There is no runtime guessing about callability.
pub enum DefaultValue<T> {
	/// A ready value, shared with every consumer that falls back to it
	Value(Arc<T>),
	/// A factory invoked on each fallback
	Factory(InitFn<T>),
}

impl<T> DefaultValue<T> {
	/// Produces the fallback value, invoking the factory form lazily.
	pub fn resolve(&self) -> Arc<T> {
		match self {
			Self::Value(value) => Arc::clone(value),
			Self::Factory(factory) => Arc::new((**factory)()),
		}
	}
}

impl<T> Clone for DefaultValue<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Value(value) => Self::Value(Arc::clone(value)),
			Self::Factory(factory) => Self::Factory(Arc::clone(factory)),
		}
	}
}

/// What a consume call does when no publisher is found.
///
/// At most one fallback behavior is active per resolution; the sum type
/// makes the "both configured" state unrepresentable.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use treebind::{DefaultPolicy, DefaultValue};
///
/// let base = DefaultPolicy::InjectDefault(DefaultValue::Value(Arc::new(1)));
/// let overrides = DefaultPolicy::InjectDefault(DefaultValue::Value(Arc::new(2)));
///
/// // A non-empty override displaces the base policy outright.
/// let effective = DefaultPolicy::merged(&base, Some(&overrides));
/// assert!(matches!(effective, DefaultPolicy::InjectDefault(_)));
/// ```
pub enum DefaultPolicy<T> {
	/// No fallback: an absent provider resolves to an absent value
	None,
	/// Return a default value instead of failing
	InjectDefault(DefaultValue<T>),
	/// Raise the caller-constructed error
	ThrowOnNoProvider(ErrorFn),
}

impl<T> DefaultPolicy<T> {
	/// Returns `true` when no fallback behavior is configured.
	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Computes the effective policy for one consume call.
	///
	/// An override that configures a fallback wins outright and displaces
	/// whatever the base configured, including the opposite fallback kind.
	/// An empty (or absent) override leaves the base policy untouched.
	pub fn merged<'a>(base: &'a Self, overrides: Option<&'a Self>) -> &'a Self {
		match overrides {
			Some(policy) if !policy.is_none() => policy,
			_ => base,
		}
	}
}

impl<T> Clone for DefaultPolicy<T> {
	fn clone(&self) -> Self {
		match self {
			Self::None => Self::None,
			Self::InjectDefault(default) => Self::InjectDefault(default.clone()),
			Self::ThrowOnNoProvider(factory) => Self::ThrowOnNoProvider(Arc::clone(factory)),
		}
	}
}

impl<T> Default for DefaultPolicy<T> {
	fn default() -> Self {
		Self::None
	}
}
