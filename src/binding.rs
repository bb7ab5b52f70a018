//! Binding factory and resolver
//!
//! A [`Binding`] is created once per dependency kind and then used by every
//! scope that publishes or consumes a value for that kind. It closes over
//! the binding key, an optional bound initializer, and the base default
//! policy; each call either publishes into a [`ContextStore`] or consumes
//! from one, applying the precedence rules for overrides and fallbacks.

use crate::call::{self, BindingCall, FactoryArg};
use crate::context::{ContextStore, ContextValue};
use crate::error::{BindingError, BoxError, Result};
use crate::key::BindingKey;
use crate::policy::{DefaultPolicy, DefaultValue, InitFn};
use std::sync::Arc;

/// Configuration accepted by the binding factory.
///
/// An absent `key` means a fresh unique key is generated when the binding
/// is built. The `policy` is the base fallback behavior for consume calls;
/// individual calls may override it.
pub struct BindingConfig<T> {
	/// Explicit binding key, shared by every resolver call
	pub key: Option<BindingKey>,
	/// Base default policy for consume calls
	pub policy: DefaultPolicy<T>,
}

impl<T> Default for BindingConfig<T> {
	fn default() -> Self {
		Self {
			key: None,
			policy: DefaultPolicy::None,
		}
	}
}

/// One dependency channel: a key plus publish/consume behavior.
///
/// # Examples
///
/// ```
/// use treebind::{Binding, ComponentScope};
///
/// let binding = Binding::builder()
///     .initializer(|| String::from("dark"))
///     .build();
///
/// let parent = ComponentScope::root();
/// let child = parent.child();
///
/// binding.provide(parent.as_ref()).unwrap();
/// let theme = binding.inject(child.as_ref()).unwrap();
/// assert_eq!(theme.as_deref(), Some(&String::from("dark")));
/// ```
pub struct Binding<T> {
	key: BindingKey,
	initializer: Option<InitFn<T>>,
	policy: DefaultPolicy<T>,
}

impl<T> std::fmt::Debug for Binding<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Binding")
			.field("key", &self.key)
			.field("initializer", &self.initializer.as_ref().map(|_| "<fn>"))
			.finish_non_exhaustive()
	}
}

impl<T: Send + Sync + 'static> Binding<T> {
	/// Builds a binding from raw factory arguments.
	///
	/// This is the loosely-shaped factory surface: zero arguments, a lone
	/// initializer, a lone configuration, or an initializer followed by a
	/// configuration. Any other shape fails with
	/// [`BindingError::InvalidArgument`].
	pub fn from_args(first: Option<FactoryArg<T>>, second: Option<FactoryArg<T>>) -> Result<Self> {
		let (initializer, config) = call::parse_factory_args(first, second)?;
		Ok(Self::assemble(initializer, config))
	}

	/// Starts a typed builder for this binding.
	///
	/// # Examples
	///
	/// ```
	/// use treebind::{Binding, BindingKey};
	///
	/// let binding = Binding::<u32>::builder()
	///     .key(BindingKey::named("retries"))
	///     .inject_default(3)
	///     .build();
	/// assert_eq!(binding.key().to_string(), "retries");
	/// ```
	pub fn builder() -> BindingBuilder<T> {
		BindingBuilder {
			initializer: None,
			config: BindingConfig::default(),
		}
	}

	fn assemble(initializer: Option<InitFn<T>>, config: BindingConfig<T>) -> Self {
		Self {
			key: config.key.unwrap_or_else(BindingKey::unique),
			initializer,
			policy: config.policy,
		}
	}

	/// The key this binding publishes and consumes under.
	pub fn key(&self) -> &BindingKey {
		&self.key
	}

	/// Dispatches one classified resolver call.
	///
	/// Publish calls return `Ok(Some(value))`; consume calls return the
	/// published value, the fallback, or `Ok(None)` depending on the
	/// effective policy.
	pub fn resolve(&self, ctx: &dyn ContextStore, call: BindingCall<T>) -> Result<Option<Arc<T>>> {
		match call {
			BindingCall::Publish { initializer } => self.publish(ctx, initializer).map(Some),
			BindingCall::Consume { overrides } => self.consume(ctx, overrides.as_ref()),
		}
	}

	/// Publishes the bound initializer's value into `ctx`.
	///
	/// Fails with [`BindingError::NotInitialized`] when the binding was
	/// created without an initializer.
	pub fn provide(&self, ctx: &dyn ContextStore) -> Result<Arc<T>> {
		self.publish(ctx, None)
	}

	/// Publishes with a per-call initializer, overriding the bound one.
	///
	/// # Examples
	///
	/// ```
	/// use treebind::{Binding, ComponentScope};
	///
	/// let binding = Binding::builder().initializer(|| 1u32).build();
	/// let scope = ComponentScope::root();
	///
	/// let value = binding.provide_with(scope.as_ref(), || 2u32).unwrap();
	/// assert_eq!(*value, 2);
	/// ```
	pub fn provide_with(
		&self,
		ctx: &dyn ContextStore,
		initializer: impl Fn() -> T + Send + Sync + 'static,
	) -> Result<Arc<T>> {
		self.publish(ctx, Some(Arc::new(initializer)))
	}

	/// Consumes the nearest published value, applying the base policy when
	/// no publisher exists.
	pub fn inject(&self, ctx: &dyn ContextStore) -> Result<Option<Arc<T>>> {
		self.consume(ctx, None)
	}

	/// Consumes with a per-call policy override.
	///
	/// A non-empty override displaces the base policy outright; see
	/// [`DefaultPolicy::merged`].
	pub fn inject_with(
		&self,
		ctx: &dyn ContextStore,
		overrides: DefaultPolicy<T>,
	) -> Result<Option<Arc<T>>> {
		self.consume(ctx, Some(&overrides))
	}

	fn publish(&self, ctx: &dyn ContextStore, replacement: Option<InitFn<T>>) -> Result<Arc<T>> {
		let initializer = replacement.as_ref().or(self.initializer.as_ref());
		let Some(initializer) = initializer else {
			return Err(BindingError::NotInitialized {
				key: self.key.to_string(),
			});
		};
		let value = Arc::new((**initializer)());
		let handle: ContextValue = value.clone();
		ctx.set(&self.key, handle);
		tracing::debug!(key = %self.key, "Published binding value");
		Ok(value)
	}

	fn consume(
		&self,
		ctx: &dyn ContextStore,
		overrides: Option<&DefaultPolicy<T>>,
	) -> Result<Option<Arc<T>>> {
		// A published value wins over any policy; the merged policy only
		// decides what happens when no publisher exists.
		if let Some(value) = ctx.get(&self.key) {
			let value = value
				.downcast::<T>()
				.map_err(|_| BindingError::TypeMismatch {
					key: self.key.to_string(),
				})?;
			tracing::trace!(key = %self.key, "Resolved binding from context");
			return Ok(Some(value));
		}
		match DefaultPolicy::merged(&self.policy, overrides) {
			DefaultPolicy::None => Ok(None),
			DefaultPolicy::InjectDefault(default) => {
				tracing::debug!(key = %self.key, "No provider found, using configured default");
				Ok(Some(default.resolve()))
			}
			DefaultPolicy::ThrowOnNoProvider(factory) => {
				tracing::debug!(key = %self.key, "No provider found, raising caller error");
				Err(BindingError::NoProvider {
					key: self.key.to_string(),
					source: (**factory)(),
				})
			}
		}
	}
}

/// Builder for [`Binding`].
///
/// Each policy setter displaces the previously configured one, so a built
/// binding always carries at most one fallback behavior.
pub struct BindingBuilder<T> {
	initializer: Option<InitFn<T>>,
	config: BindingConfig<T>,
}

impl<T: Send + Sync + 'static> BindingBuilder<T> {
	/// Sets the bound initializer used by plain `provide` calls.
	pub fn initializer(mut self, initializer: impl Fn() -> T + Send + Sync + 'static) -> Self {
		self.initializer = Some(Arc::new(initializer));
		self
	}

	/// Sets an explicit binding key instead of a generated unique one.
	pub fn key(mut self, key: BindingKey) -> Self {
		self.config.key = Some(key);
		self
	}

	/// Falls back to `value` when consuming with no publisher present.
	pub fn inject_default(mut self, value: T) -> Self {
		self.config.policy = DefaultPolicy::InjectDefault(DefaultValue::Value(Arc::new(value)));
		self
	}

	/// Falls back to `factory`'s result when consuming with no publisher
	/// present, invoking it once per resolution.
	pub fn inject_default_with(
		mut self,
		factory: impl Fn() -> T + Send + Sync + 'static,
	) -> Self {
		self.config.policy = DefaultPolicy::InjectDefault(DefaultValue::Factory(Arc::new(factory)));
		self
	}

	/// Raises the factory's error when consuming with no publisher present.
	///
	/// # Examples
	///
	/// ```
	/// use treebind::{Binding, ComponentScope};
	///
	/// let binding = Binding::<u32>::builder()
	///     .throw_on_no_provider(|| "no counter provided".into())
	///     .build();
	///
	/// let scope = ComponentScope::root();
	/// assert!(binding.inject(scope.as_ref()).is_err());
	/// ```
	pub fn throw_on_no_provider(
		mut self,
		factory: impl Fn() -> BoxError + Send + Sync + 'static,
	) -> Self {
		self.config.policy = DefaultPolicy::ThrowOnNoProvider(Arc::new(factory));
		self
	}

	/// Builds the binding, generating a unique key if none was set.
	pub fn build(self) -> Binding<T> {
		Binding::assemble(self.initializer, self.config)
	}
}
