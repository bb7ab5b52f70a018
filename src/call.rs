//! Call-shape classification
//!
//! The resolver accepts several positional call shapes. Raw arguments are
//! classified into a [`BindingCall`] variant before any resolution logic
//! runs, so every invalid shape is rejected in one place and the resolution
//! core only ever dispatches on well-formed variants.

use crate::binding::BindingConfig;
use crate::error::{BindingError, Result};
use crate::policy::{DefaultPolicy, InitFn};

/// The literal mode words accepted as a resolver's first argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Publish a value into the current scope
	Provide,
	/// Retrieve the nearest published value
	Inject,
}

/// Raw positional argument to the binding factory.
pub enum FactoryArg<T> {
	/// A bound initializer
	Initializer(InitFn<T>),
	/// A configuration object
	Config(BindingConfig<T>),
}

/// Raw positional argument to a resolver call.
pub enum CallArg<T> {
	/// A literal mode word
	Mode(Mode),
	/// A per-call override configuration
	Overrides(DefaultPolicy<T>),
	/// An override initializer
	Initializer(InitFn<T>),
}

/// A classified resolver call, ready for dispatch.
pub enum BindingCall<T> {
	/// Publish mode: attach a value to the current scope
	Publish {
		/// Override initializer, taking precedence over the bound one
		initializer: Option<InitFn<T>>,
	},
	/// Consume mode: retrieve a value or apply the fallback policy
	Consume {
		/// Per-call override of the default policy
		overrides: Option<DefaultPolicy<T>>,
	},
}

impl<T> BindingCall<T> {
	/// Classifies raw resolver arguments.
	///
	/// Publish mode is selected by a leading [`Mode::Provide`]; everything
	/// else is consume mode. An override configuration is accepted either
	/// as the sole argument or following an explicit [`Mode::Inject`].
	pub fn parse(first: Option<CallArg<T>>, second: Option<CallArg<T>>) -> Result<Self> {
		match (first, second) {
			(Some(CallArg::Mode(Mode::Provide)), None) => Ok(Self::Publish { initializer: None }),
			(Some(CallArg::Mode(Mode::Provide)), Some(CallArg::Initializer(initializer))) => {
				Ok(Self::Publish {
					initializer: Some(initializer),
				})
			}
			(Some(CallArg::Mode(Mode::Provide)), Some(_)) => Err(BindingError::InvalidArgument(
				"second argument must be an initializer function when the mode is provide".into(),
			)),
			(Some(CallArg::Mode(Mode::Inject)), None) => Ok(Self::Consume { overrides: None }),
			(Some(CallArg::Mode(Mode::Inject)), Some(CallArg::Overrides(overrides))) => {
				Ok(Self::Consume {
					overrides: Some(overrides),
				})
			}
			(Some(CallArg::Mode(Mode::Inject)), Some(_)) => Err(BindingError::InvalidArgument(
				"second argument must be an override configuration when the mode is inject".into(),
			)),
			(Some(CallArg::Overrides(overrides)), None) => Ok(Self::Consume {
				overrides: Some(overrides),
			}),
			(Some(CallArg::Overrides(_)), Some(_)) => Err(BindingError::InvalidArgument(
				"an override configuration takes no further arguments".into(),
			)),
			(None, None) => Ok(Self::Consume { overrides: None }),
			(None, Some(_)) => Err(BindingError::InvalidArgument(
				"second argument given without a first".into(),
			)),
			(Some(CallArg::Initializer(_)), _) => Err(BindingError::InvalidArgument(
				"first argument must be a mode word or an override configuration".into(),
			)),
		}
	}
}

impl<T> std::fmt::Debug for BindingCall<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Publish { initializer } => f
				.debug_struct("Publish")
				.field("initializer", &initializer.as_ref().map(|_| "<fn>"))
				.finish(),
			Self::Consume { overrides } => f
				.debug_struct("Consume")
				.field("overrides", &overrides.as_ref().map(|_| "<policy>"))
				.finish(),
		}
	}
}

/// Classifies raw factory arguments into an initializer and a configuration.
///
/// With two arguments the first must be the initializer and the second the
/// configuration; with one argument either kind is accepted on its own.
pub(crate) fn parse_factory_args<T>(
	first: Option<FactoryArg<T>>,
	second: Option<FactoryArg<T>>,
) -> Result<(Option<InitFn<T>>, BindingConfig<T>)> {
	match (first, second) {
		(None, None) => Ok((None, BindingConfig::default())),
		(Some(FactoryArg::Initializer(initializer)), None) => {
			Ok((Some(initializer), BindingConfig::default()))
		}
		(Some(FactoryArg::Config(config)), None) => Ok((None, config)),
		(Some(FactoryArg::Initializer(initializer)), Some(FactoryArg::Config(config))) => {
			Ok((Some(initializer), config))
		}
		(Some(FactoryArg::Config(_)), Some(_)) => Err(BindingError::InvalidArgument(
			"first argument must be an initializer function when two arguments are given".into(),
		)),
		(Some(FactoryArg::Initializer(_)), Some(FactoryArg::Initializer(_))) => {
			Err(BindingError::InvalidArgument(
				"second argument must be a configuration object when two arguments are given".into(),
			))
		}
		(None, Some(_)) => Err(BindingError::InvalidArgument(
			"second argument given without a first".into(),
		)),
	}
}
