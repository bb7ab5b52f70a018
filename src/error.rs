//! Error types for binding resolution

use thiserror::Error;

/// Boxed error produced by caller-supplied error factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for binding construction and resolution
#[derive(Debug, Error)]
pub enum BindingError {
	/// Wrong argument shape at factory construction or resolver call time
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// Publish mode resolved no value to attach to the context
	#[error("binding `{key}` is not initialized")]
	NotInitialized {
		/// String form of the binding key
		key: String,
	},

	/// No provider was found and the effective policy raises
	#[error("no provider found for binding `{key}`")]
	NoProvider {
		/// String form of the binding key
		key: String,
		/// Error constructed by the caller-supplied factory
		#[source]
		source: BoxError,
	},

	/// A stored value failed the downcast to the expected type
	#[error("value for binding `{key}` has a different type than expected")]
	TypeMismatch {
		/// String form of the binding key
		key: String,
	},
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;
