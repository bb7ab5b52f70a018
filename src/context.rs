//! Host context boundary
//!
//! The host framework owns the actual context-propagation channel; this
//! crate only needs two operations from it. [`ContextStore`] is that seam,
//! so resolution logic can be exercised against any store, including plain
//! test doubles with no component tree behind them.

use crate::key::BindingKey;
use std::any::Any;
use std::sync::Arc;

/// Type-erased value handle stored in a context.
pub type ContextValue = Arc<dyn Any + Send + Sync>;

/// Tree-scoped key-value store owned by the host framework.
///
/// `set` attaches a value to the current scope so that descendant lookups
/// see it; `get` returns the nearest ancestor's value for a key, or `None`.
/// Receivers are `&self`: stores are expected to use interior mutability,
/// since publish and consume run during synchronous scope setup.
pub trait ContextStore: Send + Sync {
	/// Attaches `value` to the current scope under `key`.
	fn set(&self, key: &BindingKey, value: ContextValue);

	/// Returns the nearest value attached under `key`, walking toward the
	/// root of the scope tree.
	fn get(&self, key: &BindingKey) -> Option<ContextValue>;
}
