//! Tree-scoped context store
//!
//! [`ComponentScope`] is an in-memory [`ContextStore`] with parent links:
//! each scope owns its own entries and falls back to its ancestors on
//! lookup, so a value published in a scope is visible to every descendant
//! until a nearer publisher shadows it. Hosts with their own context
//! plumbing implement [`ContextStore`] directly instead.

use crate::context::{ContextStore, ContextValue};
use crate::key::BindingKey;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// One scope in a component tree.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use treebind::{BindingKey, ComponentScope, ContextStore};
///
/// let root = ComponentScope::root();
/// let child = root.child();
///
/// let key = BindingKey::named("theme");
/// root.set(&key, Arc::new("dark".to_string()));
///
/// // Descendants see the ancestor's value.
/// let value = child.get(&key).unwrap();
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "dark");
/// ```
pub struct ComponentScope {
	values: RwLock<HashMap<BindingKey, ContextValue>>,
	parent: Option<Arc<ComponentScope>>,
}

impl ComponentScope {
	/// Creates a root scope with no parent.
	pub fn root() -> Arc<Self> {
		Arc::new(Self {
			values: RwLock::new(HashMap::new()),
			parent: None,
		})
	}

	/// Creates a child scope of this one.
	///
	/// The child starts empty; lookups that miss fall through to this scope
	/// and its ancestors. Values set on the child shadow ancestor values
	/// for the child's subtree only.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use treebind::{BindingKey, ComponentScope, ContextStore};
	///
	/// let root = ComponentScope::root();
	/// let child = root.child();
	///
	/// let key = BindingKey::named("depth");
	/// root.set(&key, Arc::new(0u32));
	/// child.set(&key, Arc::new(1u32));
	///
	/// // The child sees its own value, the root keeps the original.
	/// assert_eq!(child.get(&key).unwrap().downcast_ref::<u32>(), Some(&1));
	/// assert_eq!(root.get(&key).unwrap().downcast_ref::<u32>(), Some(&0));
	/// ```
	pub fn child(self: &Arc<Self>) -> Arc<Self> {
		Arc::new(Self {
			values: RwLock::new(HashMap::new()),
			parent: Some(Arc::clone(self)),
		})
	}
}

impl ContextStore for ComponentScope {
	fn set(&self, key: &BindingKey, value: ContextValue) {
		let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
		values.insert(key.clone(), value);
	}

	fn get(&self, key: &BindingKey) -> Option<ContextValue> {
		{
			let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
			if let Some(value) = values.get(key) {
				return Some(Arc::clone(value));
			}
		}
		self.parent.as_ref().and_then(|parent| parent.get(key))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set_u32(scope: &ComponentScope, key: &BindingKey, value: u32) {
		scope.set(key, Arc::new(value));
	}

	fn get_u32(scope: &ComponentScope, key: &BindingKey) -> Option<u32> {
		scope
			.get(key)
			.and_then(|value| value.downcast_ref::<u32>().copied())
	}

	#[test]
	fn missing_key_is_absent() {
		let root = ComponentScope::root();
		assert!(root.get(&BindingKey::named("missing")).is_none());
	}

	#[test]
	fn own_value_is_found() {
		let root = ComponentScope::root();
		let key = BindingKey::unique();
		set_u32(&root, &key, 7);
		assert_eq!(get_u32(&root, &key), Some(7));
	}

	#[test]
	fn lookup_walks_to_nearest_ancestor() {
		let root = ComponentScope::root();
		let mid = root.child();
		let leaf = mid.child();
		let key = BindingKey::unique();

		set_u32(&root, &key, 1);
		assert_eq!(get_u32(&leaf, &key), Some(1));

		// A nearer publisher shadows the farther one.
		set_u32(&mid, &key, 2);
		assert_eq!(get_u32(&leaf, &key), Some(2));
		assert_eq!(get_u32(&root, &key), Some(1));
	}

	#[test]
	fn sibling_scopes_are_independent() {
		let root = ComponentScope::root();
		let left = root.child();
		let right = root.child();
		let key = BindingKey::unique();

		set_u32(&left, &key, 1);
		assert_eq!(get_u32(&left, &key), Some(1));
		assert!(get_u32(&right, &key).is_none());
	}

	#[test]
	fn ancestor_lookup_never_mutates_intermediate_scopes() {
		let root = ComponentScope::root();
		let leaf = root.child();
		let key = BindingKey::unique();

		set_u32(&root, &key, 3);
		let _ = get_u32(&leaf, &key);

		let values = leaf.values.read().unwrap();
		assert!(values.is_empty());
	}
}
