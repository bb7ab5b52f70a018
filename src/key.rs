//! Binding keys
//!
//! A [`BindingKey`] identifies one dependency channel in a context store.
//! Keys are either process-wide unique tokens or caller-supplied names, are
//! immutable, and live for the lifetime of the process.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// Counter for unique key generation
static NEXT_UNIQUE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier for one dependency channel in a context store.
///
/// Every resolver call for a binding shares the key captured when the
/// binding was created. Unique keys never collide; named keys compare equal
/// by name, which lets independently-created bindings share a channel.
///
/// # Examples
///
/// ```
/// use treebind::BindingKey;
///
/// let a = BindingKey::unique();
/// let b = BindingKey::unique();
/// assert_ne!(a, b);
///
/// let theme = BindingKey::named("theme");
/// assert_eq!(theme, BindingKey::named("theme"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingKey(Repr);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Repr {
	Unique(u64),
	Named(Arc<str>),
}

impl BindingKey {
	/// Creates a fresh process-wide unique key.
	///
	/// # Examples
	///
	/// ```
	/// use treebind::BindingKey;
	///
	/// let key = BindingKey::unique();
	/// assert_ne!(key, BindingKey::unique());
	/// ```
	pub fn unique() -> Self {
		Self(Repr::Unique(NEXT_UNIQUE_ID.fetch_add(1, Ordering::SeqCst)))
	}

	/// Creates a key from a caller-supplied name.
	///
	/// Two named keys with the same name address the same channel.
	///
	/// # Examples
	///
	/// ```
	/// use treebind::BindingKey;
	///
	/// let key = BindingKey::named("theme");
	/// assert_eq!(key.to_string(), "theme");
	/// ```
	pub fn named(name: impl Into<Arc<str>>) -> Self {
		Self(Repr::Named(name.into()))
	}
}

impl fmt::Display for BindingKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Repr::Unique(id) => write!(f, "binding#{id}"),
			Repr::Named(name) => f.write_str(name),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn unique_keys_never_collide() {
		let keys: HashSet<BindingKey> = (0..100).map(|_| BindingKey::unique()).collect();
		assert_eq!(keys.len(), 100);
	}

	#[test]
	fn named_keys_compare_by_name() {
		assert_eq!(BindingKey::named("theme"), BindingKey::named("theme"));
		assert_ne!(BindingKey::named("theme"), BindingKey::named("locale"));
	}

	#[test]
	fn named_and_unique_keys_are_distinct() {
		let named = BindingKey::named("binding#0");
		let unique = BindingKey::unique();
		assert_ne!(named, unique);
	}

	#[test]
	fn display_shows_string_form() {
		assert_eq!(BindingKey::named("theme").to_string(), "theme");
		assert!(BindingKey::unique().to_string().starts_with("binding#"));
	}
}
