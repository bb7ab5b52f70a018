//! # Treebind
//!
//! Tree-scoped provide/inject bindings with defaulting, per-call overrides
//! and error signaling.
//!
//! A [`Binding`] is created once per dependency kind. Ancestor scopes
//! publish a value under the binding's key; descendant scopes consume the
//! nearest published value, or fall back according to the binding's
//! [`DefaultPolicy`] when no publisher exists. The host framework's context
//! channel is abstracted behind the [`ContextStore`] trait, with
//! [`ComponentScope`] as the built-in tree-scoped implementation.
//!
//! ## Features
//!
//! - **One binding, two operations**: every scope either publishes or
//!   consumes through the same binding handle
//! - **Precedence built in**: per-call initializers override bound ones;
//!   per-call policies displace base policies outright
//! - **Mutually exclusive fallbacks**: inject-default and
//!   throw-on-no-provider are variants of one sum type, never both set
//! - **Host-agnostic**: resolution depends only on [`ContextStore`]
//!
//! ## Example
//!
//! ```
//! use treebind::{Binding, ComponentScope};
//!
//! #[derive(Debug, PartialEq)]
//! struct Settings {
//!     msg: String,
//! }
//!
//! let binding = Binding::builder()
//!     .initializer(|| Settings { msg: "x".into() })
//!     .build();
//!
//! let parent = ComponentScope::root();
//! let child = parent.child();
//!
//! // The parent publishes, the child consumes.
//! binding.provide(parent.as_ref()).unwrap();
//! let settings = binding.inject(child.as_ref()).unwrap().unwrap();
//! assert_eq!(settings.msg, "x");
//! ```

pub mod binding;
pub mod call;
pub mod context;
pub mod error;
pub mod key;
pub mod policy;
pub mod scope;

pub use binding::{Binding, BindingBuilder, BindingConfig};
pub use call::{BindingCall, CallArg, FactoryArg, Mode};
pub use context::{ContextStore, ContextValue};
pub use error::{BindingError, BoxError, Result};
pub use key::BindingKey;
pub use policy::{DefaultPolicy, DefaultValue, ErrorFn, InitFn};
pub use scope::ComponentScope;
