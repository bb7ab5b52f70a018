//! Property-based tests for resolution precedence
//!
//! Uses proptest to verify invariants of the binding resolution rules:
//! 1. A published value always wins over any configured policy
//! 2. Without a publisher, the merged policy alone decides the outcome
//! 3. Nearest-ancestor lookup returns the deepest publisher in the chain

use proptest::prelude::*;
use std::sync::Arc;
use treebind::{Binding, BindingError, ComponentScope, DefaultPolicy, DefaultValue};

/// A policy choice that proptest can generate and compare against.
#[derive(Clone, Debug)]
enum PolicyChoice {
	Empty,
	Default(i32),
	Throw,
}

impl PolicyChoice {
	fn to_policy(&self) -> DefaultPolicy<i32> {
		match self {
			Self::Empty => DefaultPolicy::None,
			Self::Default(tag) => {
				DefaultPolicy::InjectDefault(DefaultValue::Value(Arc::new(*tag)))
			}
			Self::Throw => DefaultPolicy::ThrowOnNoProvider(Arc::new(|| "no provider".into())),
		}
	}
}

fn policy_choice() -> impl Strategy<Value = PolicyChoice> {
	prop_oneof![
		Just(PolicyChoice::Empty),
		any::<i32>().prop_map(PolicyChoice::Default),
		Just(PolicyChoice::Throw),
	]
}

proptest! {
	// Property 1 + 2: the outcome table for one publisher and one consumer.
	#[test]
	fn outcome_follows_the_precedence_table(
		published in proptest::option::of(any::<i32>()),
		base in policy_choice(),
		overrides in policy_choice(),
	) {
		let mut builder = Binding::<i32>::builder();
		builder = match &base {
			PolicyChoice::Empty => builder,
			PolicyChoice::Default(tag) => {
				let tag = *tag;
				builder.inject_default(tag)
			}
			PolicyChoice::Throw => builder.throw_on_no_provider(|| "no provider".into()),
		};
		let binding = builder.build();

		let parent = ComponentScope::root();
		let child = parent.child();
		if let Some(value) = published {
			binding.provide_with(parent.as_ref(), move || value).unwrap();
		}

		let outcome = binding.inject_with(child.as_ref(), overrides.to_policy());

		match (published, &overrides, &base) {
			// A publisher anywhere in the chain always wins.
			(Some(value), _, _) => {
				let resolved = outcome.unwrap();
				prop_assert_eq!(resolved.as_deref(), Some(&value));
			}
			// A non-empty override displaces the base outright.
			(None, PolicyChoice::Default(tag), _) => {
				let resolved = outcome.unwrap();
				prop_assert_eq!(resolved.as_deref(), Some(tag));
			}
			(None, PolicyChoice::Throw, _) => {
				prop_assert!(matches!(outcome, Err(BindingError::NoProvider { .. })), "expected NoProvider error");
			}
			// An empty override leaves the base policy in charge.
			(None, PolicyChoice::Empty, PolicyChoice::Default(tag)) => {
				let resolved = outcome.unwrap();
				prop_assert_eq!(resolved.as_deref(), Some(tag));
			}
			(None, PolicyChoice::Empty, PolicyChoice::Throw) => {
				prop_assert!(matches!(outcome, Err(BindingError::NoProvider { .. })), "expected NoProvider error");
			}
			(None, PolicyChoice::Empty, PolicyChoice::Empty) => {
				prop_assert!(outcome.unwrap().is_none());
			}
		}
	}

	// Property 3: in a scope chain, the deepest publisher shadows the rest.
	#[test]
	fn deepest_publisher_wins_in_a_scope_chain(publish_at in proptest::collection::vec(any::<bool>(), 1..8)) {
		let binding = Binding::<usize>::builder().build();

		let mut scopes = vec![ComponentScope::root()];
		for _ in 1..publish_at.len() {
			let child = scopes.last().unwrap().child();
			scopes.push(child);
		}

		for (depth, publish) in publish_at.iter().enumerate() {
			if *publish {
				binding
					.provide_with(scopes[depth].as_ref(), move || depth)
					.unwrap();
			}
		}

		let leaf = scopes.last().unwrap();
		let expected = publish_at.iter().rposition(|published| *published);
		let resolved = binding.inject(leaf.as_ref()).unwrap();

		match expected {
			Some(depth) => prop_assert_eq!(resolved.as_deref(), Some(&depth)),
			None => prop_assert!(resolved.is_none()),
		}
	}
}
