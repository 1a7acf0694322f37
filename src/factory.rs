/*! Object Factory

A registry mapping identifiers to creator closures, for call sites that must
choose a concrete product family at runtime — the classic factory pattern.
Products are whatever the creators return, typically a boxed trait object or
other owning handle; the registry itself never inspects them.

Creator arguments are part of the factory's type: the `A` parameter is the
argument tuple every creator receives, so a family of products with a shared
constructor signature registers uniformly and [`create`] forwards the tuple
through.

[`create`]: Factory::create
!*/

use core::fmt;
use std::collections::BTreeMap;

/// Error produced by [`Factory::create`] when no creator is registered for
/// the requested identifier. Carries the identifier back to the caller.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnknownId<K> {
	/// The identifier that had no registered creator.
	pub id: K,
}

impl<K> fmt::Display for UnknownId<K>
where K: fmt::Debug {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "no creator registered for {:?}", self.id)
	}
}

impl<K> std::error::Error for UnknownId<K>
where K: fmt::Debug {
}

/** A registry of product creators, keyed by identifier.

# Type Parameters

- `K`: the identifier type. Ordered-map semantics, so `K: Ord`.
- `P`: the product type every creator returns.
- `A`: the argument tuple every creator accepts; defaults to `()` for
  nullary creators.

# Examples

```rust
use bitwire::factory::Factory;

trait Codec {
	fn name(&self) -> &'static str;
}

struct Raw;
impl Codec for Raw {
	fn name(&self) -> &'static str {
		"raw"
	}
}

let mut factory: Factory<&str, Box<dyn Codec>> = Factory::new();
assert!(factory.register_creator("raw", |()| Box::new(Raw) as Box<dyn Codec>));

let codec = factory.create(&"raw", ()).unwrap();
assert_eq!(codec.name(), "raw");
assert!(factory.create(&"???", ()).is_err());
```
**/
pub struct Factory<K, P, A = ()> {
	creators: BTreeMap<K, Box<dyn Fn(A) -> P + Send + Sync>>,
}

impl<K, P, A> Factory<K, P, A>
where K: Ord {
	/// Constructs an empty factory.
	pub fn new() -> Self {
		Self {
			creators: BTreeMap::new(),
		}
	}

	/// Associates `creator` with `id`.
	///
	/// Returns `true` on success, and `false` — without replacing the
	/// existing creator — when `id` is already registered.
	pub fn register_creator<F>(&mut self, id: K, creator: F) -> bool
	where F: Fn(A) -> P + Send + Sync + 'static {
		use std::collections::btree_map::Entry;

		match self.creators.entry(id) {
			Entry::Occupied(_) => false,
			Entry::Vacant(slot) => {
				slot.insert(Box::new(creator));
				true
			},
		}
	}

	/// Removes the creator associated with `id`.
	///
	/// Returns `false` when `id` was not registered.
	pub fn unregister_creator(&mut self, id: &K) -> bool {
		self.creators.remove(id).is_some()
	}

	/// Removes every registered creator.
	pub fn clear_creators(&mut self) {
		self.creators.clear();
	}

	/// Invokes the creator registered for `id`, forwarding `args` to it.
	///
	/// # Errors
	///
	/// [`UnknownId`] carrying the identifier, when no creator is registered
	/// for it.
	pub fn create(&self, id: &K, args: A) -> Result<P, UnknownId<K>>
	where K: Clone {
		match self.creators.get(id) {
			Some(creator) => Ok(creator(args)),
			None => Err(UnknownId {
				id: id.clone(),
			}),
		}
	}

	/// Counts the registered creators.
	pub fn len(&self) -> usize {
		self.creators.len()
	}

	/// Tests whether the factory has no registered creators.
	pub fn is_empty(&self) -> bool {
		self.creators.is_empty()
	}
}

impl<K, P, A> Default for Factory<K, P, A>
where K: Ord {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, P, A> fmt::Debug for Factory<K, P, A>
where K: fmt::Debug {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.debug_struct("Factory")
			.field("ids", &self.creators.keys())
			.finish()
	}
}
