/*! Shared-Instance Lifecycle

A process-wide service that must exist exactly once — a registry, a
connection table, a parsed configuration — is owned here by an explicit
lifecycle slot rather than by a self-constructing global. The composition
root declares a [`Shared`] (usually as a `static`, which its `const`
constructor permits), chooses when construction happens ([`init`] or the
lazy [`get_or_init`]), hands out [`Arc`] handles, and tears the instance
down once with [`shutdown`].

The slot moves strictly forward through three states: vacant, live, retired.
Teardown is terminal — a retired slot refuses both access and
reinitialization, so a late caller gets a typed logic error instead of a
half-destroyed resurrected instance. Handles already given out remain valid
after shutdown; the slot drops its own reference and the last handle
standing frees the instance.

[`init`]: Shared::init
[`get_or_init`]: Shared::get_or_init
[`shutdown`]: Shared::shutdown
!*/

use core::fmt;
use std::sync::{
	Arc,
	Mutex,
	PoisonError,
};

/// Errors produced when a [`Shared`] slot is used against its lifecycle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SharedError {
	/// The slot has not been initialized.
	Vacant,
	/// The slot already holds a live instance.
	AlreadyLive,
	/// The slot has been shut down; it never accepts an instance again.
	Retired,
}

impl fmt::Display for SharedError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Self::Vacant => fmt.write_str("shared slot is not initialized"),
			Self::AlreadyLive => {
				fmt.write_str("shared slot already holds an instance")
			},
			Self::Retired => fmt.write_str("shared slot has been shut down"),
		}
	}
}

impl std::error::Error for SharedError {
}

enum Slot<T> {
	Vacant,
	Live(Arc<T>),
	Retired,
}

/** An explicitly managed slot for a single shared instance.

# Examples

```rust
use bitwire::shared::{Shared, SharedError};

static COUNTERS: Shared<Vec<&'static str>> = Shared::new();

let handle = COUNTERS.get_or_init(|| vec!["packets"]).unwrap();
assert_eq!(handle[0], "packets");

COUNTERS.shutdown().unwrap();
assert_eq!(
	COUNTERS.get_or_init(|| vec![]).unwrap_err(),
	SharedError::Retired,
);
//  Handles taken before shutdown stay alive.
assert_eq!(handle.len(), 1);
```
**/
pub struct Shared<T> {
	slot: Mutex<Slot<T>>,
}

impl<T> Shared<T> {
	/// Constructs a vacant slot. Usable in `static` items.
	pub const fn new() -> Self {
		Self {
			slot: Mutex::new(Slot::Vacant),
		}
	}

	/// Places `value` into a vacant slot and returns a handle to it.
	///
	/// # Errors
	///
	/// - [`SharedError::AlreadyLive`] if the slot holds an instance.
	/// - [`SharedError::Retired`] if the slot has been shut down.
	pub fn init(&self, value: T) -> Result<Arc<T>, SharedError> {
		let mut slot = self.lock();
		match &*slot {
			Slot::Vacant => {
				let handle = Arc::new(value);
				*slot = Slot::Live(Arc::clone(&handle));
				Ok(handle)
			},
			Slot::Live(_) => Err(SharedError::AlreadyLive),
			Slot::Retired => Err(SharedError::Retired),
		}
	}

	/// Returns a handle to the live instance.
	///
	/// # Errors
	///
	/// - [`SharedError::Vacant`] if the slot was never initialized.
	/// - [`SharedError::Retired`] if the slot has been shut down.
	pub fn get(&self) -> Result<Arc<T>, SharedError> {
		match &*self.lock() {
			Slot::Vacant => Err(SharedError::Vacant),
			Slot::Live(handle) => Ok(Arc::clone(handle)),
			Slot::Retired => Err(SharedError::Retired),
		}
	}

	/// Returns a handle to the live instance, constructing it first if the
	/// slot is vacant.
	///
	/// The construction happens under the slot lock: when several threads
	/// race here, exactly one `init` closure runs and every caller receives
	/// a handle to the same instance.
	///
	/// # Errors
	///
	/// [`SharedError::Retired`] if the slot has been shut down; a retired
	/// slot is never re-populated.
	pub fn get_or_init<F>(&self, init: F) -> Result<Arc<T>, SharedError>
	where F: FnOnce() -> T {
		let mut slot = self.lock();
		match &*slot {
			Slot::Vacant => {
				let handle = Arc::new(init());
				*slot = Slot::Live(Arc::clone(&handle));
				Ok(handle)
			},
			Slot::Live(handle) => Ok(Arc::clone(handle)),
			Slot::Retired => Err(SharedError::Retired),
		}
	}

	/// Retires the slot, dropping its reference to the instance.
	///
	/// Outstanding handles keep the instance alive until they drop; the slot
	/// itself never hands out another one.
	///
	/// # Errors
	///
	/// - [`SharedError::Vacant`] if there is no instance to shut down.
	/// - [`SharedError::Retired`] if the slot was already shut down.
	pub fn shutdown(&self) -> Result<(), SharedError> {
		let mut slot = self.lock();
		match &*slot {
			Slot::Vacant => Err(SharedError::Vacant),
			Slot::Live(_) => {
				*slot = Slot::Retired;
				Ok(())
			},
			Slot::Retired => Err(SharedError::Retired),
		}
	}

	/// Acquires the slot lock, recovering from poisoning.
	///
	/// Every mutation of the slot is a single enum-variant write, so a
	/// panicking holder cannot leave the state half-updated.
	fn lock(&self) -> std::sync::MutexGuard<'_, Slot<T>> {
		self.slot.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl<T> Default for Shared<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for Shared<T> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let state = match &*self.lock() {
			Slot::Vacant => "Vacant",
			Slot::Live(_) => "Live",
			Slot::Retired => "Retired",
		};
		fmt.debug_tuple("Shared").field(&state).finish()
	}
}
