/*! `bitwire` – fixed-width integers on and off the wire.

This crate moves machine integers between their native representation and
packed external forms, in both of the ways protocol and file-format code
needs:

- **Byte-order conversion**: pack any one- to eight-byte integer into an
  external buffer of one to full-width bytes, in little- or big-endian
  order, and unpack it again with correct zero-fill or sign extension. The
  external order is chosen either at compile time ([`EndianConverter`],
  monomorphized to a branch-free strategy) or at runtime
  ([`DynamicEndianConverter`], for orders discovered from headers or peers).
- **Packed bit-field access**: name a contiguous bit range of an unsigned
  integer as a [`Section`] and move field values through it with
  [`BitVector`], as a library-level stand-in for C bit-fields.

Both cores are pure value transforms over `core` alone: no allocation, no
shared state, and `Send + Sync` calls from any number of threads. The `std`
feature (default) additionally enables two small service utilities — a
creator [`factory`] registry and an explicit-lifecycle [`shared`] instance
slot — plus `std::error::Error` impls on the error types.

# Examples

```rust
use bitwire::{Big, ByteOrder, DynamicEndianConverter, EndianConverter};

//  Wire order fixed at the call site: resolved at compile time.
let mut wire = [0u8; 3];
EndianConverter::<Big>::to_external(0xFFFE_DCBAu32, &mut wire)?;
assert_eq!(wire, [0xFE, 0xDC, 0xBA]);

//  Wire order read from data: resolved per call.
let converter = DynamicEndianConverter::new(ByteOrder::Little);
let value: i32 = converter.from_external(&[0xBA, 0xDC, 0xFE])?;
assert_eq!(value, 0xFFFE_DCBAu32 as i32);
# Ok::<(), bitwire::EndianError>(())
```
!*/

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod bits;
pub mod convert;
pub mod mem;
pub mod order;
pub mod prelude;

#[cfg(feature = "std")]
pub mod factory;

#[cfg(feature = "std")]
pub mod shared;

pub use crate::{
	bits::{
		BitData,
		BitVector,
		OverflowError,
		Section,
		SectionError,
	},
	convert::{
		DynamicEndianConverter,
		EndianConverter,
		EndianError,
	},
	mem::Native,
	order::{
		Big,
		ByteOrder,
		ExternalOrder,
		Little,
	},
};
