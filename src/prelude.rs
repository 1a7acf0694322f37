/*! `bitwire` symbol export.

This module collects the general public API into a single spot for inclusion,
as `use bitwire::prelude::*;`, without polluting the root namespace of the
crate.
!*/

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

#[cfg(feature = "std")]
pub use crate::{
	factory::{
		Factory,
		UnknownId,
	},
	shared::{
		Shared,
		SharedError,
	},
};
