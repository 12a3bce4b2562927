/*! [`radix-twiddle`] symbol export.

This module collects the general public API into a single spot for inclusion,
as `use radix_twiddle::prelude::*;`, without polluting the root namespace of
the crate.

[`radix-twiddle`]: crate
!*/

pub use crate::{
	digit::{
		process_float_minus_zero,
		BfeDigitExtractor,
		DigitExtractor,
		ShiftDigitExtractor,
	},
	key::{
		KeyKind,
		RadixKey,
	},
	mem::BitRegister,
	order::{
		Ascending,
		Descending,
		Order,
		SortOrder,
	},
	twiddle::RadixSortTwiddle,
	window::{
		DigitWindow,
		DigitWindowError,
		DigitWindows,
	},
};
