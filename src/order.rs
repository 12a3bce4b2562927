/*! Sort Ordering

Radix sorts route keys by the unsigned value of their digits, and so always
sort ascending. A descending sort complements every sortable bit pattern before
routing, which reverses the unsigned order, and complements it again on the
way out.

The `SortOrder` trait selects between the two at compile time. Its
implementors are zero-sized, and its only behavior is a `const` flag, so the
choice costs nothing on the hot path. The [`Order`] enum mirrors the trait as a
runtime value, for callers that read the direction from configuration and
dispatch once before entering a kernel.
!*/

use core::fmt::{
	self,
	Debug,
	Display,
	Formatter,
};

#[cfg(feature = "serde")]
use serde::{
	Deserialize,
	Serialize,
};

use crate::mem::BitRegister;

/// Sorts keys from least to greatest.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ascending;

/// Sorts keys from greatest to least.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Descending;

/** A direction of sort.

# Usage

Radix-sort code is generic over `O: SortOrder`, and calls [`orient`] on every
sortable pattern it produces or consumes. The function is an involution, so
the same call maps patterns both into and out of the routed domain.

This trait cannot be implemented outside this crate.

[`orient`]: Self::orient
**/
pub trait SortOrder:
	'static + Copy + Debug + Default + Send + Sync + seal::Sealed
{
	/// Name of the ordering type, for use in text display.
	const TYPENAME: &'static str;

	/// Whether sortable patterns are complemented.
	const DESCENDING: bool;

	/// The runtime value of this ordering.
	const ORDER: Order;

	/// Complements a sortable pattern if the ordering is descending.
	///
	/// # Parameters
	///
	/// - `bits`: A sortable bit pattern, in either the ascending or the routed
	///   domain.
	///
	/// # Returns
	///
	/// `!bits` under [`Descending`], and `bits` under [`Ascending`]. Applying
	/// this twice is always the identity.
	#[inline(always)]
	fn orient<R>(bits: R) -> R
	where R: BitRegister {
		if Self::DESCENDING { !bits } else { bits }
	}
}

impl SortOrder for Ascending {
	const DESCENDING: bool = false;
	const ORDER: Order = Order::Ascending;
	const TYPENAME: &'static str = "Ascending";
}

impl SortOrder for Descending {
	const DESCENDING: bool = true;
	const ORDER: Order = Order::Descending;
	const TYPENAME: &'static str = "Descending";
}

/** The direction of a sort, chosen at runtime.

Each variant corresponds to one [`SortOrder`] implementor. The twiddle
operations on this type match on it once per call and forward to the
monomorphized form; code that twiddles many keys should match once itself and
run the generic form in its loop.
**/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
	/// See [`Ascending`].
	#[default]
	Ascending,
	/// See [`Descending`].
	Descending,
}

impl Order {
	/// Tests whether sortable patterns are complemented.
	#[inline]
	pub const fn is_descending(self) -> bool {
		matches!(self, Self::Descending)
	}

	/// Produces the opposite direction.
	#[inline]
	pub const fn reverse(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Complements a sortable pattern if the direction is descending.
	///
	/// This is the runtime form of [`SortOrder::orient`].
	#[inline]
	pub fn orient<R>(self, bits: R) -> R
	where R: BitRegister {
		match self {
			Self::Ascending => Ascending::orient(bits),
			Self::Descending => Descending::orient(bits),
		}
	}
}

impl From<Ascending> for Order {
	#[inline]
	fn from(_: Ascending) -> Self {
		Ascending::ORDER
	}
}

impl From<Descending> for Order {
	#[inline]
	fn from(_: Descending) -> Self {
		Descending::ORDER
	}
}

impl Display for Order {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str(match self {
			Self::Ascending => "ascending",
			Self::Descending => "descending",
		})
	}
}

#[doc(hidden)]
mod seal {
	#[doc(hidden)]
	pub trait Sealed {}

	impl Sealed for super::Ascending {}

	impl Sealed for super::Descending {}
}
