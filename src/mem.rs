/*! Descriptions of register types

This module describes the unsigned register types that carry key bit patterns.
It governs the way the processor manipulates values held in registers: the
width of the register, its sign bit, and how a contiguous window of bits is
read out of it as a radix digit.

Registers never interpret their contents. A register holds either the native bit
pattern of some key, or the sortable pattern produced from it, and only the
surrounding [`RadixKey`] and [`SortOrder`] types know which.

[`RadixKey`]: crate::key::RadixKey
[`SortOrder`]: crate::order::SortOrder
!*/

use core::{
	fmt::{
		Binary,
		Debug,
	},
	ops::{
		BitAnd,
		BitOr,
		BitXor,
		Not,
	},
};

use funty::Unsigned;

/** Description of a register type.

This trait provides information used for the manipulation of key bit patterns
in processor registers. It is implemented on all the unsigned integer
primitives, and on nothing else.

This trait cannot be implemented outside this crate.
**/
pub trait BitRegister:
	Unsigned
	+ Binary
	+ Debug
	+ Eq
	+ Ord
	+ Not<Output = Self>
	+ BitAnd<Output = Self>
	+ BitOr<Output = Self>
	+ BitXor<Output = Self>
	+ Send
	+ Sync
	+ 'static
	+ seal::Sealed
{
	/// The bit width of the register element.
	const WIDTH: u32;
	/// The value with none of its bits set.
	const EMPTY: Self;
	/// The value with all of its bits set to `1`.
	const ALL: Self;
	/// The value with only its most significant bit set to `1`.
	const SIGN: Self;

	/// Spreads the most significant bit across the whole register.
	///
	/// # Returns
	///
	/// [`Self::ALL`] if the sign bit of `self` is set, [`Self::EMPTY`]
	/// otherwise. This is an arithmetic shift, so it compiles without a branch.
	fn broadcast_sign(self) -> Self;

	/// Reads a digit by shifting the window down and masking it.
	///
	/// # Parameters
	///
	/// - `self`: The register to read.
	/// - `bit_start`: The distance of the window from the least significant
	///   bit. Distances of the full width or more read as zero.
	/// - `mask`: A low-order mask as produced by [`digit_mask`].
	///
	/// # Returns
	///
	/// `(self >> bit_start) & mask`, truncated to `u32`.
	///
	/// [`digit_mask`]: crate::mem::digit_mask
	fn shift_extract(self, bit_start: u32, mask: u32) -> u32;

	/// Reads a digit with a bit-field-extract instruction where the target has
	/// one.
	///
	/// On `x86_64` targets compiled with `bmi1`, this lowers to `bextr`. All
	/// other targets, and `u128` everywhere, use [`Self::shift_extract`]. The
	/// result is identical in every case.
	fn field_extract(self, bit_start: u32, num_bits: u32) -> u32;
}

macro_rules! register {
	($($t:ident => $s:ident),+ $(,)?) => { $(
		impl BitRegister for $t {
			const WIDTH: u32 = <$t>::BITS;
			const EMPTY: Self = 0;
			const ALL: Self = !0;
			const SIGN: Self = 1 << (<$t>::BITS - 1);

			#[inline(always)]
			fn broadcast_sign(self) -> Self {
				((self as $s) >> (<$t>::BITS - 1)) as $t
			}

			#[inline(always)]
			fn shift_extract(self, bit_start: u32, mask: u32) -> u32 {
				(self.checked_shr(bit_start).unwrap_or(0) as u32) & mask
			}

			#[inline(always)]
			fn field_extract(self, bit_start: u32, num_bits: u32) -> u32 {
				bfe::$t(self, bit_start, num_bits)
			}
		}

		impl seal::Sealed for $t {}
	)+ };
}

register!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128);
register!(usize => isize);

/** Computes the mask selecting the low `num_bits` bits of a digit.

# Parameters

- `num_bits`: The digit width, in `0 ..= 32`.

# Returns

`2^num_bits - 1`. A width of 32 produces `u32::MAX` rather than overflowing.
**/
#[inline(always)]
pub const fn digit_mask(num_bits: u32) -> u32 {
	match 1u32.checked_shl(num_bits) {
		Some(bit) => bit - 1,
		None => u32::MAX,
	}
}

/// Bit-field extraction, per register width.
mod bfe {
	#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
	use core::arch::x86_64::{
		_bextr_u32,
		_bextr_u64,
	};

	#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi1")))]
	use super::{
		digit_mask,
		BitRegister,
	};

	#[inline(always)]
	#[allow(unused_unsafe)]
	#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
	pub fn u32(value: u32, bit_start: u32, num_bits: u32) -> u32 {
		//  SAFETY: the whole compilation target enables `bmi1`.
		unsafe {
			_bextr_u32(value, bit_start, num_bits)
		}
	}

	#[inline(always)]
	#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi1")))]
	pub fn u32(value: u32, bit_start: u32, num_bits: u32) -> u32 {
		value.shift_extract(bit_start, digit_mask(num_bits))
	}

	#[inline(always)]
	#[allow(unused_unsafe)]
	#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
	pub fn u64(value: u64, bit_start: u32, num_bits: u32) -> u32 {
		//  SAFETY: the whole compilation target enables `bmi1`.
		unsafe {
			_bextr_u64(value, bit_start, num_bits) as u32
		}
	}

	#[inline(always)]
	#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi1")))]
	pub fn u64(value: u64, bit_start: u32, num_bits: u32) -> u32 {
		value.shift_extract(bit_start, digit_mask(num_bits))
	}

	//  Narrow registers zero-extend, so windows past their top read zero.
	#[inline(always)]
	pub fn u8(value: u8, bit_start: u32, num_bits: u32) -> u32 {
		u32(value as u32, bit_start, num_bits)
	}

	#[inline(always)]
	pub fn u16(value: u16, bit_start: u32, num_bits: u32) -> u32 {
		u32(value as u32, bit_start, num_bits)
	}

	#[inline(always)]
	pub fn u128(value: u128, bit_start: u32, num_bits: u32) -> u32 {
		super::BitRegister::shift_extract(
			value,
			bit_start,
			super::digit_mask(num_bits),
		)
	}

	#[inline(always)]
	#[cfg(target_pointer_width = "64")]
	pub fn usize(value: usize, bit_start: u32, num_bits: u32) -> u32 {
		u64(value as u64, bit_start, num_bits)
	}

	#[inline(always)]
	#[cfg(not(target_pointer_width = "64"))]
	pub fn usize(value: usize, bit_start: u32, num_bits: u32) -> u32 {
		super::BitRegister::shift_extract(
			value,
			bit_start,
			super::digit_mask(num_bits),
		)
	}
}

#[doc(hidden)]
mod seal {
	#[doc(hidden)]
	pub trait Sealed {}
}
