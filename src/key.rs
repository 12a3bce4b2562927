/*! Radix keys

A radix sort cannot compare keys; it can only route them by the digits of an
unsigned integer. This module describes, for each supported key type, the
unsigned register of identical width that carries its bits, and the pair of
monotonic transforms between the native bit pattern and a *sortable* pattern
whose unsigned order matches the native ascending order of the keys.

The transforms depend only on the category of the key:

- unsigned integers (and `bool`) are already sortable, and pass through;
- signed integers flip the sign bit, so two’s-complement order becomes unsigned
  order;
- IEEE floats flip the sign bit of positive values and every bit of negative
  values, so negative magnitudes run backwards and sit below all positives.

```text
                raw (f32)        sortable
-1.0         1_01111111_0…0   0_10000000_1…1   flip all bits
-0.0         1_00000000_0…0   0_11111111_1…1
+0.0         0_00000000_0…0   1_00000000_0…0   flip the sign bit
+1.0         0_01111111_0…0   1_01111111_0…0
```

NaN patterns are carried through like any other pattern: they land below
`-∞` or above `+∞` according to their sign bit, and have no further ordering
guarantee.
!*/

use crate::mem::BitRegister;

/** The category of a key type.

This selects which twiddle the key uses, and whether the negative-zero fix-up
applies to its digits.
**/
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyKind {
	/// Unsigned integers. Their bit pattern already sorts correctly.
	Unsigned,
	/// Two’s-complement signed integers.
	Signed,
	/// IEEE-754 binary floating-point numbers.
	Float,
}

/** A key type that a radix sort can route by digits.

Implementors are fixed-width values whose bits can be reinterpreted, not
converted, as an unsigned register of the same width.

This trait cannot be implemented outside this crate.
**/
pub trait RadixKey: Copy + seal::Sealed {
	/// The unsigned register of identical width.
	type Bits: BitRegister;

	/// The category of the key type.
	const KIND: KeyKind;

	/// Whether the key type is floating-point, and so has two zeros.
	const FLOAT_KEY: bool = matches!(Self::KIND, KeyKind::Float);

	/// Reinterprets a key as its raw bit pattern.
	fn to_bits(self) -> Self::Bits;

	/// Reinterprets a raw bit pattern as a key.
	fn from_bits(bits: Self::Bits) -> Self;

	/// Maps a raw bit pattern to its sortable bit pattern.
	///
	/// For any two keys `a` and `b` that are not NaN, `a < b` if and only if
	/// `twiddle_in(a.to_bits()) < twiddle_in(b.to_bits())`. The two float
	/// zeros are the exception: they compare equal, but remain adjacent and
	/// distinct patterns here.
	#[inline(always)]
	fn twiddle_in(bits: Self::Bits) -> Self::Bits {
		let sign = <Self::Bits as BitRegister>::SIGN;
		match Self::KIND {
			KeyKind::Unsigned => bits,
			KeyKind::Signed => bits ^ sign,
			//  Negative: flip everything. Positive: flip the sign.
			KeyKind::Float => bits ^ (bits.broadcast_sign() | sign),
		}
	}

	/// Maps a sortable bit pattern back to its raw bit pattern.
	///
	/// This is the exact inverse of [`Self::twiddle_in`] on every pattern.
	#[inline(always)]
	fn twiddle_out(bits: Self::Bits) -> Self::Bits {
		let sign = <Self::Bits as BitRegister>::SIGN;
		match Self::KIND {
			KeyKind::Unsigned => bits,
			KeyKind::Signed => bits ^ sign,
			//  A clear top bit marks a key that was negative.
			KeyKind::Float => bits ^ (!bits.broadcast_sign() | sign),
		}
	}

	/// The raw pattern whose sortable pattern is zero.
	///
	/// This is `MIN` for integers, and the all-ones negative NaN for floats. It
	/// ranks before every other key ascending, and so is the padding key of a
	/// descending sort.
	#[inline]
	fn lowest_key() -> Self::Bits {
		Self::twiddle_out(<Self::Bits as BitRegister>::EMPTY)
	}

	/// The raw pattern whose sortable pattern is all ones.
	///
	/// This is `MAX` for integers, and the largest positive NaN for floats. It
	/// is the padding key of an ascending sort.
	#[inline]
	fn max_key() -> Self::Bits {
		Self::twiddle_out(<Self::Bits as BitRegister>::ALL)
	}
}

macro_rules! key {
	(unsigned: $($t:ty),+ $(,)?) => { $(
		key!(@impl $t => $t, Unsigned, |key: $t| key, |bits: $t| bits);
	)+ };
	(signed: $($t:ty => $u:ty),+ $(,)?) => { $(
		key!(@impl $t => $u, Signed, |key: $t| key as $u, |bits: $u| bits as $t);
	)+ };
	(float: $($t:ty => $u:ty),+ $(,)?) => { $(
		key!(@impl $t => $u, Float, <$t>::to_bits, <$t>::from_bits);
	)+ };
	(@impl $t:ty => $u:ty, $kind:ident, $to:expr, $from:expr) => {
		impl RadixKey for $t {
			type Bits = $u;

			const KIND: KeyKind = KeyKind::$kind;

			#[inline(always)]
			fn to_bits(self) -> $u {
				($to)(self)
			}

			#[inline(always)]
			fn from_bits(bits: $u) -> Self {
				($from)(bits)
			}
		}

		impl seal::Sealed for $t {}
	};
}

key!(unsigned: u8, u16, u32, u64, u128, usize);
key!(signed: i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128);
key!(signed: isize => usize);
key!(float: f32 => u32, f64 => u64);

#[cfg(feature = "half")]
key!(float: half::f16 => u16, half::bf16 => u16);

//  `bool` is stored as one byte, so only `0` and `1` are meaningful patterns.
key!(@impl bool => u8, Unsigned, |key: bool| key as u8, |bits: u8| bits != 0);

#[doc(hidden)]
mod seal {
	#[doc(hidden)]
	pub trait Sealed {}
}
