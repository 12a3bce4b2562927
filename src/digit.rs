/*! Digit extraction

Each pass of a radix sort buckets keys by one window of their routed bit
pattern. The extractors in this module read that window as a small integer.

# Negative zero

IEEE floats have two zeros, `-0.0` and `+0.0`, which compare equal but have
different bit patterns. Twiddling maps them to adjacent patterns:

```text
         raw (f32)    twiddled     complemented
-0.0     0x8000_0000  0x7FFF_FFFF  0x8000_0000
+0.0     0x0000_0000  0x8000_0000  0x7FFF_FFFF
```

Adjacent patterns differ in every bit, so the two zeros would fall into
different buckets at every pass. Before any window is read, the extractors
replace the twiddled `-0.0` pattern with the twiddled `+0.0` pattern. In an
ascending sort both zeros are then routed as `+0.0`; in a descending sort, the
complemented `+0.0` is the twiddled `-0.0` pattern and is rewritten, so both
zeros are routed as the complemented `-0.0`. Either way, they share every
digit.

The fix-up is applied on each read and keeps no state, so it does not matter
how many passes a sort makes or in what order.
!*/

use core::{
	any,
	fmt::{
		self,
		Debug,
		Formatter,
	},
	marker::PhantomData,
};

use wyz::fmt::FmtForward;

use crate::{
	key::RadixKey,
	mem::{
		self,
		BitRegister,
	},
	window::DigitWindow,
};

/** Collapses the two float zeros onto one routed pattern.

# Type Parameters

- `K`: The key type. For non-float keys this function is the identity.

# Parameters

- `routed`: A twiddled key pattern, complemented or not.

# Returns

The twiddled `+0.0` pattern if `routed` is the twiddled `-0.0` pattern, and
`routed` otherwise.
**/
#[inline(always)]
pub fn process_float_minus_zero<K>(routed: K::Bits) -> K::Bits
where K: RadixKey {
	if !K::FLOAT_KEY {
		return routed;
	}

	let twiddled_minus_zero = K::twiddle_in(<K::Bits as BitRegister>::SIGN);
	let twiddled_zero = K::twiddle_in(<K::Bits as BitRegister>::EMPTY);
	if routed == twiddled_minus_zero {
		twiddled_zero
	}
	else {
		routed
	}
}

/** Reads radix digits out of routed key patterns.

Implementors are configured with one digit window, and read the same window
from every key they are given.
**/
pub trait DigitExtractor<K>
where K: RadixKey
{
	/// Reads the digit of a routed key pattern.
	///
	/// # Parameters
	///
	/// - `&self`
	/// - `routed`: A key pattern produced by a [`RadixSortTwiddle`].
	///
	/// # Returns
	///
	/// The bits of the window, after the negative-zero fix-up, shifted down to
	/// the least significant end. The value is below [`Self::radix_size`].
	///
	/// [`RadixSortTwiddle`]: crate::twiddle::RadixSortTwiddle
	fn digit(&self, routed: K::Bits) -> u32;

	/// The distance of the window from the least significant bit.
	fn bit_start(&self) -> u32;

	/// The width of the window.
	fn num_bits(&self) -> u32;

	/// The number of distinct digits, and so of buckets in a pass.
	#[inline]
	fn radix_size(&self) -> u64 {
		u64::from(mem::digit_mask(self.num_bits())) + 1
	}

	/// The window the extractor reads.
	#[inline]
	fn window(&self) -> DigitWindow {
		DigitWindow::from_parts(self.bit_start(), self.num_bits())
	}
}

/** Extracts digits with a shift and a mask.

This is the portable baseline. It stores the window start and a precomputed
mask, so a read is one shift and one `and` after the negative-zero compare.

# Validity

The window must satisfy `num_bits <= 32` and
`bit_start + num_bits <= K::Bits::WIDTH`. Debug builds assert this on
construction; release builds do not check, and produce unspecified digits for
windows that violate it. Use [`DigitWindow::new`] to validate windows that come
from outside the kernel.
**/
pub struct ShiftDigitExtractor<K>
where K: RadixKey
{
	bit_start: u32,
	mask: u32,
	_key: PhantomData<K>,
}

impl<K> ShiftDigitExtractor<K>
where K: RadixKey
{
	/// Creates an extractor for the window `bit_start .. bit_start + num_bits`.
	#[inline]
	pub fn new(bit_start: u32, num_bits: u32) -> Self {
		debug_window::<K>(bit_start, num_bits);
		Self {
			bit_start,
			mask: mem::digit_mask(num_bits),
			_key: PhantomData,
		}
	}

	/// The mask applied after the shift.
	#[inline]
	pub fn mask(&self) -> u32 {
		self.mask
	}
}

impl<K> DigitExtractor<K> for ShiftDigitExtractor<K>
where K: RadixKey
{
	#[inline(always)]
	fn digit(&self, routed: K::Bits) -> u32 {
		process_float_minus_zero::<K>(routed)
			.shift_extract(self.bit_start, self.mask)
	}

	#[inline]
	fn bit_start(&self) -> u32 {
		self.bit_start
	}

	#[inline]
	fn num_bits(&self) -> u32 {
		self.mask.count_ones()
	}
}

/** Extracts digits with a bit-field-extract instruction.

On `x86_64` targets built with the `bmi1` feature, each read is one `bextr`
after the negative-zero compare. Elsewhere it falls back to shift-and-mask. It
always produces the same digits as [`ShiftDigitExtractor`].

# Validity

As for [`ShiftDigitExtractor`].
**/
pub struct BfeDigitExtractor<K>
where K: RadixKey
{
	bit_start: u32,
	num_bits: u32,
	_key: PhantomData<K>,
}

impl<K> BfeDigitExtractor<K>
where K: RadixKey
{
	/// Creates an extractor for the window `bit_start .. bit_start + num_bits`.
	#[inline]
	pub fn new(bit_start: u32, num_bits: u32) -> Self {
		debug_window::<K>(bit_start, num_bits);
		Self {
			bit_start,
			num_bits,
			_key: PhantomData,
		}
	}
}

impl<K> DigitExtractor<K> for BfeDigitExtractor<K>
where K: RadixKey
{
	#[inline(always)]
	fn digit(&self, routed: K::Bits) -> u32 {
		process_float_minus_zero::<K>(routed)
			.field_extract(self.bit_start, self.num_bits)
	}

	#[inline]
	fn bit_start(&self) -> u32 {
		self.bit_start
	}

	#[inline]
	fn num_bits(&self) -> u32 {
		self.num_bits
	}
}

macro_rules! extractor_traits {
	($($ext:ident),+ $(,)?) => { $(
		impl<K> Clone for $ext<K>
		where K: RadixKey
		{
			#[inline]
			fn clone(&self) -> Self {
				*self
			}
		}

		impl<K> Copy for $ext<K> where K: RadixKey
		{
		}

		/// An empty window at bit zero. Every digit it reads is `0`.
		impl<K> Default for $ext<K>
		where K: RadixKey
		{
			#[inline]
			fn default() -> Self {
				Self::new(0, 0)
			}
		}

		impl<K> From<DigitWindow> for $ext<K>
		where K: RadixKey
		{
			#[inline]
			fn from(window: DigitWindow) -> Self {
				Self::new(window.bit_start(), window.num_bits())
			}
		}

		impl<K> PartialEq for $ext<K>
		where K: RadixKey
		{
			#[inline]
			fn eq(&self, other: &Self) -> bool {
				self.bit_start() == other.bit_start()
					&& self.num_bits() == other.num_bits()
			}
		}

		impl<K> Eq for $ext<K> where K: RadixKey
		{
		}

		impl<K> Debug for $ext<K>
		where K: RadixKey
		{
			fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
				fmt.debug_struct(stringify!($ext))
					.field("key", &any::type_name::<K>().fmt_display())
					.field("bit_start", &self.bit_start())
					.field("num_bits", &self.num_bits())
					.field("mask", &mem::digit_mask(self.num_bits()).fmt_binary())
					.finish()
			}
		}
	)+ };
}

extractor_traits!(ShiftDigitExtractor, BfeDigitExtractor);

/// Asserts the extractor window contract in debug builds.
#[inline(always)]
fn debug_window<K>(bit_start: u32, num_bits: u32)
where K: RadixKey {
	debug_assert!(
		num_bits <= DigitWindow::MAX_BITS,
		"Digit width {} cannot exceed {} bits",
		num_bits,
		DigitWindow::MAX_BITS,
	);
	debug_assert!(
		bit_start.saturating_add(num_bits) <= <K::Bits as BitRegister>::WIDTH,
		"Digit window {} .. {} exceeds the {}-bit key {}",
		bit_start,
		bit_start.saturating_add(num_bits),
		<K::Bits as BitRegister>::WIDTH,
		any::type_name::<K>(),
	);
}
