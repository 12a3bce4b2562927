/*! Digit windows and pass planning.

A [`DigitWindow`] names the contiguous run of bits that one radix pass reads
from a routed key pattern. The digit extractors accept windows without checking
them, because they sit in the innermost loop of a kernel. This module is the
place where windows that come from configuration or from user input are checked
against a key type, once, before a sort starts.

[`DigitWindows`] walks a bit range in fixed-size steps, producing the window
for each pass. It walks least-significant-first, and reverses to walk
most-significant-first. The step size is chosen by the caller.
!*/

use core::{
	any,
	fmt::{
		self,
		Display,
		Formatter,
	},
	iter::FusedIterator,
	marker::PhantomData,
};

#[cfg(feature = "serde")]
use serde::{
	Deserialize,
	Serialize,
};

use crate::{
	key::RadixKey,
	mem::{
		self,
		BitRegister,
	},
};

/** A contiguous run of bits in a routed key pattern.

# Validity

A window is valid for key type `K` when `num_bits <= 32` and
`bit_start + num_bits <= K::Bits::WIDTH`. Windows built by [`Self::new`] and
[`Self::passes`] are always valid for the key type they were built against.

Deserialized windows have not been checked against any key type. Pass them
through [`Self::check`] before use.
**/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitWindow {
	/// Distance of the window from the least significant bit.
	bit_start: u32,
	/// Width of the window.
	num_bits: u32,
}

impl DigitWindow {
	/// The widest digit that can be returned as a `u32`.
	pub const MAX_BITS: u32 = 32;

	/// Creates a window checked against the key type `K`.
	///
	/// # Type Parameters
	///
	/// - `K`: The key type whose routed patterns the window will read.
	///
	/// # Parameters
	///
	/// - `bit_start`: The distance of the window from the least significant
	///   bit.
	/// - `num_bits`: The width of the window.
	///
	/// # Returns
	///
	/// The window, or an error naming the bound it violates.
	#[inline]
	pub fn new<K>(bit_start: u32, num_bits: u32) -> Result<Self, DigitWindowError>
	where K: RadixKey {
		Self::from_parts(bit_start, num_bits).check::<K>()
	}

	/// Checks a window against the key type `K`.
	pub fn check<K>(self) -> Result<Self, DigitWindowError>
	where K: RadixKey {
		let width = <K::Bits as BitRegister>::WIDTH;
		if self.num_bits > Self::MAX_BITS {
			return Err(DigitWindowError::TooWide {
				num_bits: self.num_bits,
			});
		}
		match self.bit_start.checked_add(self.num_bits) {
			Some(end_bit) if end_bit <= width => Ok(self),
			end_bit => Err(DigitWindowError::OutOfRange {
				end_bit: end_bit.unwrap_or(u32::MAX),
				width,
				key: any::type_name::<K>(),
			}),
		}
	}

	/// Plans the passes of a sort over `begin_bit .. end_bit`.
	///
	/// # Type Parameters
	///
	/// - `K`: The key type being sorted.
	///
	/// # Parameters
	///
	/// - `begin_bit`: The least significant bit that the sort orders by.
	/// - `end_bit`: One past the most significant bit that the sort orders by.
	/// - `radix_bits`: The width of each pass. The final pass is narrowed to the
	///   bits that remain.
	///
	/// # Returns
	///
	/// An iterator over one window per pass, least-significant-first. An empty
	/// range produces no passes.
	///
	/// # Examples
	///
	/// ```rust
	/// use radix_twiddle::window::DigitWindow;
	///
	/// let widths = DigitWindow::passes::<u32>(0, 32, 11)
	///   .unwrap()
	///   .map(|w| (w.bit_start(), w.num_bits()))
	///   .collect::<Vec<_>>();
	/// assert_eq!(widths, [(0, 11), (11, 11), (22, 10)]);
	/// ```
	pub fn passes<K>(
		begin_bit: u32,
		end_bit: u32,
		radix_bits: u32,
	) -> Result<DigitWindows<K>, DigitWindowError>
	where
		K: RadixKey,
	{
		let width = <K::Bits as BitRegister>::WIDTH;
		if radix_bits == 0 {
			return Err(DigitWindowError::EmptyRadix);
		}
		if radix_bits > DigitWindow::MAX_BITS {
			return Err(DigitWindowError::TooWide {
				num_bits: radix_bits,
			});
		}
		if begin_bit > end_bit {
			return Err(DigitWindowError::Reversed { begin_bit, end_bit });
		}
		if end_bit > width {
			return Err(DigitWindowError::OutOfRange {
				end_bit,
				width,
				key: any::type_name::<K>(),
			});
		}

		let span = end_bit - begin_bit;
		Ok(DigitWindows {
			begin_bit,
			end_bit,
			radix_bits,
			front: 0,
			back: (span + radix_bits - 1) / radix_bits,
			_key: PhantomData,
		})
	}

	/// Assembles a window without checking it.
	#[inline(always)]
	pub(crate) const fn from_parts(bit_start: u32, num_bits: u32) -> Self {
		Self {
			bit_start,
			num_bits,
		}
	}

	/// The distance of the window from the least significant bit.
	#[inline]
	pub const fn bit_start(&self) -> u32 {
		self.bit_start
	}

	/// The width of the window.
	#[inline]
	pub const fn num_bits(&self) -> u32 {
		self.num_bits
	}

	/// One past the most significant bit of the window.
	#[inline]
	pub const fn end_bit(&self) -> u32 {
		self.bit_start.saturating_add(self.num_bits)
	}

	/// The mask that selects a digit after it is shifted down.
	#[inline]
	pub const fn mask(&self) -> u32 {
		mem::digit_mask(self.num_bits)
	}

	/// The number of distinct digits in the window.
	///
	/// Windows wider than [`Self::MAX_BITS`] read at most 32 bits, so they
	/// have `2^32` digits, the same as a full-width window.
	#[inline]
	pub const fn radix_size(&self) -> u64 {
		self.mask() as u64 + 1
	}
}

impl Display for DigitWindow {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "[{} .. {})", self.bit_start, self.end_bit())
	}
}

/** The windows of successive radix passes.

Produced by [`DigitWindow::passes`]. Every window it yields is valid for `K`.
**/
#[derive(Clone, Debug)]
pub struct DigitWindows<K>
where K: RadixKey
{
	begin_bit: u32,
	end_bit: u32,
	radix_bits: u32,
	/// Index of the next pass from the front.
	front: u32,
	/// One past the index of the next pass from the back.
	back: u32,
	_key: PhantomData<K>,
}

impl<K> DigitWindows<K>
where K: RadixKey
{
	/// Produces the window of pass number `pass`.
	#[inline]
	fn window(&self, pass: u32) -> DigitWindow {
		let bit_start = self.begin_bit + pass * self.radix_bits;
		let num_bits = self.radix_bits.min(self.end_bit - bit_start);
		DigitWindow::from_parts(bit_start, num_bits)
	}
}

impl<K> Iterator for DigitWindows<K>
where K: RadixKey
{
	type Item = DigitWindow;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}
		let out = self.window(self.front);
		self.front += 1;
		Some(out)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = (self.back - self.front) as usize;
		(len, Some(len))
	}
}

impl<K> DoubleEndedIterator for DigitWindows<K>
where K: RadixKey
{
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}
		self.back -= 1;
		Some(self.window(self.back))
	}
}

impl<K> ExactSizeIterator for DigitWindows<K> where K: RadixKey
{
}

impl<K> FusedIterator for DigitWindows<K> where K: RadixKey
{
}

/// An error produced when a digit window does not fit its key type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DigitWindowError {
	/// The window is wider than a `u32` digit.
	TooWide {
		/// The requested width.
		num_bits: u32,
	},
	/// The window reaches past the top of the key.
	OutOfRange {
		/// One past the most significant bit requested.
		end_bit: u32,
		/// The width of the key.
		width: u32,
		/// The name of the key type.
		key: &'static str,
	},
	/// A pass plan ends before it begins.
	Reversed {
		/// The requested least significant bit.
		begin_bit: u32,
		/// The requested end of the range.
		end_bit: u32,
	},
	/// A pass plan has zero-width passes, and would never finish.
	EmptyRadix,
}

impl Display for DigitWindowError {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		match *self {
			Self::TooWide { num_bits } => write!(
				fmt,
				"Digit width {} cannot exceed {} bits",
				num_bits,
				DigitWindow::MAX_BITS,
			),
			Self::OutOfRange {
				end_bit,
				width,
				key,
			} => write!(
				fmt,
				"Bit {} is past the end of the {}-bit key {}",
				end_bit, width, key,
			),
			Self::Reversed { begin_bit, end_bit } => write!(
				fmt,
				"Bit range {} .. {} ends before it begins",
				begin_bit, end_bit,
			),
			Self::EmptyRadix => fmt.write_str("Radix passes cannot be empty"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for DigitWindowError {
}

#[cfg(test)]
mod tests;
