/*! Order-aware key twiddling

[`RadixSortTwiddle`] composes the per-type twiddle of a [`RadixKey`] with the
complement of a [`SortOrder`]. Its output is the pattern a radix sort actually
routes: ascending unsigned order on it is the requested order on the keys.

The composition is not commutative for every key type, so the two directions
apply their steps in mirrored order:

```text
twiddle_in:   raw ── K::twiddle_in ──▶ ── O::orient ──▶ routed
twiddle_out:  raw ◀── K::twiddle_out ── ◀── O::orient ── routed
```

[`RadixKey`]: crate::key::RadixKey
[`SortOrder`]: crate::order::SortOrder
!*/

use core::marker::PhantomData;

use tap::Pipe;

use crate::{
	key::RadixKey,
	order::{
		Ascending,
		Descending,
		Order,
		SortOrder,
	},
};

/** Twiddles keys of type `K` for a radix sort in direction `O`.

This type is never constructed. It only namespaces the three operations, so
that kernels can name one `RadixSortTwiddle<O, K>` and pass it around as a type
parameter.

# Type Parameters

- `O`: The sort direction.
- `K`: The key type.

# Examples

```rust
use radix_twiddle::prelude::*;

type Desc = RadixSortTwiddle<Descending, i32>;

let routed = [3i32, -7, 0].map(Desc::encode);
assert!(routed[0] < routed[2]);
assert!(routed[2] < routed[1]);
assert_eq!(Desc::decode(routed[1]), -7);
```
**/
pub struct RadixSortTwiddle<O, K>
where
	O: SortOrder,
	K: RadixKey,
{
	_order: PhantomData<O>,
	_key: PhantomData<K>,
}

impl<O, K> RadixSortTwiddle<O, K>
where
	O: SortOrder,
	K: RadixKey,
{
	/// Maps a raw key pattern into the routed domain.
	///
	/// # Parameters
	///
	/// - `raw`: The native bit pattern of a key.
	///
	/// # Returns
	///
	/// A pattern whose unsigned order is the `O` order of the keys.
	#[inline(always)]
	pub fn twiddle_in(raw: K::Bits) -> K::Bits {
		K::twiddle_in(raw).pipe(O::orient::<K::Bits>)
	}

	/// Maps a routed pattern back to the raw key pattern.
	///
	/// The complement comes first, then the key twiddle, so this undoes
	/// [`Self::twiddle_in`] exactly.
	#[inline(always)]
	pub fn twiddle_out(routed: K::Bits) -> K::Bits {
		O::orient(routed).pipe(K::twiddle_out)
	}

	/// The raw pattern of the padding sentinel.
	///
	/// Its routed pattern is all ones, so it ranks at or after every real key
	/// in the `O` order. Kernels load it into lanes past the end of the input.
	#[inline(always)]
	pub fn default_key() -> K::Bits {
		//  The complement of all ones is zero.
		if O::DESCENDING { K::lowest_key() } else { K::max_key() }
	}

	/// Reinterprets a key and maps it into the routed domain.
	#[inline(always)]
	pub fn encode(key: K) -> K::Bits {
		key.to_bits().pipe(Self::twiddle_in)
	}

	/// Maps a routed pattern back out and reinterprets it as a key.
	#[inline(always)]
	pub fn decode(routed: K::Bits) -> K {
		Self::twiddle_out(routed).pipe(K::from_bits)
	}
}

/// Runtime-direction forms of the [`RadixSortTwiddle`] operations.
impl Order {
	/// See [`RadixSortTwiddle::twiddle_in`].
	#[inline]
	pub fn twiddle_in<K>(self, raw: K::Bits) -> K::Bits
	where K: RadixKey {
		match self {
			Self::Ascending => RadixSortTwiddle::<Ascending, K>::twiddle_in(raw),
			Self::Descending => {
				RadixSortTwiddle::<Descending, K>::twiddle_in(raw)
			},
		}
	}

	/// See [`RadixSortTwiddle::twiddle_out`].
	#[inline]
	pub fn twiddle_out<K>(self, routed: K::Bits) -> K::Bits
	where K: RadixKey {
		match self {
			Self::Ascending => {
				RadixSortTwiddle::<Ascending, K>::twiddle_out(routed)
			},
			Self::Descending => {
				RadixSortTwiddle::<Descending, K>::twiddle_out(routed)
			},
		}
	}

	/// See [`RadixSortTwiddle::default_key`].
	#[inline]
	pub fn default_key<K>(self) -> K::Bits
	where K: RadixKey {
		match self {
			Self::Ascending => RadixSortTwiddle::<Ascending, K>::default_key(),
			Self::Descending => RadixSortTwiddle::<Descending, K>::default_key(),
		}
	}
}
