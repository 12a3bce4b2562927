/*! `radix-twiddle` – sortable bit patterns for radix sorts.

A radix sort never compares keys. It routes each key into a bucket named by one
digit of an unsigned integer, pass after pass, and relies on the unsigned order
of those integers being the order the caller asked for. This crate supplies the
two bit-exact pieces that make that true for arbitrary key types:

- [`RadixSortTwiddle`] maps the native bit pattern of a key (an unsigned or
  signed integer, or an IEEE float) to a *routed* pattern, whose unsigned order
  is the requested ascending or descending order, and maps it back again.
- [`ShiftDigitExtractor`] and [`BfeDigitExtractor`] read one digit window of a
  routed pattern. Before reading, they fold float `-0.0` onto `+0.0`, so that
  equal keys always share a bucket.

Everything here is a pure function of its inputs. Nothing allocates, nothing
locks, and every operation is meant to be inlined into the per-key loop of a
kernel. Kernel launch, histograms, ranking, and data movement all belong to the
caller.

# Example

A least-significant-digit sort over `f32` keys, descending:

```rust
use radix_twiddle::prelude::*;

type Twiddle = RadixSortTwiddle<Descending, f32>;

let keys = [1.5f32, -0.0, -3.0, 0.0, 8.25, -0.5];
let mut routed = keys.map(Twiddle::encode).to_vec();

for window in DigitWindow::passes::<f32>(0, 32, 8).unwrap() {
  let ext = ShiftDigitExtractor::<f32>::from(window);
  let mut buckets = vec![Vec::new(); ext.radix_size() as usize];
  for bits in routed.drain(..) {
    buckets[ext.digit(bits) as usize].push(bits);
  }
  routed = buckets.concat();
}

let sorted = routed.into_iter().map(Twiddle::decode).collect::<Vec<_>>();
assert_eq!(sorted, [8.25, 1.5, -0.0, 0.0, -0.5, -3.0]);
```

Both zeros share every digit, so the sort is stable across them and they keep
their input order.

# Features

- `std` (default): implements `std::error::Error` for [`DigitWindowError`].
- `serde`: (de)serialization of [`Order`] and [`DigitWindow`], for callers that
  keep sort plans in configuration.
- `half`: `half::f16` and `half::bf16` keys.

[`BfeDigitExtractor`]: crate::digit::BfeDigitExtractor
[`DigitWindow`]: crate::window::DigitWindow
[`DigitWindowError`]: crate::window::DigitWindowError
[`Order`]: crate::order::Order
[`RadixSortTwiddle`]: crate::twiddle::RadixSortTwiddle
[`ShiftDigitExtractor`]: crate::digit::ShiftDigitExtractor
!*/

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

pub mod digit;
pub mod key;
pub mod mem;
pub mod order;
pub mod prelude;
pub mod twiddle;
pub mod window;
