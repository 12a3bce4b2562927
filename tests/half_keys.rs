/*! Half-precision keys. !*/

#![cfg(feature = "half")]

use half::{
	bf16,
	f16,
};
use radix_twiddle::prelude::*;

#[test]
fn f16_order() {
	let keys = [
		f16::NEG_INFINITY,
		f16::MIN,
		f16::from_f32(-1.0),
		f16::NEG_ZERO,
		f16::MIN_POSITIVE_SUBNORMAL,
		f16::ONE,
		f16::MAX,
		f16::INFINITY,
	];
	let routed = keys.map(RadixSortTwiddle::<Ascending, f16>::encode);
	for pair in routed.windows(2) {
		assert!(pair[0] < pair[1]);
	}
	let routed = keys.map(RadixSortTwiddle::<Descending, f16>::encode);
	for pair in routed.windows(2) {
		assert!(pair[0] > pair[1]);
	}
}

#[test]
fn half_round_trip() {
	for raw in 0 ..= u16::MAX {
		assert_eq!(
			RadixSortTwiddle::<Descending, f16>::twiddle_out(
				RadixSortTwiddle::<Descending, f16>::twiddle_in(raw)
			),
			raw
		);
		assert_eq!(
			RadixSortTwiddle::<Ascending, bf16>::twiddle_out(
				RadixSortTwiddle::<Ascending, bf16>::twiddle_in(raw)
			),
			raw
		);
	}
}

#[test]
fn half_zeros_share_digits() {
	assert!(<f16 as RadixKey>::FLOAT_KEY);
	assert!(<bf16 as RadixKey>::FLOAT_KEY);
	for start in 0 ..= 16 {
		for bits in 0 ..= 16 - start {
			let ext = ShiftDigitExtractor::<bf16>::new(start, bits);
			assert_eq!(
				ext.digit(RadixSortTwiddle::<Ascending, bf16>::encode(bf16::NEG_ZERO)),
				ext.digit(RadixSortTwiddle::<Ascending, bf16>::encode(bf16::ZERO)),
			);
			let ext = BfeDigitExtractor::<f16>::new(start, bits);
			assert_eq!(
				ext.digit(RadixSortTwiddle::<Descending, f16>::encode(f16::NEG_ZERO)),
				ext.digit(RadixSortTwiddle::<Descending, f16>::encode(f16::ZERO)),
			);
		}
	}
}
