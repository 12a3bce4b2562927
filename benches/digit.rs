/*! Per-key cost of the routing step.

Every key passes through one `twiddle_in` and one digit read per pass, so these
are the only operations worth measuring. Inputs go through `black_box` so that
the compiler cannot fold the twiddle of a constant key.
!*/

#![cfg(feature = "std")]

use criterion::{
	black_box,
	criterion_group,
	criterion_main,
	BenchmarkId,
	Criterion,
	Throughput,
};
use radix_twiddle::prelude::*;

const KEYS: usize = 4096;

fn keys_f32() -> Vec<f32> {
	(0 .. KEYS as u32)
		.map(|n| f32::from_bits(n.wrapping_mul(0x9E37_79B9)))
		.collect()
}

fn keys_i64() -> Vec<i64> {
	(0 .. KEYS as u64)
		.map(|n| n.wrapping_mul(0x9E37_79B9_7F4A_7C15) as i64)
		.collect()
}

fn twiddle(c: &mut Criterion) {
	let mut group = c.benchmark_group("twiddle");
	group.throughput(Throughput::Elements(KEYS as u64));

	let floats = keys_f32();
	group.bench_function("f32 ascending", |b| {
		b.iter(|| {
			black_box(&floats)
				.iter()
				.map(|&k| RadixSortTwiddle::<Ascending, f32>::encode(k))
				.fold(0u32, |acc, bits| acc ^ bits)
		})
	});
	group.bench_function("f32 descending", |b| {
		b.iter(|| {
			black_box(&floats)
				.iter()
				.map(|&k| RadixSortTwiddle::<Descending, f32>::encode(k))
				.fold(0u32, |acc, bits| acc ^ bits)
		})
	});

	let ints = keys_i64();
	group.bench_function("i64 descending", |b| {
		b.iter(|| {
			black_box(&ints)
				.iter()
				.map(|&k| RadixSortTwiddle::<Descending, i64>::encode(k))
				.fold(0u64, |acc, bits| acc ^ bits)
		})
	});
	group.finish();
}

fn extract<E>(ext: E, routed: &[u32]) -> u32
where E: DigitExtractor<f32> {
	routed.iter().map(|&bits| ext.digit(bits)).sum()
}

fn digits(c: &mut Criterion) {
	let mut group = c.benchmark_group("digit");
	group.throughput(Throughput::Elements(KEYS as u64));

	let routed = keys_f32()
		.into_iter()
		.map(RadixSortTwiddle::<Descending, f32>::encode)
		.collect::<Vec<_>>();

	for radix_bits in [4, 8, 11] {
		let window = DigitWindow::new::<f32>(8, radix_bits)
			.expect("window fits an f32");
		group.bench_with_input(
			BenchmarkId::new("shift", radix_bits),
			&window,
			|b, &window| {
				let ext = ShiftDigitExtractor::<f32>::from(window);
				b.iter(|| extract(black_box(ext), &routed))
			},
		);
		group.bench_with_input(
			BenchmarkId::new("bfe", radix_bits),
			&window,
			|b, &window| {
				let ext = BfeDigitExtractor::<f32>::from(window);
				b.iter(|| extract(black_box(ext), &routed))
			},
		);
	}
	group.finish();
}

criterion_group!(benches, twiddle, digits);
criterion_main!(benches);
