//! Tests for the `window` module.

use super::*;

#[test]
fn checked_windows() {
	let window = DigitWindow::new::<u32>(24, 8).unwrap();
	assert_eq!(window.bit_start(), 24);
	assert_eq!(window.num_bits(), 8);
	assert_eq!(window.end_bit(), 32);
	assert_eq!(window.mask(), 0xFF);
	assert_eq!(window.radix_size(), 256);

	assert!(DigitWindow::new::<u8>(0, 8).is_ok());
	assert!(DigitWindow::new::<u128>(96, 32).is_ok());
	assert!(DigitWindow::new::<f64>(64, 0).is_ok());
	assert_eq!(DigitWindow::default(), DigitWindow::new::<u8>(0, 0).unwrap());
}

#[test]
fn rejected_windows() {
	assert_eq!(
		DigitWindow::new::<u64>(0, 33),
		Err(DigitWindowError::TooWide { num_bits: 33 }),
	);
	assert_eq!(
		DigitWindow::new::<u16>(12, 8),
		Err(DigitWindowError::OutOfRange {
			end_bit: 20,
			width: 16,
			key: "u16",
		}),
	);
	assert!(matches!(
		DigitWindow::new::<i32>(u32::MAX, 1),
		Err(DigitWindowError::OutOfRange { end_bit: u32::MAX, .. }),
	));
}

#[test]
fn unchecked_wide_windows() {
	//  Deserialized windows skip `check`, and must still report sizes.
	let wide = DigitWindow::from_parts(0, 64);
	assert_eq!(wide.mask(), u32::MAX);
	assert_eq!(wide.radix_size(), 1 << 32);
	assert_eq!(wide.end_bit(), 64);
	let huge = DigitWindow::from_parts(u32::MAX, u32::MAX);
	assert_eq!(huge.radix_size(), 1 << 32);
	assert_eq!(huge.end_bit(), u32::MAX);
	assert!(huge.check::<u128>().is_err());

	assert_eq!(DigitWindow::from_parts(0, 32).radix_size(), 1 << 32);
	assert_eq!(DigitWindow::from_parts(0, 31).radix_size(), 1 << 31);
	assert_eq!(DigitWindow::default().radix_size(), 1);
}

#[test]
fn pass_plans() {
	let passes = DigitWindow::passes::<u32>(0, 32, 8).unwrap();
	assert_eq!(passes.len(), 4);
	let starts = passes.map(|w| w.bit_start()).collect::<Vec<_>>();
	assert_eq!(starts, [0, 8, 16, 24]);

	//  The last pass narrows to the remaining bits.
	let windows = DigitWindow::passes::<u64>(3, 64, 16)
		.unwrap()
		.collect::<Vec<_>>();
	assert_eq!(windows.len(), 4);
	assert_eq!(windows[0], DigitWindow::new::<u64>(3, 16).unwrap());
	assert_eq!(windows[3], DigitWindow::new::<u64>(51, 13).unwrap());

	//  Reversed iteration is most-significant-first.
	let mut msd = DigitWindow::passes::<u16>(0, 16, 6).unwrap().rev();
	assert_eq!(msd.next(), DigitWindow::new::<u16>(12, 4).ok());
	assert_eq!(msd.next(), DigitWindow::new::<u16>(6, 6).ok());
	assert_eq!(msd.next(), DigitWindow::new::<u16>(0, 6).ok());
	assert_eq!(msd.next(), None);
	assert_eq!(msd.next(), None);

	assert_eq!(DigitWindow::passes::<u8>(4, 4, 4).unwrap().count(), 0);
	//  A radix wider than the key still plans one narrowed pass.
	let single = DigitWindow::passes::<u8>(0, 8, 32).unwrap().collect::<Vec<_>>();
	assert_eq!(single, [DigitWindow::new::<u8>(0, 8).unwrap()]);
}

#[test]
fn pass_plans_cover_range() {
	for radix in 1 ..= 32 {
		let mut next = 5;
		for window in DigitWindow::passes::<i64>(5, 61, radix).unwrap() {
			assert_eq!(window.bit_start(), next);
			assert!(window.num_bits() <= radix);
			assert!(window.check::<i64>().is_ok());
			next = window.end_bit();
		}
		assert_eq!(next, 61);
	}
}

#[test]
fn rejected_plans() {
	assert_eq!(
		DigitWindow::passes::<u32>(0, 32, 0).unwrap_err(),
		DigitWindowError::EmptyRadix,
	);
	assert_eq!(
		DigitWindow::passes::<u32>(0, 32, 40).unwrap_err(),
		DigitWindowError::TooWide { num_bits: 40 },
	);
	assert_eq!(
		DigitWindow::passes::<u32>(9, 8, 4).unwrap_err(),
		DigitWindowError::Reversed {
			begin_bit: 9,
			end_bit: 8,
		},
	);
	assert!(matches!(
		DigitWindow::passes::<f32>(0, 33, 8).unwrap_err(),
		DigitWindowError::OutOfRange {
			end_bit: 33,
			width: 32,
			..
		},
	));
}

#[test]
#[cfg(feature = "std")]
fn rendering() {
	assert_eq!(DigitWindow::new::<u32>(8, 8).unwrap().to_string(), "[8 .. 16)");
	assert_eq!(
		DigitWindowError::TooWide { num_bits: 40 }.to_string(),
		"Digit width 40 cannot exceed 32 bits",
	);
	assert_eq!(
		DigitWindowError::OutOfRange {
			end_bit: 20,
			width: 16,
			key: "u16",
		}
		.to_string(),
		"Bit 20 is past the end of the 16-bit key u16",
	);
	let err: Box<dyn std::error::Error> = Box::new(DigitWindowError::EmptyRadix);
	assert_eq!(err.to_string(), "Radix passes cannot be empty");
}
