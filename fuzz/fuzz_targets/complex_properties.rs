#![no_main]

use std::f64::consts::PI;

use complex_lib::math::Complex;
use libfuzzer_sys::fuzz_target;

fn read_f64(bytes: &[u8]) -> Option<f64> {
    let value = f64::from_le_bytes(bytes.try_into().ok()?);
    value.is_finite().then_some(value)
}

// Interprets input as pairs of little-endian floats and checks every pair against the
// invariants of the derived quantities. Non-finite pairs are skipped.
fuzz_target!(|data: &[u8]| {
    for pair in data.chunks_exact(16) {
        let (Some(real), Some(imag)) = (read_f64(&pair[..8]), read_f64(&pair[8..])) else {
            continue;
        };

        let c = Complex::try_new(real, imag).unwrap();
        assert_eq!(c.real().to_bits(), real.to_bits());
        assert_eq!(c.imag().to_bits(), imag.to_bits());

        assert_eq!(c.squared_magnitude(), real * real + imag * imag);
        assert!(c.magnitude() >= 0.);
        assert_eq!(c.norm(), c.magnitude());

        let arg = c.argument().unwrap();
        assert!((-PI..=PI).contains(&arg));
        assert_eq!(c.angle(), Ok(arg));

        let s = c.to_string();
        assert!(s.ends_with('i'));
        assert_eq!(s.contains(" - "), imag < 0.);
    }
});
