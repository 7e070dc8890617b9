use crate::utils::Float;

/// Significant digits kept before decimal rounding.
const SIGNIFICANT_DIGITS: usize = 15;

pub trait Sqr {
    type Output;
    fn sqr(self) -> Self::Output;
}

impl Sqr for Float {
    type Output = Float;
    fn sqr(self) -> Self::Output {
        self * self
    }
}

pub trait Sqrt {
    type Output;
    fn sqrt(self) -> Self::Output;
}

impl Sqrt for Float {
    type Output = Float;
    fn sqrt(self) -> Self::Output {
        Float::sqrt(self)
    }
}

/// `self` is the ordinate, `rhs` the abscissa.
pub trait Atan2<Rhs = Self> {
    type Output;
    fn atan2(self, rhs: Rhs) -> Self::Output;
}

impl Atan2 for Float {
    type Output = Float;
    fn atan2(self, rhs: Self) -> Self::Output {
        Float::atan2(self, rhs)
    }
}

pub trait Abs {
    type Output;
    fn abs(self) -> Self::Output;
}

impl Abs for Float {
    type Output = Float;
    fn abs(self) -> Self::Output {
        Float::abs(self)
    }
}

pub trait Pi {
    fn pi() -> Self;
}

impl Pi for Float {
    fn pi() -> Self {
        std::f64::consts::PI
    }
}

/// Decimal rounding, half away from zero.
///
/// Values whose shortest representation already fits into `places` fractional
/// digits come back untouched, so `33333.3` stays `33333.3`. Everything else is
/// first cut to 15 significant digits, then rounded on its decimal digits.
pub trait RoundTo {
    type Output;
    fn round_to(self, places: u32) -> Self::Output;
}

impl RoundTo for Float {
    type Output = Float;

    fn round_to(self, places: u32) -> Self::Output {
        if !self.is_finite() || fraction_digits(self) <= places as usize {
            return self;
        }
        round_decimal(self, places).unwrap_or(self)
    }
}

fn fraction_digits(value: Float) -> usize {
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

fn round_decimal(value: Float, places: u32) -> Option<Float> {
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value.abs());
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i64 = exponent.parse().ok()?;
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|d| d - b'0')
        .collect();

    // Digits left of the rounding position.
    let kept = exponent + 1 + i64::from(places);
    let magnitude = if kept >= digits.len() as i64 {
        scientific.parse::<Float>().ok()?
    } else if kept < 0 {
        0.
    } else {
        let kept = kept as usize;
        let mut scaled = digits[..kept]
            .iter()
            .fold(0u64, |acc, d| acc * 10 + u64::from(*d));
        if digits[kept] >= 5 {
            scaled += 1;
        }
        scaled as Float / (10 as Float).powi(places as i32)
    };
    Some(magnitude.copysign(value))
}
