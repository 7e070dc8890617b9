use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::utils::{Float, DISPLAY_PRECISION};

use super::{Abs, ArgumentError, Atan2, NonFiniteError, Pi, RoundTo, Sqr, Sqrt};

/// Complex number `real + imag * i`.
///
/// Plain immutable value: every method is a read-only query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    real: Float,
    imag: Float,
}

impl<R, I> From<(R, I)> for Complex
where
    R: Into<Float>,
    I: Into<Float>,
{
    fn from(value: (R, I)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Complex {
    pub fn new<R, I>(real: R, imag: I) -> Self
    where
        R: Into<Float>,
        I: Into<Float>,
    {
        Self {
            real: real.into(),
            imag: imag.into(),
        }
    }

    /// Same as `new` but rejects NaN and infinite components.
    pub fn try_new<R, I>(real: R, imag: I) -> Result<Self, NonFiniteError>
    where
        R: Into<Float>,
        I: Into<Float>,
    {
        let result = Self::new(real, imag);
        if result.real.is_finite() && result.imag.is_finite() {
            Ok(result)
        } else {
            log::debug!(
                "rejecting non-finite complex number (real: {}, imag: {})",
                result.real,
                result.imag
            );
            Err(NonFiniteError::new(result.real, result.imag))
        }
    }

    pub fn real(&self) -> Float {
        self.real
    }

    pub fn imag(&self) -> Float {
        self.imag
    }

    pub fn squared_magnitude(&self) -> Float {
        self.real.sqr() + self.imag.sqr()
    }

    pub fn magnitude(&self) -> Float {
        Sqrt::sqrt(self.squared_magnitude())
    }

    /// Alias of [`Complex::magnitude`].
    pub fn norm(&self) -> Float {
        self.magnitude()
    }

    /// Angle to the positive real axis in radians.
    ///
    /// Two-argument arctangent never leaves `[-PI, PI]` so the error is not
    /// expected in practice. NaN components yield `Ok(NaN)`.
    pub fn argument(&self) -> Result<Float, ArgumentError> {
        check_argument(Atan2::atan2(self.imag, self.real))
    }

    /// Alias of [`Complex::argument`].
    pub fn angle(&self) -> Result<Float, ArgumentError> {
        self.argument()
    }
}

fn check_argument(value: Float) -> Result<Float, ArgumentError> {
    if value > Float::pi() || value < -Float::pi() {
        log::warn!("argument has an impossible value: {}", value);
        Err(ArgumentError::new(value))
    } else {
        Ok(value)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.imag < 0. { '-' } else { '+' };
        write!(
            f,
            "{} {} {}i",
            self.real,
            sign,
            Abs::abs(self.imag).round_to(DISPLAY_PRECISION)
        )
    }
}
