use crate::utils::Float;

/// Argument of a complex number computed outside of `[-PI, PI]`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("argument has an impossible value: {value}")]
pub struct ArgumentError {
    value: Float,
}

impl ArgumentError {
    pub(crate) fn new(value: Float) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Float {
        self.value
    }
}

/// Complex number component is NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("complex number components must be finite, got real: {real}, imag: {imag}")]
pub struct NonFiniteError {
    real: Float,
    imag: Float,
}

impl NonFiniteError {
    pub(crate) fn new(real: Float, imag: Float) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> Float {
        self.real
    }

    pub fn imag(&self) -> Float {
        self.imag
    }
}
