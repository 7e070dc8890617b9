pub type Float = f64;

/// Decimal places of the imaginary part in `Complex`'s `Display` output.
pub const DISPLAY_PRECISION: u32 = 11;
