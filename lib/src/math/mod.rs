mod complex;
mod error;
mod traits;

pub use complex::*;
pub use error::*;
pub use traits::*;
