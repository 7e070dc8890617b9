#![deny(unused_imports)]

pub mod math;
pub mod utils;
