pub mod vital_sign;

pub use vital_sign::*;
