//! Repository layer — entity-scoped database operations.

mod vital_sign;

pub use vital_sign::*;
