pub mod validation;
pub mod writer;

pub use validation::{ValidationResult, validate_ring, validate_stem};
pub use writer::write_output;
