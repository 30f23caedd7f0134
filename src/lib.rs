pub mod error;
pub mod math;
pub mod operations;
pub mod outline;

pub use error::{ExtremisError, Result};
