//! Progress output

pub mod reporter;

pub use reporter::Reporter;
