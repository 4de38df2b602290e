//! Application-level configuration.
//!
//! - [`GenerationParams`]: sampling parameters sent with every completion request

pub mod generation_params;

pub use generation_params::GenerationParams;
