//! Version-agnostic FHIR models
//!
//! Types that work across FHIR R4, R4B, and R5

pub mod bundle;
pub mod code_system;
pub mod error;

pub use bundle::*;
pub use code_system::*;
pub use error::{Error, Result};
