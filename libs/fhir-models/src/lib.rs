//! FHIR data models
//!
//! Serde models for the terminology resources that feed code system
//! generation: `CodeSystem` and the `Bundle` that ships them.
//!
//! # Module Organization
//!
//! - `common`: Version-agnostic models that work across FHIR R4, R4B, and R5
//!
//! # Example
//!
//! ```rust
//! use ferrum_models::common::{CodeSystem, CodeSystemContentMode};
//! use serde_json::json;
//!
//! let cs_json = json!({
//!     "resourceType": "CodeSystem",
//!     "url": "http://hl7.org/fhir/administrative-gender",
//!     "name": "AdministrativeGender",
//!     "status": "active",
//!     "content": "complete",
//!     "concept": [{ "code": "male" }, { "code": "female" }]
//! });
//!
//! let cs: CodeSystem = serde_json::from_value(cs_json).unwrap();
//! assert_eq!(cs.content, CodeSystemContentMode::Complete);
//! assert!(cs.is_enumerated());
//! ```

pub mod common;

// Re-export commonly used types
pub use common::*;
