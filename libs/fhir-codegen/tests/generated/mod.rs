// @generated by ferrum-codegen
// DO NOT EDIT MANUALLY

//! FHIR code system enumerations
//!
//! 3 closed code systems from FHIR 4.0.1.

pub mod audit_event_outcome;
pub mod quantity_comparator;
pub mod r#use;

pub use audit_event_outcome::AuditEventOutcome;
pub use quantity_comparator::QuantityComparator;
pub use r#use::Use;
