//! FHIR code system enumerations
//!
//! Every coded FHIR element draws its values from a code system: a closed
//! set of codes, each transmitted as an exact string (the wire value). This
//! crate represents those code systems as data instead of hand-written
//! types:
//!
//! - [`CodeSystemEnumeration`]: one closed set with O(1) lookups by wire
//!   value and by symbolic name
//! - [`Registry`]: enumerations keyed by canonical system URI
//! - [`BindingStrength`] / [`CodeMatch`]: binding-aware matching that keeps
//!   unrecognized codes for non-required bindings
//! - [`CodeSystemEnum`]: the trait implemented by generated typed enums
//! - [`r4()`]: the embedded FHIR R4 catalog (feature `r4`, on by default)
//!
//! # Example
//!
//! ```rust
//! use ferrum_codesystem::{r4, r4::systems};
//!
//! let status = r4().resolve(systems::OBSERVATION_STATUS).unwrap();
//! let member = status.value_of("entered-in-error").unwrap();
//! assert_eq!(member.symbolic_name(), "ENTERED_IN_ERROR");
//! assert_eq!(status.to_wire_value(member), "entered-in-error");
//! ```

#![forbid(unsafe_code)]

mod binding;
mod definition;
mod enumeration;
mod error;
mod registry;
pub mod symbol;
pub mod typed;

#[cfg(feature = "r4")]
pub mod r4;

pub use binding::{BindingStrength, CodeMatch, CodeSeed};
pub use definition::{CatalogDocument, CodeSystemDefinition, ConceptDefinition};
pub use enumeration::{CodeSystemEnumeration, EnumMember, Members};
pub use error::{Error, Result};
pub use registry::Registry;
pub use symbol::{is_symbolic_name, symbolic_name};
pub use typed::CodeSystemEnum;

#[cfg(feature = "r4")]
pub use r4::r4;
