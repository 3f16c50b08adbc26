// @generated by ferrum-codegen
// DO NOT EDIT MANUALLY

//! AuditEventOutcome code system
#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

use ferrum_codesystem::CodeSystemEnum;
use std::fmt;
use std::str::FromStr;

/// Indicates whether the event succeeded or failed.
///
/// Code system: `http://hl7.org/fhir/audit-event-outcome`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditEventOutcome {
    /// The operation completed successfully (whether with warnings or not).
    _0,
    /// The action was not successful due to some kind of minor failure (often equivalent to an HTTP 400 response).
    _4,
    /// The action was not successful due to some kind of unexpected error (often equivalent to an HTTP 500 response).
    _8,
    /// An error of such magnitude occurred that the system is no longer available for use (i.e. the system died).
    _12,
}

static CODES: phf::Map<&'static str, AuditEventOutcome> = phf::phf_map! {
    "0" => AuditEventOutcome::_0,
    "4" => AuditEventOutcome::_4,
    "8" => AuditEventOutcome::_8,
    "12" => AuditEventOutcome::_12,
};

impl AuditEventOutcome {
    pub const VALUE_SET: Option<&'static str> = Some("http://hl7.org/fhir/ValueSet/audit-event-outcome");

    const MEMBERS: &'static [AuditEventOutcome] = &[
        AuditEventOutcome::_0,
        AuditEventOutcome::_4,
        AuditEventOutcome::_8,
        AuditEventOutcome::_12,
    ];
}

impl CodeSystemEnum for AuditEventOutcome {
    const NAME: &'static str = "AuditEventOutcome";
    const SYSTEM: &'static str = "http://hl7.org/fhir/audit-event-outcome";

    fn members() -> &'static [Self] {
        Self::MEMBERS
    }

    fn as_code(&self) -> &'static str {
        match self {
            AuditEventOutcome::_0 => "0",
            AuditEventOutcome::_4 => "4",
            AuditEventOutcome::_8 => "8",
            AuditEventOutcome::_12 => "12",
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            AuditEventOutcome::_0 => "_0",
            AuditEventOutcome::_4 => "_4",
            AuditEventOutcome::_8 => "_8",
            AuditEventOutcome::_12 => "_12",
        }
    }

    fn from_code(code: &str) -> ferrum_codesystem::Result<Self> {
        CODES
            .get(code)
            .copied()
            .ok_or_else(|| ferrum_codesystem::typed::unknown_code::<Self>(code))
    }

    fn documentation(&self) -> Option<&'static str> {
        match self {
            AuditEventOutcome::_0 => Some("The operation completed successfully (whether with warnings or not)."),
            AuditEventOutcome::_4 => Some("The action was not successful due to some kind of minor failure (often equivalent to an HTTP 400 response)."),
            AuditEventOutcome::_8 => Some("The action was not successful due to some kind of unexpected error (often equivalent to an HTTP 500 response)."),
            AuditEventOutcome::_12 => Some("An error of such magnitude occurred that the system is no longer available for use (i.e. the system died)."),
        }
    }
}

impl fmt::Display for AuditEventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for AuditEventOutcome {
    type Err = ferrum_codesystem::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl serde::Serialize for AuditEventOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ferrum_codesystem::typed::serialize_code(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for AuditEventOutcome {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ferrum_codesystem::typed::deserialize_code(deserializer)
    }
}
