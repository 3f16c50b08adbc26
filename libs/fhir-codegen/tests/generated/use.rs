// @generated by ferrum-codegen
// DO NOT EDIT MANUALLY

//! Use code system
#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

use ferrum_codesystem::CodeSystemEnum;
use std::fmt;
use std::str::FromStr;

/// The purpose of the Claim: predetermination, preauthorization, claim.
///
/// Code system: `http://hl7.org/fhir/claim-use`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Use {
    /// The treatment is complete and this represents a Claim for the services.
    CLAIM,
    /// The treatment is proposed and this represents a Pre-authorization for the services.
    PREAUTHORIZATION,
    /// The treatment is proposed and this represents a Pre-determination for the services.
    PREDETERMINATION,
}

static CODES: phf::Map<&'static str, Use> = phf::phf_map! {
    "claim" => Use::CLAIM,
    "preauthorization" => Use::PREAUTHORIZATION,
    "predetermination" => Use::PREDETERMINATION,
};

impl Use {
    pub const VALUE_SET: Option<&'static str> = Some("http://hl7.org/fhir/ValueSet/claim-use");

    const MEMBERS: &'static [Use] = &[
        Use::CLAIM,
        Use::PREAUTHORIZATION,
        Use::PREDETERMINATION,
    ];
}

impl CodeSystemEnum for Use {
    const NAME: &'static str = "Use";
    const SYSTEM: &'static str = "http://hl7.org/fhir/claim-use";

    fn members() -> &'static [Self] {
        Self::MEMBERS
    }

    fn as_code(&self) -> &'static str {
        match self {
            Use::CLAIM => "claim",
            Use::PREAUTHORIZATION => "preauthorization",
            Use::PREDETERMINATION => "predetermination",
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            Use::CLAIM => "CLAIM",
            Use::PREAUTHORIZATION => "PREAUTHORIZATION",
            Use::PREDETERMINATION => "PREDETERMINATION",
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
            Use::CLAIM => Some("The treatment is complete and this represents a Claim for the services."),
            Use::PREAUTHORIZATION => Some("The treatment is proposed and this represents a Pre-authorization for the services."),
            Use::PREDETERMINATION => Some("The treatment is proposed and this represents a Pre-determination for the services."),
        }
    }
}

impl fmt::Display for Use {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Use {
    type Err = ferrum_codesystem::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl serde::Serialize for Use {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ferrum_codesystem::typed::serialize_code(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Use {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ferrum_codesystem::typed::deserialize_code(deserializer)
    }
}
