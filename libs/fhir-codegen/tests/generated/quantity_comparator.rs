// @generated by ferrum-codegen
// DO NOT EDIT MANUALLY

//! QuantityComparator code system
#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

use ferrum_codesystem::CodeSystemEnum;
use std::fmt;
use std::str::FromStr;

/// How the Quantity should be understood and represented.
///
/// Code system: `http://hl7.org/fhir/quantity-comparator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityComparator {
    /// The actual value is less than the given value.
    LESS_THAN,
    /// The actual value is less than or equal to the given value.
    LESS_OR_EQUAL,
    /// The actual value is greater than or equal to the given value.
    GREATER_OR_EQUAL,
    /// The actual value is greater than the given value.
    GREATER_THAN,
}

static CODES: phf::Map<&'static str, QuantityComparator> = phf::phf_map! {
    "<" => QuantityComparator::LESS_THAN,
    "<=" => QuantityComparator::LESS_OR_EQUAL,
    ">=" => QuantityComparator::GREATER_OR_EQUAL,
    ">" => QuantityComparator::GREATER_THAN,
};

impl QuantityComparator {
    pub const VALUE_SET: Option<&'static str> = Some("http://hl7.org/fhir/ValueSet/quantity-comparator");

    const MEMBERS: &'static [QuantityComparator] = &[
        QuantityComparator::LESS_THAN,
        QuantityComparator::LESS_OR_EQUAL,
        QuantityComparator::GREATER_OR_EQUAL,
        QuantityComparator::GREATER_THAN,
    ];
}

impl CodeSystemEnum for QuantityComparator {
    const NAME: &'static str = "QuantityComparator";
    const SYSTEM: &'static str = "http://hl7.org/fhir/quantity-comparator";

    fn members() -> &'static [Self] {
        Self::MEMBERS
    }

    fn as_code(&self) -> &'static str {
        match self {
            QuantityComparator::LESS_THAN => "<",
            QuantityComparator::LESS_OR_EQUAL => "<=",
            QuantityComparator::GREATER_OR_EQUAL => ">=",
            QuantityComparator::GREATER_THAN => ">",
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            QuantityComparator::LESS_THAN => "LESS_THAN",
            QuantityComparator::LESS_OR_EQUAL => "LESS_OR_EQUAL",
            QuantityComparator::GREATER_OR_EQUAL => "GREATER_OR_EQUAL",
            QuantityComparator::GREATER_THAN => "GREATER_THAN",
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
            QuantityComparator::LESS_THAN => Some("The actual value is less than the given value."),
            QuantityComparator::LESS_OR_EQUAL => Some("The actual value is less than or equal to the given value."),
            QuantityComparator::GREATER_OR_EQUAL => Some("The actual value is greater than or equal to the given value."),
            QuantityComparator::GREATER_THAN => Some("The actual value is greater than the given value."),
        }
    }
}

impl fmt::Display for QuantityComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for QuantityComparator {
    type Err = ferrum_codesystem::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl serde::Serialize for QuantityComparator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ferrum_codesystem::typed::serialize_code(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for QuantityComparator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ferrum_codesystem::typed::deserialize_code(deserializer)
    }
}
