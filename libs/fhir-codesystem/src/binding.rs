//! Binding-strength aware code matching
//!
//! Whether an unknown code is an error depends on how the field is bound.
//! Only `required` bindings reject it. Every other strength keeps the raw
//! string so it can be written back out unchanged.

use crate::enumeration::{CodeSystemEnumeration, EnumMember};
use crate::error::{Error, Result};
use serde::de::{self, DeserializeSeed, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const BINDING_STRENGTH_SYSTEM: &str = "http://hl7.org/fhir/binding-strength";

/// How strictly a coded field must draw from its code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

impl BindingStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingStrength::Required => "required",
            BindingStrength::Extensible => "extensible",
            BindingStrength::Preferred => "preferred",
            BindingStrength::Example => "example",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, BindingStrength::Required)
    }
}

impl fmt::Display for BindingStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingStrength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "required" => Ok(BindingStrength::Required),
            "extensible" => Ok(BindingStrength::Extensible),
            "preferred" => Ok(BindingStrength::Preferred),
            "example" => Ok(BindingStrength::Example),
            other => Err(Error::unknown_code(BINDING_STRENGTH_SYSTEM, other)),
        }
    }
}

/// Outcome of matching a received code against an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeMatch<'a> {
    Known(&'a EnumMember),
    /// Not in the enumeration but accepted by a non-required binding.
    Unrecognized(String),
}

impl<'a> CodeMatch<'a> {
    /// The code as it appears on the wire
    pub fn as_str(&self) -> &str {
        match self {
            CodeMatch::Known(member) => member.wire_value(),
            CodeMatch::Unrecognized(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<&'a EnumMember> {
        match self {
            CodeMatch::Known(member) => Some(*member),
            CodeMatch::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, CodeMatch::Known(_))
    }
}

impl fmt::Display for CodeMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CodeMatch<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl CodeSystemEnumeration {
    /// Match `code` under the given binding strength.
    ///
    /// A required binding turns an unknown code into [`Error::UnknownCode`];
    /// weaker bindings preserve it as [`CodeMatch::Unrecognized`].
    pub fn resolve(&self, code: &str, strength: BindingStrength) -> Result<CodeMatch<'_>> {
        match self.get(code) {
            Some(member) => Ok(CodeMatch::Known(member)),
            None if strength.is_required() => self.value_of(code).map(CodeMatch::Known),
            None => {
                tracing::trace!(
                    system = %self.source_uri(),
                    code,
                    binding = %strength,
                    "preserving unrecognized code"
                );
                Ok(CodeMatch::Unrecognized(code.to_string()))
            }
        }
    }

    /// Seed for decoding one bound field with any serde data format.
    pub fn seed(&self, strength: BindingStrength) -> CodeSeed<'_> {
        CodeSeed::new(self, strength)
    }
}

/// [`DeserializeSeed`] that decodes a code string against an enumeration.
///
/// ```
/// use ferrum_codesystem::{BindingStrength, CodeSystemDefinition, CodeSystemEnumeration};
/// use serde::de::DeserializeSeed;
///
/// let gender = CodeSystemEnumeration::new(
///     CodeSystemDefinition::new("AdministrativeGender", "http://hl7.org/fhir/administrative-gender")
///         .with_concept("male", None)
///         .with_concept("female", None),
/// )
/// .unwrap();
///
/// let mut de = serde_json::Deserializer::from_str("\"female\"");
/// let code = gender.seed(BindingStrength::Required).deserialize(&mut de).unwrap();
/// assert_eq!(code.known().unwrap().symbolic_name(), "FEMALE");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CodeSeed<'a> {
    enumeration: &'a CodeSystemEnumeration,
    strength: BindingStrength,
}

impl<'a> CodeSeed<'a> {
    pub fn new(enumeration: &'a CodeSystemEnumeration, strength: BindingStrength) -> Self {
        Self {
            enumeration,
            strength,
        }
    }
}

impl<'de, 'a> DeserializeSeed<'de> for CodeSeed<'a> {
    type Value = CodeMatch<'a>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CodeVisitor(self))
    }
}

struct CodeVisitor<'a>(CodeSeed<'a>);

impl<'de, 'a> Visitor<'de> for CodeVisitor<'a> {
    type Value = CodeMatch<'a>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a code from {}", self.0.enumeration.source_uri())
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.0
            .enumeration
            .resolve(v, self.0.strength)
            .map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::CodeSystemDefinition;

    fn gender() -> CodeSystemEnumeration {
        CodeSystemEnumeration::new(
            CodeSystemDefinition::new(
                "AdministrativeGender",
                "http://hl7.org/fhir/administrative-gender",
            )
            .with_concept("male", None)
            .with_concept("female", None)
            .with_concept("other", None)
            .with_concept("unknown", None),
        )
        .unwrap()
    }

    #[test]
    fn test_strength_parse_and_display() {
        for s in ["required", "extensible", "preferred", "example"] {
            let strength: BindingStrength = s.parse().unwrap();
            assert_eq!(strength.to_string(), s);
        }
        assert!(matches!(
            "mandatory".parse::<BindingStrength>(),
            Err(Error::UnknownCode { .. })
        ));
    }

    #[test]
    fn test_required_rejects_unknown() {
        let gender = gender();
        let err = gender.resolve("M", BindingStrength::Required).unwrap_err();
        assert!(matches!(err, Error::UnknownCode { ref code, .. } if code == "M"));
    }

    #[test]
    fn test_weaker_bindings_preserve_unknown() {
        let gender = gender();
        for strength in [
            BindingStrength::Extensible,
            BindingStrength::Preferred,
            BindingStrength::Example,
        ] {
            let matched = gender.resolve("M", strength).unwrap();
            assert_eq!(matched, CodeMatch::Unrecognized("M".to_string()));
            assert!(!matched.is_known());
        }
    }

    #[test]
    fn test_known_code_matches_for_every_strength() {
        let gender = gender();
        for strength in [
            BindingStrength::Required,
            BindingStrength::Extensible,
            BindingStrength::Preferred,
            BindingStrength::Example,
        ] {
            let matched = gender.resolve("female", strength).unwrap();
            assert_eq!(matched.known().unwrap().symbolic_name(), "FEMALE");
        }
    }

    #[test]
    fn test_code_match_serializes_byte_for_byte() {
        let gender = gender();
        let known = gender.resolve("other", BindingStrength::Required).unwrap();
        let raw = gender
            .resolve(" Other ", BindingStrength::Example)
            .unwrap();
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"other\"");
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\" Other \"");
    }

    #[test]
    fn test_seed_decodes_json() {
        let gender = gender();
        let mut de = serde_json::Deserializer::from_str("\"unknown\"");
        let matched = gender
            .seed(BindingStrength::Required)
            .deserialize(&mut de)
            .unwrap();
        assert_eq!(matched.as_str(), "unknown");

        let mut de = serde_json::Deserializer::from_str("\"nonbinary\"");
        assert!(gender
            .seed(BindingStrength::Required)
            .deserialize(&mut de)
            .is_err());

        let mut de = serde_json::Deserializer::from_str("\"nonbinary\"");
        let matched = gender
            .seed(BindingStrength::Extensible)
            .deserialize(&mut de)
            .unwrap();
        assert_eq!(matched, CodeMatch::Unrecognized("nonbinary".to_string()));
    }

    #[test]
    fn test_seed_rejects_non_string() {
        let gender = gender();
        let mut de = serde_json::Deserializer::from_str("42");
        assert!(gender
            .seed(BindingStrength::Example)
            .deserialize(&mut de)
            .is_err());
    }
}
