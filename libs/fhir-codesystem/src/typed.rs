//! Typed enums generated from the catalog
//!
//! Generated code implements [`CodeSystemEnum`] for each closed Rust enum and
//! delegates its serde impls to [`serialize_code`] and [`deserialize_code`].
//! [`enumeration`] cross-checks a typed enum against the table it was
//! generated from.

use crate::enumeration::CodeSystemEnumeration;
use crate::error::{Error, Result};
use crate::registry::Registry;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Debug;
use std::hash::Hash;

pub trait CodeSystemEnum: Copy + Eq + Hash + Debug + 'static {
    /// Type name in the catalog, e.g. `AdmitSource`
    const NAME: &'static str;
    /// Canonical code system URI
    const SYSTEM: &'static str;

    /// All variants in declaration order
    fn members() -> &'static [Self];

    /// Wire value of this variant
    fn as_code(&self) -> &'static str;

    fn symbolic_name(&self) -> &'static str;

    /// Parse an exact wire value.
    fn from_code(code: &str) -> Result<Self>;

    fn documentation(&self) -> Option<&'static str> {
        None
    }
}

/// Error for a code that `E` does not define.
pub fn unknown_code<E: CodeSystemEnum>(code: &str) -> Error {
    Error::unknown_code(E::SYSTEM, code)
}

/// Resolve the catalog table behind `E` and check that both sides agree on
/// every wire value and symbolic name.
pub fn enumeration<E: CodeSystemEnum>(registry: &Registry) -> Result<&CodeSystemEnumeration> {
    let table = registry.resolve(E::SYSTEM)?;

    for variant in E::members() {
        let member = table.value_of(variant.as_code())?;
        if member.symbolic_name() != variant.symbolic_name() {
            return Err(Error::SymbolMismatch {
                enumeration: E::NAME.to_string(),
                code: variant.as_code().to_string(),
                typed: variant.symbolic_name().to_string(),
                table: member.symbolic_name().to_string(),
            });
        }
    }
    for member in table.members() {
        E::from_code(member.wire_value())?;
    }
    Ok(table)
}

pub fn serialize_code<E, S>(value: &E, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    E: CodeSystemEnum,
    S: Serializer,
{
    serializer.serialize_str(value.as_code())
}

pub fn deserialize_code<'de, E, D>(deserializer: D) -> std::result::Result<E, D::Error>
where
    E: CodeSystemEnum,
    D: Deserializer<'de>,
{
    let code = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
    E::from_code(&code).map_err(serde::de::Error::custom)
}
