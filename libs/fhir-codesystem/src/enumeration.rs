//! Closed code system enumerations
//!
//! A [`CodeSystemEnumeration`] is built once from a [`CodeSystemDefinition`]
//! and is immutable afterwards. Construction enforces the invariants every
//! consumer relies on:
//!
//! - the member list is non-empty
//! - wire values are unique (exact, case-sensitive)
//! - symbolic names are unique, so no two codes share an identifier
//!
//! Lookups by wire value and by symbolic name go through precomputed hash
//! indexes.

use crate::definition::{CodeSystemDefinition, ConceptDefinition};
use crate::error::{Error, Result};
use crate::symbol::symbolic_name;
use serde::{Serialize, Serializer};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// One member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumMember {
    symbolic_name: String,
    wire_value: String,
    documentation: Option<String>,
    ordinal: usize,
}

impl EnumMember {
    /// Identifier-safe name, e.g. `ENTERED_IN_ERROR`
    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    /// Exact string used on the wire, e.g. `entered-in-error`
    pub fn wire_value(&self) -> &str {
        &self.wire_value
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Position in declaration order
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire_value)
    }
}

impl Serialize for EnumMember {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.wire_value)
    }
}

/// Declaration-ordered iterator over the members of an enumeration.
pub type Members<'a> = std::slice::Iter<'a, EnumMember>;

/// A named, closed set of codes with a one-to-one wire mapping.
#[derive(Debug, Clone)]
pub struct CodeSystemEnumeration {
    name: String,
    description: Option<String>,
    source_uri: String,
    value_set_uri: Option<String>,
    version: Option<String>,
    members: Vec<EnumMember>,
    by_code: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
}

impl CodeSystemEnumeration {
    /// Build an enumeration, rejecting duplicate wire values and symbolic
    /// name collisions.
    pub fn new(definition: CodeSystemDefinition) -> Result<Self> {
        let CodeSystemDefinition {
            name,
            description,
            url,
            value_set,
            version,
            concepts,
        } = definition;

        if concepts.is_empty() {
            return Err(Error::EmptyEnumeration(name));
        }

        let mut members = Vec::with_capacity(concepts.len());
        let mut by_code = HashMap::with_capacity(concepts.len());
        let mut by_symbol: HashMap<String, usize> = HashMap::with_capacity(concepts.len());

        for (ordinal, concept) in concepts.into_iter().enumerate() {
            let ConceptDefinition { code, definition } = concept;

            if by_code.contains_key(&code) {
                return Err(Error::DuplicateWireValue {
                    enumeration: name,
                    code,
                });
            }

            let symbol = symbolic_name(&code)?;
            match by_symbol.entry(symbol) {
                Entry::Occupied(existing) => {
                    let first: &EnumMember = &members[*existing.get()];
                    return Err(Error::SymbolicNameCollision {
                        enumeration: name,
                        symbol: existing.key().clone(),
                        first: first.wire_value.clone(),
                        second: code,
                    });
                }
                Entry::Vacant(slot) => {
                    members.push(EnumMember {
                        symbolic_name: slot.key().clone(),
                        wire_value: code.clone(),
                        documentation: definition,
                        ordinal,
                    });
                    slot.insert(ordinal);
                    by_code.insert(code, ordinal);
                }
            }
        }

        Ok(Self {
            name,
            description,
            source_uri: url,
            value_set_uri: value_set,
            version,
            members,
            by_code,
            by_symbol,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Canonical URI of the code system
    pub fn source_uri(&self) -> &str {
        &self.source_uri
    }

    pub fn value_set_uri(&self) -> Option<&str> {
        self.value_set_uri.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Look up a member by its exact wire value.
    pub fn value_of(&self, code: &str) -> Result<&EnumMember> {
        self.get(code)
            .ok_or_else(|| Error::unknown_code(&self.source_uri, code))
    }

    pub fn get(&self, code: &str) -> Option<&EnumMember> {
        self.by_code.get(code).map(|&idx| &self.members[idx])
    }

    pub fn to_wire_value<'a>(&self, member: &'a EnumMember) -> &'a str {
        member.wire_value()
    }

    pub fn by_symbolic_name(&self, symbol: &str) -> Option<&EnumMember> {
        self.by_symbol.get(symbol).map(|&idx| &self.members[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Members in declaration order. Each call starts a fresh iteration.
    pub fn members(&self) -> Members<'_> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Convert back into the serializable catalog form.
    pub fn definition(&self) -> CodeSystemDefinition {
        CodeSystemDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            url: self.source_uri.clone(),
            value_set: self.value_set_uri.clone(),
            version: self.version.clone(),
            concepts: self
                .members
                .iter()
                .map(|m| ConceptDefinition {
                    code: m.wire_value.clone(),
                    definition: m.documentation.clone(),
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CodeSystemEnumeration {
    type Item = &'a EnumMember;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.members()
    }
}
