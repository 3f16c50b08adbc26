//! Serializable catalog format
//!
//! The catalog document is the single data file shared by the generator
//! (which writes it) and the runtime (which loads it).

use serde::{Deserialize, Serialize};

/// A set of code system definitions for one FHIR version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// FHIR version the code systems were taken from (e.g. `4.0.1`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_version: Option<String>,

    /// Code systems in catalog order
    #[serde(default)]
    pub code_systems: Vec<CodeSystemDefinition>,
}

/// One closed code system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemDefinition {
    /// Type name, e.g. `AdministrativeGender`
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Canonical code system URI
    pub url: String,

    /// Canonical URI of the value set containing all codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,

    /// Business version of the code system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Codes in declaration order
    pub concepts: Vec<ConceptDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDefinition {
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl CodeSystemDefinition {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            url: url.into(),
            value_set: None,
            version: None,
            concepts: Vec::new(),
        }
    }

    /// Append a concept, builder style.
    pub fn with_concept(mut self, code: impl Into<String>, definition: Option<&str>) -> Self {
        self.concepts.push(ConceptDefinition {
            code: code.into(),
            definition: definition.map(str::to_string),
        });
        self
    }
}
