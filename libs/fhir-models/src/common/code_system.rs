//! FHIR CodeSystem model
//!
//! Version-agnostic model for CodeSystems (terminology). Only the elements
//! needed to turn a code system into a closed enumeration are typed; all
//! other content is kept in `extensions`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// FHIR CodeSystem resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    /// Resource type - always "CodeSystem"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Canonical identifier
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name (computer friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name (human friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub status: PublicationStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// If code comparison is case sensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Canonical reference to the value set with all codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_meaning: Option<String>,

    /// How much of the code system is represented in this resource
    pub content: CodeSystemContentMode,

    /// Canonical URL of the code system this supplements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplements: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<CodeSystemConcept>>,

    /// Additional content
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "CodeSystem".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Active,
    Retired,
    Unknown,
}

/// Content mode for a code system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeSystemContentMode {
    NotPresent,
    Example,
    Fragment,
    Complete,
    Supplement,
}

/// Concept in the code system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeSystemConcept {
    /// Code that identifies the concept
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Formal definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<Value>>,

    /// Child concepts (nested hierarchy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<CodeSystemConcept>>,
}

impl CodeSystem {
    /// Create a new CodeSystem with minimal required fields
    pub fn new(
        url: impl Into<String>,
        status: PublicationStatus,
        content: CodeSystemContentMode,
    ) -> Self {
        Self {
            resource_type: "CodeSystem".to_string(),
            id: None,
            url: url.into(),
            version: None,
            name: None,
            title: None,
            status,
            description: None,
            case_sensitive: None,
            value_set: None,
            hierarchy_meaning: None,
            content,
            supplements: None,
            count: None,
            concept: None,
            extensions: HashMap::new(),
        }
    }

    /// Top-level concepts
    pub fn concepts(&self) -> &[CodeSystemConcept] {
        self.concept.as_deref().unwrap_or(&[])
    }

    /// All concepts, parents before their children, in declaration order.
    pub fn flattened_concepts(&self) -> Vec<&CodeSystemConcept> {
        fn walk<'a>(concepts: &'a [CodeSystemConcept], out: &mut Vec<&'a CodeSystemConcept>) {
            for concept in concepts {
                out.push(concept);
                if let Some(children) = &concept.concept {
                    walk(children, out);
                }
            }
        }

        let mut out = Vec::new();
        walk(self.concepts(), &mut out);
        out
    }

    /// Whether this resource lists every code of a closed code system.
    pub fn is_enumerated(&self) -> bool {
        self.content == CodeSystemContentMode::Complete
            && self.supplements.is_none()
            && !self.concepts().is_empty()
    }
}
