//! Catalog of enumerations keyed by canonical system URI
//!
//! A registry is filled once during initialization and only read afterwards.
//! It holds no interior mutability, so a shared reference can be handed to any
//! number of threads.

use crate::definition::CatalogDocument;
use crate::enumeration::{CodeSystemEnumeration, EnumMember};
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    fhir_version: Option<String>,
    entries: Vec<(String, CodeSystemEnumeration)>,
    by_uri: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fhir_version(fhir_version: impl Into<String>) -> Self {
        Self {
            fhir_version: Some(fhir_version.into()),
            ..Self::default()
        }
    }

    /// Register an enumeration under a system URI.
    ///
    /// Registering the same URI, or an enumeration name already in use, is a
    /// programming error reported as a build-time [`Error`].
    pub fn register(
        &mut self,
        system_uri: impl Into<String>,
        enumeration: CodeSystemEnumeration,
    ) -> Result<()> {
        let system_uri = system_uri.into();
        if self.by_uri.contains_key(&system_uri) {
            return Err(Error::DuplicateRegistration(system_uri));
        }
        if self.by_name.contains_key(enumeration.name()) {
            return Err(Error::DuplicateName(enumeration.name().to_string()));
        }

        let idx = self.entries.len();
        self.by_uri.insert(system_uri.clone(), idx);
        self.by_name.insert(enumeration.name().to_string(), idx);
        self.entries.push((system_uri, enumeration));
        Ok(())
    }

    /// Find the enumeration registered for `system_uri`.
    pub fn resolve(&self, system_uri: &str) -> Result<&CodeSystemEnumeration> {
        self.get(system_uri)
            .ok_or_else(|| Error::UnknownSystem(system_uri.to_string()))
    }

    pub fn get(&self, system_uri: &str) -> Option<&CodeSystemEnumeration> {
        self.by_uri.get(system_uri).map(|&idx| &self.entries[idx].1)
    }

    /// Find an enumeration by type name, e.g. `ResourceType`.
    pub fn get_by_name(&self, name: &str) -> Option<&CodeSystemEnumeration> {
        self.by_name.get(name).map(|&idx| &self.entries[idx].1)
    }

    /// Resolve a system and look up a code in one step.
    pub fn value_of(&self, system_uri: &str, code: &str) -> Result<&EnumMember> {
        self.resolve(system_uri)?.value_of(code)
    }

    /// `(system URI, enumeration)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CodeSystemEnumeration)> + '_ {
        self.entries.iter().map(|(uri, e)| (uri.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fhir_version(&self) -> Option<&str> {
        self.fhir_version.as_deref()
    }

    /// Build a registry from a catalog document, validating every entry.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut registry = Registry {
            fhir_version: document.fhir_version,
            ..Self::default()
        };

        let mut members = 0usize;
        for definition in document.code_systems {
            let uri = definition.url.clone();
            let enumeration = CodeSystemEnumeration::new(definition)?;
            members += enumeration.len();
            registry.register(uri, enumeration)?;
        }

        tracing::debug!(
            fhir_version = registry.fhir_version.as_deref().unwrap_or("unspecified"),
            code_systems = registry.len(),
            members,
            "loaded code system catalog"
        );
        Ok(registry)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Serializable form; each definition carries the URI it is registered
    /// under.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            fhir_version: self.fhir_version.clone(),
            code_systems: self
                .entries
                .iter()
                .map(|(uri, enumeration)| {
                    let mut definition = enumeration.definition();
                    definition.url = uri.clone();
                    definition
                })
                .collect(),
        }
    }
}
