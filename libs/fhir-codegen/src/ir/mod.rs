//! Intermediate Representation (IR)
//!
//! Language-agnostic representation of the closed code systems found in the
//! input. Every enumeration is validated when it is added, so a generator
//! never sees duplicate wire values, colliding symbolic names, or a system
//! URI or type name that appears twice.

use anyhow::{Context, Result};
use ferrum_codesystem::{
    CatalogDocument, CodeSystemDefinition, CodeSystemEnumeration, Registry,
};

/// Registry of all enumerations extracted from the input
#[derive(Debug, Clone, Default)]
pub struct TerminologyRegistry {
    catalog: Registry,
}

impl TerminologyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fhir_version(fhir_version: impl Into<String>) -> Self {
        Self {
            catalog: Registry::with_fhir_version(fhir_version),
        }
    }

    /// Rebuild the IR from an existing catalog document.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let catalog = Registry::from_document(document).context("validating catalog document")?;
        Ok(Self { catalog })
    }

    /// Add a code system, failing on any invariant violation.
    pub fn add(&mut self, definition: CodeSystemDefinition) -> Result<()> {
        let name = definition.name.clone();
        let url = definition.url.clone();

        let enumeration = CodeSystemEnumeration::new(definition)
            .with_context(|| format!("building enumeration {name} ({url})"))?;
        self.catalog
            .register(url.clone(), enumeration)
            .with_context(|| format!("registering enumeration {name} ({url})"))?;
        Ok(())
    }

    /// Enumerations in insertion order
    pub fn enumerations(&self) -> impl Iterator<Item = &CodeSystemEnumeration> {
        self.catalog.iter().map(|(_, e)| e)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&CodeSystemEnumeration> {
        self.catalog.get_by_name(name)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn fhir_version(&self) -> Option<&str> {
        self.catalog.fhir_version()
    }

    /// The validated runtime catalog
    pub fn catalog(&self) -> &Registry {
        &self.catalog
    }
}
