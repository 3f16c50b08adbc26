//! Catalog generator
//!
//! Emits the JSON catalog document the runtime crate embeds or loads.

use crate::generators::Generator;
use crate::ir::TerminologyRegistry;
use anyhow::{Context, Result};
use ferrum_codesystem::CatalogDocument;

#[derive(Debug, Clone, Default)]
pub struct CatalogGenerator {
    fhir_version: Option<String>,
}

impl CatalogGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the FHIR version recorded in the document.
    pub fn with_fhir_version(fhir_version: impl Into<String>) -> Self {
        Self {
            fhir_version: Some(fhir_version.into()),
        }
    }
}

impl Generator for CatalogGenerator {
    type Output = CatalogDocument;

    /// Code systems are sorted by name so regenerated catalogs diff cleanly.
    fn generate(&self, registry: &TerminologyRegistry) -> Result<Self::Output> {
        let mut document = registry.catalog().to_document();
        document.code_systems.sort_by(|a, b| a.name.cmp(&b.name));
        if self.fhir_version.is_some() {
            document.fhir_version = self.fhir_version.clone();
        }
        Ok(document)
    }
}

/// Pretty-printed JSON with a trailing newline.
pub fn to_json(document: &CatalogDocument) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document).context("serializing catalog")?;
    json.push('\n');
    Ok(json)
}
