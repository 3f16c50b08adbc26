//! FHIR Code System Generator
//!
//! Reads FHIR `CodeSystem` resources (single resources, definition bundles,
//! or directories of either) and generates closed enumerations from them.
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Parser**: Extracts closed code systems from FHIR JSON
//! 2. **IR (Intermediate Representation)**: Validated enumeration tables
//! 3. **Generators**: Output-specific generation from the IR (typed Rust
//!    enums, or the JSON catalog the runtime crate loads)
//!
//! Every invariant is checked while building the IR, so a duplicate code or
//! a symbolic-name collision fails the run before anything is written.

pub mod generators;
pub mod ir;
pub mod parser;
pub mod utils;

use std::path::Path;

use anyhow::{Context, Result};
use generators::catalog::{self, CatalogGenerator};
use generators::rust::RustGenerator;
use generators::GeneratorConfig;
use ir::TerminologyRegistry;

/// Main entry point for code generation
pub struct CodeGenerator {
    registry: TerminologyRegistry,
}

impl CodeGenerator {
    /// Create a code generator from a JSON file or directory of JSON files
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut registry = TerminologyRegistry::new();
        let added = parser::parse_path(path, &mut registry)?;
        tracing::info!(path = %path.display(), enumerations = added, "parsed code systems");
        Ok(Self { registry })
    }

    /// Get the terminology registry
    pub fn registry(&self) -> &TerminologyRegistry {
        &self.registry
    }

    /// Generate output with a specific generator
    pub fn generate<G: generators::Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.registry)
    }
}

/// Convenience helper to run the Rust code generator over FHIR JSON input.
///
/// Returns the number of generated modules.
pub fn generate_rust_from_path(
    input: &Path,
    output_dir: &Path,
    config: GeneratorConfig,
) -> Result<usize> {
    let codegen = CodeGenerator::from_path(input).context("building terminology registry")?;

    let generator = RustGenerator::new(config);
    let output = codegen
        .generate(generator)
        .context("running Rust generator")?;

    utils::write_modules(output_dir, &output.modules)?;

    Ok(output.modules.len())
}

/// Convenience helper to write the JSON catalog for FHIR JSON input.
///
/// Returns the number of code systems written.
pub fn generate_catalog_from_path(
    input: &Path,
    output_file: &Path,
    fhir_version: Option<&str>,
) -> Result<usize> {
    let codegen = CodeGenerator::from_path(input).context("building terminology registry")?;

    let generator = match fhir_version {
        Some(version) => CatalogGenerator::with_fhir_version(version),
        None => CatalogGenerator::new(),
    };
    let document = codegen
        .generate(generator)
        .context("running catalog generator")?;

    utils::write_file(output_file, &catalog::to_json(&document)?)?;

    Ok(document.code_systems.len())
}
