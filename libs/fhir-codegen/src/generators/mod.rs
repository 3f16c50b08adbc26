//! Generators over the terminology IR
//!
//! Each output format has its own module that implements the `Generator` trait.

pub mod catalog;
pub mod rust;

use crate::ir::TerminologyRegistry;
use anyhow::Result;

/// Trait that all generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate output from the terminology registry
    fn generate(&self, registry: &TerminologyRegistry) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Whether to generate documentation comments
    pub generate_docs: bool,
    /// Whether to generate serde impls
    pub generate_serde: bool,
    /// Crate path the generated code uses for the runtime types
    pub runtime_crate: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            generate_serde: true,
            runtime_crate: "ferrum_codesystem".to_string(),
        }
    }
}
