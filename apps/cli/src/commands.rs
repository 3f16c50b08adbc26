//! Subcommand implementations

use anyhow::{Context, Result};
use ferrum_codegen::generators::GeneratorConfig;
use ferrum_codesystem::{BindingStrength, CodeMatch, CodeSystemEnumeration, Registry};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::CatalogConfig;

/// Embedded R4 catalog, or the file given with `--catalog`.
pub fn load_catalog(config: &CatalogConfig) -> Result<Cow<'static, Registry>> {
    match &config.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            let registry = Registry::from_json(&json)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            Ok(Cow::Owned(registry))
        }
        None => Ok(Cow::Borrowed(ferrum_codesystem::r4())),
    }
}

/// Look up an enumeration by system URI, falling back to its type name.
fn find<'a>(registry: &'a Registry, target: &str) -> Result<&'a CodeSystemEnumeration> {
    match registry.get_by_name(target) {
        Some(enumeration) => Ok(enumeration),
        None => Ok(registry.resolve(target)?),
    }
}

pub fn generate_rust(
    input: &Path,
    output: &Path,
    config: GeneratorConfig,
    out: &mut impl Write,
) -> Result<()> {
    let written = ferrum_codegen::generate_rust_from_path(input, output, config)?;
    writeln!(out, "wrote {written} modules to {}", output.display())?;
    Ok(())
}

pub fn generate_catalog(
    input: &Path,
    output: &Path,
    fhir_version: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let written = ferrum_codegen::generate_catalog_from_path(input, output, fhir_version)?;
    writeln!(out, "wrote {written} code systems to {}", output.display())?;
    Ok(())
}

/// Load the catalog (which validates every enumeration) and report counts.
pub fn check(catalog: &CatalogConfig, out: &mut impl Write) -> Result<()> {
    let registry = load_catalog(catalog)?;
    // a written-out catalog must load back to the same tables
    Registry::from_document(registry.to_document()).context("re-validating catalog")?;

    let concepts: usize = registry.iter().map(|(_, e)| e.len()).sum();
    write!(out, "ok: {} code systems, {concepts} concepts", registry.len())?;
    match registry.fhir_version() {
        Some(version) => writeln!(out, " (FHIR {version})")?,
        None => writeln!(out)?,
    }
    Ok(())
}

pub fn list(catalog: &CatalogConfig, target: Option<&str>, out: &mut impl Write) -> Result<()> {
    let registry = load_catalog(catalog)?;
    match target {
        None => {
            for (uri, enumeration) in registry.iter() {
                writeln!(out, "{}\t{}\t{uri}", enumeration.name(), enumeration.len())?;
            }
        }
        Some(target) => {
            let enumeration = find(&registry, target)?;
            for member in enumeration {
                writeln!(out, "{}\t{}", member.symbolic_name(), member.wire_value())?;
            }
        }
    }
    Ok(())
}

pub fn lookup(
    catalog: &CatalogConfig,
    target: &str,
    code: &str,
    binding: BindingStrength,
    out: &mut impl Write,
) -> Result<()> {
    let registry = load_catalog(catalog)?;
    let enumeration = find(&registry, target)?;

    match enumeration.resolve(code, binding)? {
        CodeMatch::Known(member) => {
            writeln!(out, "{} ({})", enumeration.name(), enumeration.source_uri())?;
            writeln!(out, "  code:   {}", member.wire_value())?;
            writeln!(out, "  symbol: {}", member.symbolic_name())?;
            if let Some(doc) = member.documentation() {
                writeln!(out, "  doc:    {doc}")?;
            }
        }
        CodeMatch::Unrecognized(raw) => {
            writeln!(
                out,
                "unrecognized code '{raw}' kept as-is ({binding} binding to {})",
                enumeration.name()
            )?;
        }
    }
    Ok(())
}
