//! Parser for FHIR CodeSystems
//!
//! Extracts closed code systems from FHIR JSON (a single `CodeSystem`, a
//! definitions `Bundle`, or a directory of either) and builds the IR. Code
//! systems that do not enumerate their codes (`not-present`, `example`,
//! `fragment`, supplements) are skipped.

use crate::ir::TerminologyRegistry;
use anyhow::{anyhow, Context, Result};
use ferrum_codesystem::{CodeSystemDefinition, ConceptDefinition};
use ferrum_models::{Bundle, CodeSystem};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a JSON file or a directory of JSON files.
pub fn parse_path(path: &Path, registry: &mut TerminologyRegistry) -> Result<usize> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)
            .with_context(|| format!("reading directory {}", path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        files.sort();

        let mut added = 0;
        for file in files {
            added += parse_file(&file, registry)?;
        }
        Ok(added)
    } else {
        parse_file(path, registry)
    }
}

fn parse_file(path: &Path, registry: &mut TerminologyRegistry) -> Result<usize> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    parse_value(&value, registry).with_context(|| format!("processing {}", path.display()))
}

/// Add every closed code system in a `Bundle` or `CodeSystem` resource.
///
/// Returns the number of enumerations added.
pub fn parse_value(value: &Value, registry: &mut TerminologyRegistry) -> Result<usize> {
    match value.get("resourceType").and_then(|v| v.as_str()) {
        Some("Bundle") => {
            let bundle = Bundle::from_value(value)?;
            parse_bundle(&bundle, registry)
        }
        Some("CodeSystem") => {
            let code_system: CodeSystem = serde_json::from_value(value.clone())?;
            Ok(add_code_system(&code_system, registry)? as usize)
        }
        other => {
            tracing::debug!(resource_type = ?other, "skipping non-terminology resource");
            Ok(0)
        }
    }
}

pub fn parse_bundle(bundle: &Bundle, registry: &mut TerminologyRegistry) -> Result<usize> {
    let mut added = 0;
    for code_system in bundle.code_systems()? {
        if add_code_system(&code_system, registry)? {
            added += 1;
        }
    }
    Ok(added)
}

fn add_code_system(code_system: &CodeSystem, registry: &mut TerminologyRegistry) -> Result<bool> {
    match to_definition(code_system)? {
        Some(definition) => {
            registry.add(definition)?;
            Ok(true)
        }
        None => {
            tracing::debug!(
                url = %code_system.url,
                content = ?code_system.content,
                "skipping code system without a closed concept list"
            );
            Ok(false)
        }
    }
}

/// Convert an enumerated CodeSystem into a catalog definition.
///
/// Nested concepts are flattened depth-first. Returns `None` for code
/// systems that do not list all of their codes.
pub fn to_definition(code_system: &CodeSystem) -> Result<Option<CodeSystemDefinition>> {
    if !code_system.is_enumerated() {
        return Ok(None);
    }

    let name = type_name(code_system)
        .ok_or_else(|| anyhow!("CodeSystem {} has no usable name", code_system.url))?;

    Ok(Some(CodeSystemDefinition {
        name,
        description: code_system.description.clone(),
        url: code_system.url.clone(),
        value_set: code_system.value_set.clone(),
        version: code_system.version.clone(),
        concepts: code_system
            .flattened_concepts()
            .into_iter()
            .map(|c| ConceptDefinition {
                code: c.code.clone(),
                definition: c.definition.clone().or_else(|| c.display.clone()),
            })
            .collect(),
    }))
}

/// Type name for a code system: `name`, else `title`, else `id`, reduced to
/// PascalCase with non-alphanumerics removed.
pub fn type_name(code_system: &CodeSystem) -> Option<String> {
    [&code_system.name, &code_system.title, &code_system.id]
        .into_iter()
        .flatten()
        .map(|raw| pascal_case(raw))
        .find(|name| name.starts_with(|c: char| c.is_ascii_alphabetic()))
}

fn pascal_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = true;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrum_models::{CodeSystemContentMode, PublicationStatus};
    use serde_json::json;

    #[test]
    fn test_type_name_keeps_existing_pascal_case() {
        let mut cs = CodeSystem::new(
            "http://hl7.org/fhir/FHIR-version",
            PublicationStatus::Active,
            CodeSystemContentMode::Complete,
        );
        cs.name = Some("FHIRVersion".to_string());
        assert_eq!(type_name(&cs).as_deref(), Some("FHIRVersion"));
    }

    #[test]
    fn test_type_name_fallbacks() {
        let mut cs = CodeSystem::new(
            "http://hl7.org/fhir/sort-direction",
            PublicationStatus::Active,
            CodeSystemContentMode::Complete,
        );
        cs.title = Some("Sort Direction".to_string());
        assert_eq!(type_name(&cs).as_deref(), Some("SortDirection"));

        cs.title = None;
        cs.id = Some("sort-direction".to_string());
        assert_eq!(type_name(&cs).as_deref(), Some("SortDirection"));

        cs.id = Some("123".to_string());
        assert_eq!(type_name(&cs), None);
    }

    #[test]
    fn test_parse_value_code_system() {
        let mut registry = TerminologyRegistry::new();
        let added = parse_value(
            &json!({
                "resourceType": "CodeSystem",
                "url": "http://hl7.org/fhir/link-type",
                "name": "LinkType",
                "status": "active",
                "content": "complete",
                "concept": [
                    { "code": "replaced-by", "display": "Replaced-by" },
                    { "code": "refer", "definition": "The patient resource containing this link is in use and valid." }
                ]
            }),
            &mut registry,
        )
        .unwrap();

        assert_eq!(added, 1);
        let link = registry.get_by_name("LinkType").unwrap();
        assert_eq!(
            link.value_of("replaced-by").unwrap().documentation(),
            Some("Replaced-by")
        );
    }

    #[test]
    fn test_parse_value_skips_other_resources() {
        let mut registry = TerminologyRegistry::new();
        let added = parse_value(
            &json!({ "resourceType": "ValueSet", "url": "http://hl7.org/fhir/ValueSet/x" }),
            &mut registry,
        )
        .unwrap();
        assert_eq!(added, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_collision_in_input_fails() {
        let mut registry = TerminologyRegistry::new();
        let err = parse_value(
            &json!({
                "resourceType": "CodeSystem",
                "url": "urn:clash",
                "name": "Clash",
                "status": "draft",
                "content": "complete",
                "concept": [{ "code": "MORN.early" }, { "code": "MORN-early" }]
            }),
            &mut registry,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ferrum_codesystem::Error>(),
            Some(ferrum_codesystem::Error::SymbolicNameCollision { .. })
        ));
    }
}
