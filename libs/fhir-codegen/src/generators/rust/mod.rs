//! Rust code generator for code system enumerations
//!
//! Emits one module per enumeration plus a `mod.rs` that declares and
//! re-exports them. Generated code depends on `phf` and the runtime crate
//! (and on `serde` when serde impls are enabled).

mod enums;

use crate::generators::{Generator, GeneratorConfig};
use crate::ir::TerminologyRegistry;
use anyhow::{bail, Result};
use heck::ToSnakeCase;
use std::collections::BTreeMap;

/// Output of the Rust generator
#[derive(Debug)]
pub struct RustOutput {
    /// Generated modules indexed by file name
    pub modules: BTreeMap<String, String>,
}

/// Rust code generator
pub struct RustGenerator {
    config: GeneratorConfig,
}

impl RustGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for RustGenerator {
    type Output = RustOutput;

    fn generate(&self, registry: &TerminologyRegistry) -> Result<Self::Output> {
        let mut modules = BTreeMap::new();
        // module name -> type name
        let mut declared: BTreeMap<String, String> = BTreeMap::new();

        for enumeration in registry.enumerations() {
            let type_name = enumeration.name();
            if !is_type_name(type_name) {
                bail!("enumeration name '{type_name}' is not a valid Rust type name");
            }

            let module = type_name.to_snake_case();
            if matches!(module.as_str(), "self" | "super" | "crate") {
                bail!("enumeration {type_name} maps to reserved module name '{module}'");
            }
            if let Some(existing) = declared.get(&module) {
                bail!("enumerations {existing} and {type_name} both map to module '{module}'");
            }

            modules.insert(
                format!("{module}.rs"),
                enums::generate_enum_module(enumeration, &self.config),
            );
            declared.insert(module, type_name.to_string());
        }

        modules.insert(
            "mod.rs".to_string(),
            self.generate_mod_rs(registry, &declared),
        );

        tracing::info!(
            enumerations = declared.len(),
            modules = modules.len(),
            "generated Rust code system enumerations"
        );
        Ok(RustOutput { modules })
    }
}

impl RustGenerator {
    fn generate_mod_rs(
        &self,
        registry: &TerminologyRegistry,
        declared: &BTreeMap<String, String>,
    ) -> String {
        let mut code = String::new();
        code.push_str(enums::GENERATED_HEADER);
        code.push('\n');

        code.push_str("//! FHIR code system enumerations\n");
        if self.config.generate_docs {
            code.push_str("//!\n");
            match registry.fhir_version() {
                Some(version) => code.push_str(&format!(
                    "//! {} closed code systems from FHIR {}.\n",
                    declared.len(),
                    version
                )),
                None => code.push_str(&format!("//! {} closed code systems.\n", declared.len())),
            }
        }
        code.push('\n');

        for module in declared.keys() {
            code.push_str(&format!("pub mod {};\n", module_ident(module)));
        }
        code.push('\n');
        for (module, type_name) in declared {
            code.push_str(&format!(
                "pub use {}::{};\n",
                module_ident(module),
                type_name
            ));
        }

        code
    }
}

fn is_type_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
        && name != "Self"
}

/// Module identifier, escaping keywords as raw identifiers (`r#use`).
fn module_ident(module: &str) -> String {
    const KEYWORDS: &[&str] = &[
        "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
        "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
        "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
        "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
        "unsized", "use", "virtual", "where", "while", "yield",
    ];
    if KEYWORDS.contains(&module) {
        format!("r#{module}")
    } else {
        module.to_string()
    }
}
