//! Emits one typed enum module per enumeration.
//!
//! Variants are named by their symbolic names (`ENTERED_IN_ERROR`,
//! `_4_0_1`) so the generated identifiers match the runtime tables exactly.

use crate::generators::GeneratorConfig;
use ferrum_codesystem::CodeSystemEnumeration;

pub(super) const GENERATED_HEADER: &str = "// @generated by ferrum-codegen\n// DO NOT EDIT MANUALLY\n";

pub(super) fn generate_enum_module(
    enumeration: &CodeSystemEnumeration,
    config: &GeneratorConfig,
) -> String {
    let name = enumeration.name();
    let rt = config.runtime_crate.as_str();
    let mut code = String::new();

    code.push_str(GENERATED_HEADER);
    code.push('\n');
    code.push_str(&format!("//! {name} code system\n"));
    code.push_str("#![allow(non_camel_case_types)]\n");
    code.push_str("#![allow(clippy::upper_case_acronyms)]\n\n");

    code.push_str(&format!("use {rt}::CodeSystemEnum;\n"));
    code.push_str("use std::fmt;\n");
    code.push_str("use std::str::FromStr;\n\n");

    // enum declaration
    if config.generate_docs {
        if let Some(description) = enumeration.description() {
            push_doc(&mut code, "", description);
            code.push_str("///\n");
        }
        code.push_str(&format!("/// Code system: `{}`\n", enumeration.source_uri()));
    }
    code.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    code.push_str(&format!("pub enum {name} {{\n"));
    for member in enumeration.members() {
        if config.generate_docs {
            if let Some(doc) = member.documentation() {
                push_doc(&mut code, "    ", doc);
            }
        }
        code.push_str(&format!("    {},\n", member.symbolic_name()));
    }
    code.push_str("}\n\n");

    // wire value lookup
    code.push_str(&format!(
        "static CODES: phf::Map<&'static str, {name}> = phf::phf_map! {{\n"
    ));
    for member in enumeration.members() {
        code.push_str(&format!(
            "    {:?} => {name}::{},\n",
            member.wire_value(),
            member.symbolic_name()
        ));
    }
    code.push_str("};\n\n");

    // inherent constants
    code.push_str(&format!("impl {name} {{\n"));
    match enumeration.value_set_uri() {
        Some(uri) => code.push_str(&format!(
            "    pub const VALUE_SET: Option<&'static str> = Some({uri:?});\n"
        )),
        None => code.push_str("    pub const VALUE_SET: Option<&'static str> = None;\n"),
    }
    code.push_str(&format!("\n    const MEMBERS: &'static [{name}] = &[\n"));
    for member in enumeration.members() {
        code.push_str(&format!("        {name}::{},\n", member.symbolic_name()));
    }
    code.push_str("    ];\n}\n\n");

    // trait impl
    code.push_str(&format!("impl CodeSystemEnum for {name} {{\n"));
    code.push_str(&format!("    const NAME: &'static str = {name:?};\n"));
    code.push_str(&format!(
        "    const SYSTEM: &'static str = {:?};\n\n",
        enumeration.source_uri()
    ));
    code.push_str("    fn members() -> &'static [Self] {\n        Self::MEMBERS\n    }\n\n");

    code.push_str("    fn as_code(&self) -> &'static str {\n        match self {\n");
    for member in enumeration.members() {
        code.push_str(&format!(
            "            {name}::{} => {:?},\n",
            member.symbolic_name(),
            member.wire_value()
        ));
    }
    code.push_str("        }\n    }\n\n");

    code.push_str("    fn symbolic_name(&self) -> &'static str {\n        match self {\n");
    for member in enumeration.members() {
        code.push_str(&format!(
            "            {name}::{} => {:?},\n",
            member.symbolic_name(),
            member.symbolic_name()
        ));
    }
    code.push_str("        }\n    }\n\n");

    code.push_str(&format!(
        "    fn from_code(code: &str) -> {rt}::Result<Self> {{\n        CODES\n            .get(code)\n            .copied()\n            .ok_or_else(|| {rt}::typed::unknown_code::<Self>(code))\n    }}\n"
    ));

    if config.generate_docs {
        code.push_str("\n    fn documentation(&self) -> Option<&'static str> {\n        match self {\n");
        for member in enumeration.members() {
            match member.documentation() {
                Some(doc) => code.push_str(&format!(
                    "            {name}::{} => Some({doc:?}),\n",
                    member.symbolic_name()
                )),
                None => code.push_str(&format!(
                    "            {name}::{} => None,\n",
                    member.symbolic_name()
                )),
            }
        }
        code.push_str("        }\n    }\n");
    }
    code.push_str("}\n\n");

    // std conversions
    code.push_str(&format!(
        "impl fmt::Display for {name} {{\n    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{\n        f.write_str(self.as_code())\n    }}\n}}\n\n"
    ));
    code.push_str(&format!(
        "impl FromStr for {name} {{\n    type Err = {rt}::Error;\n\n    fn from_str(s: &str) -> Result<Self, Self::Err> {{\n        Self::from_code(s)\n    }}\n}}\n"
    ));

    if config.generate_serde {
        code.push_str(&format!(
            "\nimpl serde::Serialize for {name} {{\n    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {{\n        {rt}::typed::serialize_code(self, serializer)\n    }}\n}}\n"
        ));
        code.push_str(&format!(
            "\nimpl<'de> serde::Deserialize<'de> for {name} {{\n    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {{\n        {rt}::typed::deserialize_code(deserializer)\n    }}\n}}\n"
        ));
    }

    code
}

fn push_doc(code: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            code.push_str(&format!("{indent}///\n"));
        } else {
            code.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}
