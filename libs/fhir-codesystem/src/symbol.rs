//! Symbolic-name derivation for wire values.
//!
//! A symbolic name is the identifier a code is known by in source code:
//! `entered-in-error` becomes `ENTERED_IN_ERROR`, `MORN.early` becomes
//! `MORN_EARLY`. Codes made only of comparison operators have no letters to
//! keep, so they are spelled out through a fixed table.

use crate::error::{Error, Result};
use phf::phf_map;

static OPERATOR_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "<" => "LESS_THAN",
    "<=" => "LESS_OR_EQUAL",
    ">" => "GREATER_THAN",
    ">=" => "GREATER_OR_EQUAL",
    "=" => "EQUAL",
    "!=" => "NOT_EQUAL",
};

/// Derive the symbolic name for a wire value.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_` and the result is
/// uppercased. A leading digit gets a `_` prefix (`4.0.1` -> `_4_0_1`).
/// Uniqueness within an enumeration is checked by the enumeration builder,
/// never repaired here.
pub fn symbolic_name(wire_value: &str) -> Result<String> {
    if let Some(name) = OPERATOR_NAMES.get(wire_value) {
        return Ok((*name).to_string());
    }

    let mut name = String::with_capacity(wire_value.len() + 1);
    for ch in wire_value.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            name.push(ch.to_ascii_uppercase());
        } else {
            name.push('_');
        }
    }

    if name.bytes().all(|b| b == b'_') {
        return Err(Error::InvalidCode(wire_value.to_string()));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    Ok(name)
}

/// Whether `s` has the shape of a name produced by [`symbolic_name`].
pub fn is_symbolic_name(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.first() {
        None => false,
        Some(b) if b.is_ascii_digit() => false,
        Some(_) => {
            bytes
                .iter()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || *b == b'_')
                && bytes.iter().any(|b| *b != b'_')
        }
    }
}
