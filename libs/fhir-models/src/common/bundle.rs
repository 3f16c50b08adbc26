//! FHIR Bundle model
//!
//! Definition bundles (e.g. `valuesets.json` from the FHIR distribution) are
//! how code systems are shipped. Entries keep their resources as raw JSON so
//! a bundle can be scanned without typing every resource in it.

use super::code_system::CodeSystem;
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// FHIR Bundle resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type - always "Bundle"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<BundleEntry>>,

    /// Additional content beyond core fields (meta, timestamp, links, ...)
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Bundle".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,

    /// request, response, search and other entry content
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl BundleEntry {
    pub fn resource_type(&self) -> Option<&str> {
        self.resource
            .as_ref()
            .and_then(|r| r.get("resourceType"))
            .and_then(Value::as_str)
    }
}

impl Bundle {
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            id: None,
            bundle_type,
            entry: None,
            extensions: HashMap::new(),
        }
    }

    /// Parse from JSON Value
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(Error::from)
    }

    pub fn entries(&self) -> &[BundleEntry] {
        self.entry.as_deref().unwrap_or(&[])
    }

    pub fn entry_count(&self) -> usize {
        self.entries().len()
    }

    /// Append a resource as a new entry.
    pub fn add_resource(&mut self, resource: Value) {
        let full_url = match (
            resource.get("resourceType").and_then(Value::as_str),
            resource.get("id").and_then(Value::as_str),
        ) {
            (Some(rt), Some(id)) => Some(format!("{rt}/{id}")),
            _ => None,
        };
        self.entry.get_or_insert_with(Vec::new).push(BundleEntry {
            full_url,
            resource: Some(resource),
            extensions: HashMap::new(),
        });
    }

    /// Raw resources whose `resourceType` equals `resource_type`.
    pub fn resources_of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries()
            .iter()
            .filter(move |e| e.resource_type() == Some(resource_type))
            .filter_map(|e| e.resource.as_ref())
    }

    /// Decode every CodeSystem entry.
    pub fn code_systems(&self) -> Result<Vec<CodeSystem>> {
        self.resources_of_type("CodeSystem")
            .map(|r| {
                serde_json::from_value(r.clone()).map_err(|e| {
                    let url = r.get("url").and_then(Value::as_str).unwrap_or("<no url>");
                    Error::InvalidResource(format!("CodeSystem {url}: {e}"))
                })
            })
            .collect()
    }
}
