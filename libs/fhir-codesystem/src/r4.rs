//! Embedded FHIR R4 (4.0.1) code system catalog

use crate::registry::Registry;
use once_cell::sync::Lazy;

pub const FHIR_VERSION: &str = "4.0.1";

/// Raw catalog document, as produced by the catalog generator.
pub const CATALOG_JSON: &str = include_str!("../data/r4/codesystems.json");

static R4_CATALOG: Lazy<Registry> = Lazy::new(|| {
    Registry::from_json(CATALOG_JSON).expect("failed to load embedded FHIR R4 code system catalog")
});

/// The R4 catalog, built on first access.
pub fn r4() -> &'static Registry {
    &R4_CATALOG
}

/// Canonical URIs of frequently used R4 code systems.
pub mod systems {
    pub const ADMINISTRATIVE_GENDER: &str = "http://hl7.org/fhir/administrative-gender";
    pub const ADMIT_SOURCE: &str = "http://terminology.hl7.org/CodeSystem/admit-source";
    pub const BUNDLE_TYPE: &str = "http://hl7.org/fhir/bundle-type";
    pub const DATA_TYPE: &str = "http://hl7.org/fhir/data-types";
    pub const EVENT_TIMING: &str = "http://hl7.org/fhir/event-timing";
    pub const FHIR_VERSION: &str = "http://hl7.org/fhir/FHIR-version";
    pub const OBSERVATION_STATUS: &str = "http://hl7.org/fhir/observation-status";
    pub const PUBLICATION_STATUS: &str = "http://hl7.org/fhir/publication-status";
    pub const QUANTITY_COMPARATOR: &str = "http://hl7.org/fhir/quantity-comparator";
    pub const RESOURCE_TYPE: &str = "http://hl7.org/fhir/resource-types";
}
