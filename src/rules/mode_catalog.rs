//! Mode picker catalog
//!
//! Loaded once from the embedded `mode_catalog.yaml`. Only kind ids live in
//! the file so labels cannot drift from `ModeKind::label()`.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::mode_kind::ModeKind;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogGroup {
    pub group: String,
    pub kinds: Vec<ModeKind>,
}

const CATALOG_YAML: &str = include_str!("mode_catalog.yaml");

static CATALOG: Lazy<Vec<CatalogGroup>> = Lazy::new(|| {
    parse_catalog(CATALOG_YAML).unwrap_or_else(|err| {
        log::error!("{}", err);
        Vec::new()
    })
});

fn parse_catalog(yaml: &str) -> Result<Vec<CatalogGroup>, String> {
    serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse mode catalog: {}", e))
}

pub fn groups() -> &'static [CatalogGroup] {
    &CATALOG
}
