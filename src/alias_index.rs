use crate::table::ReferenceTable;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Canonical identity map over the master reference table.
///
/// Every non-blank name variant of a record (identifier, product name,
/// parameter name, alias — in that order) is registered case-insensitively
/// against the record's canonical identifier. A variant already claimed by an
/// earlier record is never rebound; attribute sets for a duplicated canonical
/// identifier are overwritten by the later record.
///
/// Lookup here is exact (case-insensitive) only. Fuzzy resolution is layered
/// on top by matching against `variant_keys`, which preserves registration
/// order so downstream tie-breaking stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    variants: HashMap<String, String>,
    variant_order: Vec<String>,
    attributes: HashMap<String, HashMap<String, String>>,
    schema: HashSet<String>,
}

impl AliasIndex {
    pub fn build(table: &ReferenceTable) -> Self {
        let mut index = AliasIndex {
            schema: table.columns().iter().cloned().collect(),
            ..Default::default()
        };

        for record in table.records() {
            let canonical = record.canonical_id().to_string();
            for variant in record.variants() {
                let variant = variant.trim();
                if variant.is_empty() {
                    continue;
                }
                let key = variant.to_lowercase();
                if !index.variants.contains_key(&key) {
                    index.variant_order.push(key.clone());
                    index.variants.insert(key, canonical.clone());
                }
            }
            // Last record wins for a repeated canonical identifier.
            index
                .attributes
                .insert(canonical, record.attributes.clone());
        }

        debug!(
            variants = index.variant_order.len(),
            entities = index.attributes.len(),
            "alias index built"
        );
        index
    }

    /// Exact case-insensitive variant lookup.
    pub fn resolve_variant(&self, text: &str) -> Option<&str> {
        self.variants
            .get(&text.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Attribute map for a canonical identifier.
    pub fn attributes_of(&self, identifier: &str) -> Option<&HashMap<String, String>> {
        self.attributes.get(identifier)
    }

    /// All registered variant keys, in first-registration order. This is the
    /// vocabulary fuzzy label resolution runs against.
    pub fn variant_keys(&self) -> &[String] {
        &self.variant_order
    }

    /// Whether the reference table schema carries the given attribute column.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.schema.contains(name)
    }
}
