//! JSON Schema export for the tool's own output types.
//!
//! Schemas are generated with the schemars crate and exported via the
//! `schema` subcommand, so downstream consumers of the JSONL output can
//! validate against them.

use schemars::{schema_for, Schema};
use std::collections::BTreeMap;

/// All exported schemas. Uses BTreeMap for deterministic ordering
/// (important for diffable output).
pub fn all_schemas() -> BTreeMap<&'static str, Schema> {
    let mut schemas = BTreeMap::new();

    schemas.insert("dataset", schema_for!(crate::generator::Dataset));
    schemas.insert("metadata", schema_for!(crate::generator::Metadata));
    schemas.insert(
        "conversation_turn",
        schema_for!(crate::generator::ConversationTurn),
    );

    schemas
}

/// Generate a single schema by name.
pub fn get_schema(name: &str) -> Option<Schema> {
    all_schemas().remove(name)
}

/// List all available schema names.
pub fn schema_names() -> Vec<&'static str> {
    all_schemas().keys().copied().collect()
}
