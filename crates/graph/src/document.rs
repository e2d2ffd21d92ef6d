//! Input boundary: parsing, flattening and JSON-LD keyword lookup.

use crate::builder::GraphBuilder;
use crate::error::Result;
use crate::types::Graph;
use serde_json::{Map, Value};

/// Nesting limit for recursive descent into a document
pub const MAX_DEPTH: usize = 128;

const ID_KEYS: [&str; 2] = ["@id", "id"];
const TYPE_KEYS: [&str; 2] = ["@type", "type"];

/// Parse raw text into a JSON value.
///
/// This is the only fallible step of the pipeline; anything that parses is
/// accepted by the builder.
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Parse and build in one step
pub fn build_from_str(text: &str) -> Result<Graph> {
    let document = parse_document(text)?;
    Ok(GraphBuilder::new().build(&document))
}

/// Expand arrays and `@graph` containers into a flat list of entity objects
/// in document order
#[must_use]
pub fn flatten_entities(document: &Value) -> Vec<&Map<String, Value>> {
    let mut out = Vec::new();
    collect_entities(document, &mut out, 0);
    out
}

fn collect_entities<'a>(value: &'a Value, out: &mut Vec<&'a Map<String, Value>>, depth: usize) {
    if depth > MAX_DEPTH {
        log::warn!("Document nesting exceeds {MAX_DEPTH} levels, skipping deeper containers");
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                collect_entities(item, out, depth + 1);
            }
        }
        Value::Object(map) => match map.get("@graph") {
            Some(graph) => collect_entities(graph, out, depth + 1),
            None => out.push(map),
        },
        _ => {}
    }
}

/// Keys that describe an object rather than relate it: JSON-LD keywords and
/// the plain `id`/`type` aliases
#[must_use]
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with('@') || ID_KEYS.contains(&key) || TYPE_KEYS.contains(&key)
}

/// Explicit identifier of an object (`@id`, then `id`)
#[must_use]
pub fn entity_id(object: &Map<String, Value>) -> Option<String> {
    ID_KEYS.iter().find_map(|key| match object.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Explicit type of an object (`@type`, then `type`); first entry of an array
#[must_use]
pub fn entity_type(object: &Map<String, Value>) -> Option<String> {
    TYPE_KEYS.iter().find_map(|key| type_text(object.get(*key)?))
}

fn type_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => items.iter().find_map(type_text),
        _ => None,
    }
}
