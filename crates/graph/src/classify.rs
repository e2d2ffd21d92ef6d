use crate::document::entity_id;
use crate::naming::is_absolute_url;
use serde_json::{Map, Number, Value};

/// What a single property value turns into in the graph
#[derive(Debug, Clone, PartialEq)]
pub enum RelationshipValue<'a> {
    /// Object carrying its own identifier
    EntityRef {
        id: String,
        object: &'a Map<String, Value>,
    },
    /// Object without identifier, becomes a contained child
    Nested(&'a Map<String, Value>),
    /// Absolute http(s) URL
    UrlRef(&'a str),
    StringLeaf(&'a str),
    NumericLeaf(&'a Number),
    BooleanLeaf(bool),
    /// Nothing to materialize
    Empty,
}

/// Classify one (non-array) property value.
///
/// JSON-LD value objects (`{"@value": ...}`) are unwrapped first. Arrays are
/// fanned out by the caller and classify as [`RelationshipValue::Empty`].
#[must_use]
pub fn classify(value: &Value) -> RelationshipValue<'_> {
    match value {
        Value::Null | Value::Array(_) => RelationshipValue::Empty,
        Value::Bool(b) => RelationshipValue::BooleanLeaf(*b),
        Value::Number(n) => RelationshipValue::NumericLeaf(n),
        Value::String(s) => {
            let text = s.trim();
            if text.is_empty() {
                RelationshipValue::Empty
            } else if is_absolute_url(text) {
                RelationshipValue::UrlRef(text)
            } else {
                RelationshipValue::StringLeaf(text)
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                return RelationshipValue::Empty;
            }
            if let Some(inner) = map.get("@value") {
                return classify(inner);
            }
            match entity_id(map) {
                Some(id) => RelationshipValue::EntityRef { id, object: map },
                None => RelationshipValue::Nested(map),
            }
        }
    }
}
