//! Display-name heuristics for document entities and leaves.

use crate::types::UNKNOWN_TYPE;
use serde_json::{Map, Value};

pub const UNNAMED_ENTITY: &str = "Unnamed Entity";

const MAX_LEAF_LABEL_CHARS: usize = 50;

const PRIMARY_KEYS: [&str; 3] = ["name", "title", "label"];
const ALIAS_KEYS: [&str; 4] = ["rdfs:label", "schema:name", "foaf:name", "dc:title"];
const NAME_PAIRS: [(&str, &str); 2] = [("givenName", "familyName"), ("firstName", "lastName")];
const NAME_HINTS: [&str; 3] = ["name", "title", "label"];

/// Resolve the display name of an entity.
///
/// Walks the fallback chain: well-known label keys, label aliases, person
/// name pairs, any other label-ish key, the tail of a URL id, the readable
/// type, and finally [`UNNAMED_ENTITY`].
#[must_use]
pub fn resolve_name(properties: &Map<String, Value>, id: Option<&str>, node_type: &str) -> String {
    for key in PRIMARY_KEYS.iter().chain(ALIAS_KEYS.iter()) {
        if let Some(text) = properties.get(*key).and_then(text_of) {
            return text;
        }
    }

    for (first, last) in NAME_PAIRS {
        let parts: Vec<String> = [first, last]
            .iter()
            .filter_map(|key| properties.get(*key).and_then(text_of))
            .collect();
        if !parts.is_empty() {
            return parts.join(" ");
        }
    }

    for (key, value) in properties {
        if key.starts_with('@') || is_checked_key(key) {
            continue;
        }
        let lower = key.to_lowercase();
        if !NAME_HINTS.iter().any(|hint| lower.contains(hint)) {
            continue;
        }
        if let Some(text) = text_of(value) {
            return text;
        }
    }

    if let Some(tail) = id.filter(|id| is_absolute_url(id)).and_then(url_tail) {
        return tail;
    }

    readable_type(node_type).unwrap_or_else(|| UNNAMED_ENTITY.to_string())
}

fn is_checked_key(key: &str) -> bool {
    PRIMARY_KEYS.contains(&key)
        || ALIAS_KEYS.contains(&key)
        || NAME_PAIRS.iter().any(|(a, b)| *a == key || *b == key)
}

/// Usable text of a name-like value: strings, numbers, `@value` objects,
/// or the first usable element of an array
#[must_use]
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("@value").and_then(text_of),
        Value::Array(items) => items.iter().find_map(text_of),
        Value::Null | Value::Bool(_) => None,
    }
}

#[must_use]
pub fn is_absolute_url(text: &str) -> bool {
    let lower = text.get(..8).unwrap_or(text).to_ascii_lowercase();
    let rest = if lower.starts_with("https://") {
        &text[8..]
    } else if lower.starts_with("http://") {
        &text[7..]
    } else {
        return false;
    };
    !rest.is_empty() && !text.chars().any(char::is_whitespace)
}

/// Cleaned last path segment (or fragment) of a URL; `None` for bare hosts
#[must_use]
pub fn url_tail(url: &str) -> Option<String> {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_query = after_scheme.split('?').next().unwrap_or(after_scheme);
    let trimmed = without_query.trim_end_matches(['/', '#']);
    let cut = trimmed.rfind(['/', '#'])?;
    let segment = &trimmed[cut + 1..];
    if segment.is_empty() {
        return None;
    }
    let cleaned = clean_label(segment);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Human form of a type label such as `schema:CreativeWork`
#[must_use]
pub fn readable_type(node_type: &str) -> Option<String> {
    let trimmed = node_type.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_TYPE {
        return None;
    }
    let local = trimmed
        .trim_end_matches(['/', '#'])
        .rsplit(['/', '#', ':'])
        .next()
        .unwrap_or(trimmed);
    let cleaned = clean_label(local);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Percent-decode, split on `-`/`_` and camel case, title-case each word
#[must_use]
pub fn clean_label(raw: &str) -> String {
    let decoded = percent_decode(raw);
    let mut spaced = String::with_capacity(decoded.len() + 8);
    let mut prev: Option<char> = None;
    for ch in decoded.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        if ch.is_uppercase() && prev.is_some_and(char::is_lowercase) {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Display label for a leaf literal
#[must_use]
pub fn leaf_label(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_LEAF_LABEL_CHARS {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(MAX_LEAF_LABEL_CHARS).collect();
    out.push('…');
    out
}
