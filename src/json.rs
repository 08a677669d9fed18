use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use serde::Serialize;
use serde_json::{Map, Value};

/// Canonicalize a JSON value by recursively sorting all object keys.
pub fn canonicalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted = Map::new();
            let mut keys: Vec<_> = map.keys().cloned().collect();
            keys.sort();
            for k in keys {
                sorted.insert(k.clone(), canonicalize_json(&map[&k]));
            }
            Value::Object(sorted)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(canonicalize_json).collect()),
        _ => value.clone(),
    }
}

/// Serialize a value to a stable JSON string with sorted keys.
pub fn stable_stringify<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let v = serde_json::to_value(value)?;
    serde_json::to_string(&canonicalize_json(&v))
}

/// Encode a smart query message the way the REST gateway expects it in the request path:
/// URL-safe base64 of the canonical JSON.
pub fn encode_query_msg<T: Serialize>(msg: &T) -> serde_json::Result<String> {
    Ok(URL_SAFE.encode(stable_stringify(msg)?))
}
