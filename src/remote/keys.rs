//! snake_case → camelCase rewriting of wire payload keys.
//!
//! The backend stores columns in snake_case while the in-app models use
//! camelCase. Keys listed in [`KEY_EXCEPTIONS`] are renamed explicitly; every
//! other key goes through [`snake_to_camel`].

use serde_json::{Map, Value};

/// Wire keys whose model name is not their plain camelCase spelling.
pub const KEY_EXCEPTIONS: &[(&str, &str)] = &[
    // column added by the backend on every row
    ("created_at", "created"),
    ("waveform", "waveformData"),
    ("file_types", "fileTypesIncluded"),
    ("cover_image_url", "coverImage"),
];

/// Uppercases the letter following each `_` or `-` and drops the separator.
/// A separator not followed by an ASCII letter is kept as-is.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' || c == '-' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_alphabetic() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Maps one wire key to its model name.
pub fn model_key(key: &str) -> String {
    KEY_EXCEPTIONS
        .iter()
        .find(|(wire, _)| *wire == key)
        .map(|(_, model)| model.to_string())
        .unwrap_or_else(|| snake_to_camel(key))
}

/// Recursively rewrites object keys. Arrays and nested objects are walked,
/// scalars pass through unchanged.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(model_key(&key), camelize_keys(value));
            }
            Value::Object(out)
        }
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("sub_genre"), "subGenre");
        assert_eq!(snake_to_camel("file_types_included"), "fileTypesIncluded");
        assert_eq!(snake_to_camel("kebab-case-key"), "kebabCaseKey");
        assert_eq!(snake_to_camel("already"), "already");
        assert_eq!(snake_to_camel("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_snake_to_camel_odd_separators() {
        assert_eq!(snake_to_camel("track_1"), "track_1");
        assert_eq!(snake_to_camel("trailing_"), "trailing_");
        assert_eq!(snake_to_camel("_leading"), "Leading");
        assert_eq!(snake_to_camel("a__b"), "a_B");
    }

    #[test]
    fn test_exceptions_take_precedence() {
        assert_eq!(model_key("created_at"), "created");
        assert_eq!(model_key("waveform"), "waveformData");
        assert_eq!(model_key("file_types"), "fileTypesIncluded");
        assert_eq!(model_key("cover_image"), "coverImage");
    }

    #[test]
    fn test_camelize_nested_structures() {
        let wire = json!({
            "id": "p1",
            "sub_genre": "Dark Trap",
            "created_at": "2024-03-01T10:00:00Z",
            "tracks": [
                {"id": "t1", "waveform_data": [0.1, 0.2], "files": {"mp3": "t1.mp3"}}
            ],
            "licenses": [
                {"file_types_included": ["MP3"], "contract_id": null}
            ],
            "tags": ["snake_case_value"]
        });

        let model = camelize_keys(wire);
        assert_eq!(
            model,
            json!({
                "id": "p1",
                "subGenre": "Dark Trap",
                "created": "2024-03-01T10:00:00Z",
                "tracks": [
                    {"id": "t1", "waveformData": [0.1, 0.2], "files": {"mp3": "t1.mp3"}}
                ],
                "licenses": [
                    {"fileTypesIncluded": ["MP3"], "contractId": null}
                ],
                "tags": ["snake_case_value"]
            })
        );
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(camelize_keys(json!(42)), json!(42));
        assert_eq!(camelize_keys(json!("some_value")), json!("some_value"));
        assert_eq!(camelize_keys(Value::Null), Value::Null);
    }
}
