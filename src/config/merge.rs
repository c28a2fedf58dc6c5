//! Deep merge for layered configuration documents.
//!
//! Implements field-by-field merging where higher tier values override lower
//! tier values. Arrays are replaced entirely, not concatenated: an overlay
//! that lists `xref` keys replaces the base list rather than appending to it.

use serde_json::Value;

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans, nulls are replaced entirely
/// - If overlay is null, the base value is preserved (null means "not specified")
///
/// # Example
/// ```
/// use serde_json::json;
/// use respec_config::config::deep_merge;
///
/// let base = json!({
///     "specStatus": "ED",
///     "lint": { "no-unused-vars": true },
///     "xref": ["webrtc", "html"]
/// });
/// let overlay = json!({
///     "specStatus": "WD",
///     "xref": ["webrtc", "html", "dom"]
/// });
/// let result = deep_merge(base, overlay);
/// // Result: specStatus "WD", lint preserved, xref replaced with the longer list
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both are objects: merge recursively
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        // Overlay is null: preserve base (null means "not specified")
        (base, Value::Null) => base,
        // Any other case: overlay replaces base entirely
        (_, overlay) => overlay,
    }
}

/// Merge multiple documents in order, with later documents taking precedence.
///
/// Equivalent to folding `deep_merge` over the list.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_overrides_scalars() {
        let base = json!({"specStatus": "ED", "shortName": "example"});
        let overlay = json!({"specStatus": "WD"});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"specStatus": "WD", "shortName": "example"}));
    }

    #[test]
    fn test_nested_objects_merge_field_by_field() {
        let base = json!({
            "lint": {"no-unused-vars": true, "check-punctuation": false},
            "group": "webrtc"
        });
        let overlay = json!({
            "lint": {"check-punctuation": true}
        });
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({
                "lint": {"no-unused-vars": true, "check-punctuation": true},
                "group": "webrtc"
            })
        );
    }

    #[test]
    fn test_arrays_replaced_not_merged() {
        let base = json!({"xref": ["webrtc", "html"]});
        let overlay = json!({"xref": ["webrtc", "html", "dom"]});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"xref": ["webrtc", "html", "dom"]}));
    }

    #[test]
    fn test_null_preserves_base() {
        let base = json!({"group": "webrtc", "lint": {"no-unused-vars": true}});
        let overlay = json!({"group": null, "lint": {"no-unused-vars": null}});
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({"group": "webrtc", "lint": {"no-unused-vars": true}})
        );
    }

    #[test]
    fn test_overlay_introduces_new_keys() {
        let base = json!({"specStatus": "unofficial", "shortName": "webrtc-icecontroller"});
        let overlay = json!({"lint": {"no-unused-vars": true}});
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({
                "specStatus": "unofficial",
                "shortName": "webrtc-icecontroller",
                "lint": {"no-unused-vars": true}
            })
        );
    }

    #[test]
    fn test_merge_all() {
        let values = vec![
            json!({"shortName": "example"}),
            json!({"specStatus": "ED"}),
            json!({"specStatus": "WD", "group": "webrtc"}),
        ];
        let result = deep_merge_all(values);
        assert_eq!(
            result,
            json!({"shortName": "example", "specStatus": "WD", "group": "webrtc"})
        );
    }

    #[test]
    fn test_overlay_replaces_primitive_with_object() {
        let base = json!({"xref": "webrtc"});
        let overlay = json!({"xref": {"profile": "web-platform"}});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"xref": {"profile": "web-platform"}}));
    }
}
