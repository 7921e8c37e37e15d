use serde_json::{Map, Value};

/// A loosely typed JSON object as served by the places endpoint.
pub type Record = Map<String, Value>;

/// Returns the value of the first candidate key present in `record`.
///
/// A key mapped to `null` is present: only a missing key falls through
/// to the next candidate.
pub fn resolve<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(*key))
}

pub fn resolve_or<'a>(record: &'a Record, keys: &[&str], fallback: &'a Value) -> &'a Value {
    resolve(record, keys).unwrap_or(fallback)
}

/// Same as [`resolve`] but flattened to display text, empty when no key matches.
pub fn resolve_text(record: &Record, keys: &[&str]) -> String {
    resolve(record, keys).map(value_text).unwrap_or_default()
}

pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn first_present_key_wins_for_every_order() {
        let rec = record(json!({ "nome": "A", "titulo": "B", "name": "C" }));

        let table: &[(&[&str], &str)] = &[
            (&["nome", "titulo", "name"], "A"),
            (&["nome", "name", "titulo"], "A"),
            (&["titulo", "nome", "name"], "B"),
            (&["titulo", "name", "nome"], "B"),
            (&["name", "nome", "titulo"], "C"),
            (&["name", "titulo", "nome"], "C"),
            (&["missing", "name", "nome"], "C"),
            (&["missing", "other", "titulo"], "B"),
        ];

        for (keys, expected) in table {
            assert_eq!(resolve_text(&rec, keys), *expected, "keys {keys:?}");
        }
    }

    #[test]
    fn absent_keys_fall_back() {
        let rec = record(json!({ "id": 7 }));
        let fallback = json!("sem nome");

        assert_eq!(resolve(&rec, &["nome", "name"]), None);
        assert_eq!(resolve_or(&rec, &["nome", "name"], &fallback), &fallback);
        assert_eq!(resolve_text(&rec, &["nome", "name"]), "");
        assert_eq!(resolve_text(&rec, &[]), "");
    }

    #[test]
    fn null_counts_as_present() {
        let rec = record(json!({ "nome": null, "name": "ignored" }));

        assert_eq!(resolve(&rec, &["nome", "name"]), Some(&Value::Null));
        assert_eq!(resolve_text(&rec, &["nome", "name"]), "");
    }

    #[test]
    fn non_string_values_are_spelled_out() {
        let rec = record(json!({ "id": 12, "ativo": true, "tags": ["a"] }));

        assert_eq!(resolve_text(&rec, &["id", "ID"]), "12");
        assert_eq!(resolve_text(&rec, &["ativo"]), "true");
        assert_eq!(resolve_text(&rec, &["tags"]), r#"["a"]"#);
    }
}
