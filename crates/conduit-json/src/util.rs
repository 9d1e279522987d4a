use serde_json::Value;

use crate::{JsonError, JsonObject, Result};

pub(crate) fn get<'a>(object: &'a JsonObject, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| JsonError::MissingKey(key.to_owned()))
}

pub(crate) fn get_i64(object: &JsonObject, key: &str) -> Result<i64> {
    get(object, key)?.as_i64().ok_or_else(|| wrong_type(key, "integer"))
}

pub(crate) fn get_str<'a>(object: &'a JsonObject, key: &str) -> Result<&'a str> {
    get(object, key)?.as_str().ok_or_else(|| wrong_type(key, "string"))
}

pub(crate) fn wrong_type(key: &str, expected: &'static str) -> JsonError {
    JsonError::WrongType {
        key: key.to_owned(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_typed_lookups() {
        let value = json!({ "id": 7, "name": "fw", "list": [] });
        let object = value.as_object().expect("object");

        assert_eq!(get_i64(object, "id").expect("id"), 7);
        assert_eq!(get_str(object, "name").expect("name"), "fw");
        assert!(get(object, "list").expect("list").is_array());
    }

    #[test]
    fn test_lookup_errors_name_the_key() {
        let value = json!({ "id": "seven" });
        let object = value.as_object().expect("object");

        let missing = get_str(object, "name").expect_err("missing");
        let wrong = get_i64(object, "id").expect_err("wrong type");

        assert!(matches!(missing, JsonError::MissingKey(key) if key == "name"));
        assert!(matches!(
            wrong,
            JsonError::WrongType { key, expected: "integer" } if key == "id"
        ));
    }
}
