use serde_json::Value;

use conduit_model::ResourceBundle;

use crate::util::wrong_type;
use crate::{JsonObject, Result};

pub fn extract_resource_bundle(bundle: &ResourceBundle) -> Value {
    Value::Object(
        bundle
            .iter()
            .map(|(key, label)| (key.clone(), Value::String(label.clone())))
            .collect::<JsonObject>(),
    )
}

/// decode a flat object of labels; every label must be a string
pub fn restore_resource_bundle(value: &Value) -> Result<ResourceBundle> {
    let object = value.as_object().ok_or_else(|| wrong_type("", "object"))?;
    object
        .iter()
        .map(|(key, label)| match label {
            Value::String(label) => Ok((key.as_str(), label.as_str())),
            _ => Err(wrong_type(key, "string")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::JsonError;

    #[test]
    fn test_extract_and_restore() {
        //given
        let bundle: ResourceBundle = [("host.label", "Host"), ("host.help", "Server name")]
            .into_iter()
            .collect();

        //when
        let json = extract_resource_bundle(&bundle);
        let restored = restore_resource_bundle(&json).expect("valid bundle");

        //then
        assert_eq!(json, json!({ "host.label": "Host", "host.help": "Server name" }));
        assert_eq!(restored, bundle);
    }

    #[test]
    fn test_restore_rejects_non_string_label() {
        let err = restore_resource_bundle(&json!({ "host.label": "Host", "port.label": 5 }))
            .expect_err("labels are strings");

        assert!(matches!(
            err.within("resources"),
            JsonError::WrongType { key, expected: "string" } if key == "resources.port.label"
        ));
    }

    #[test]
    fn test_restore_rejects_non_object() {
        let err = restore_resource_bundle(&json!(["Host"])).expect_err("bundle is an object");

        assert_eq!(err.within("resources").key(), Some("resources"));
    }
}
