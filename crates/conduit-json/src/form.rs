use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use conduit_model::{Form, FormType, Input, InputKind, InputType, PersistenceId};

use crate::keys::{
    FORM_INPUTS, ID, INPUT_SENSITIVE, INPUT_SIZE, INPUT_VALUE, INPUT_VALUES, NAME, TYPE,
};
use crate::util::wrong_type;
use crate::{JsonError, JsonObject, Result};

/// encode forms as a JSON array; sensitive input values are dropped when `skip_sensitive` is set
pub fn extract_forms(forms: &[Form], skip_sensitive: bool) -> Value {
    Value::Array(
        forms
            .iter()
            .map(|form| Value::Object(extract_form(form, skip_sensitive)))
            .collect(),
    )
}

pub fn extract_form(form: &Form, skip_sensitive: bool) -> JsonObject {
    let inputs = form
        .inputs
        .iter()
        .map(|input| Value::Object(extract_input(input, skip_sensitive)))
        .collect();

    let mut object = JsonObject::new();
    object.insert(ID.into(), form.persistence_id.into());
    object.insert(NAME.into(), form.name.clone().into());
    object.insert(TYPE.into(), form.form_type.to_string().into());
    object.insert(FORM_INPUTS.into(), Value::Array(inputs));
    object
}

fn extract_input(input: &Input, skip_sensitive: bool) -> JsonObject {
    let mut object = JsonObject::new();
    object.insert(ID.into(), input.persistence_id.into());
    object.insert(NAME.into(), input.name.clone().into());
    object.insert(TYPE.into(), input.input_type().to_string().into());
    object.insert(INPUT_SENSITIVE.into(), input.sensitive.into());

    match &input.kind {
        InputKind::String { size, .. } => {
            object.insert(INPUT_SIZE.into(), (*size).into());
        }
        InputKind::Enum { values, .. } => {
            object.insert(INPUT_VALUES.into(), values.clone().into());
        }
        _ => {}
    }

    if skip_sensitive && input.sensitive {
        trace!(input = %input.name, "skipping sensitive value");
    } else if let Some(value) = input_value(&input.kind) {
        object.insert(INPUT_VALUE.into(), value);
    }
    object
}

fn input_value(kind: &InputKind) -> Option<Value> {
    match kind {
        InputKind::String { value, .. } | InputKind::Enum { value, .. } => {
            value.clone().map(Value::String)
        }
        InputKind::Map { value } => value.as_ref().map(|map| {
            Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            )
        }),
        InputKind::Integer { value } => value.map(Value::from),
        InputKind::Boolean { value } => value.map(Value::Bool),
    }
}

/// decode a JSON array produced by [`extract_forms`], keeping the order
pub fn restore_forms(value: &Value) -> Result<Vec<Form>> {
    let forms = value.as_array().ok_or_else(|| wrong_type("", "array"))?;

    forms
        .iter()
        .enumerate()
        .map(|(index, form)| {
            deserialize::<FormJson>(form)
                .and_then(FormJson::into_form)
                .map_err(|err| err.within(&format!("[{index}]")))
        })
        .collect()
}

fn deserialize<'a, T: Deserialize<'a>>(value: &'a Value) -> Result<T> {
    T::deserialize(value).map_err(|source| JsonError::Malformed {
        key: String::new(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct FormJson {
    id: PersistenceId,
    name: String,
    #[serde(rename = "type")]
    form_type: FormType,
    inputs: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct InputJson {
    id: PersistenceId,
    name: String,
    #[serde(rename = "type")]
    input_type: InputType,
    sensitive: bool,
    #[serde(default)]
    size: Option<i16>,
    #[serde(default)]
    values: Option<Vec<String>>,
    #[serde(default)]
    value: Option<Value>,
}

impl FormJson {
    fn into_form(self) -> Result<Form> {
        let inputs = self
            .inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                deserialize::<InputJson>(input)
                    .and_then(InputJson::into_input)
                    .map_err(|err| err.within(&format!("{FORM_INPUTS}[{index}]")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Form::new(self.name, self.form_type, inputs).with_persistence_id(self.id))
    }
}

impl InputJson {
    fn into_input(self) -> Result<Input> {
        let value = self.value;
        let kind = match self.input_type {
            InputType::String => InputKind::String {
                size: self
                    .size
                    .ok_or_else(|| JsonError::MissingKey(INPUT_SIZE.into()))?,
                value: value.map(string_value).transpose()?,
            },
            InputType::Map => InputKind::Map {
                value: value.map(map_value).transpose()?,
            },
            InputType::Integer => InputKind::Integer {
                value: value.map(integer_value).transpose()?,
            },
            InputType::Boolean => InputKind::Boolean {
                value: value
                    .map(|v| v.as_bool().ok_or_else(|| wrong_type(INPUT_VALUE, "boolean")))
                    .transpose()?,
            },
            InputType::Enum => {
                let values = self
                    .values
                    .ok_or_else(|| JsonError::MissingKey(INPUT_VALUES.into()))?;
                let value = value.map(string_value).transpose()?;
                if let Some(selected) = &value {
                    if !values.contains(selected) {
                        return Err(JsonError::Invalid {
                            key: INPUT_VALUE.into(),
                            reason: format!("'{selected}' is not one of {values:?}"),
                        });
                    }
                }
                InputKind::Enum { values, value }
            }
        };

        Ok(Input::new(self.name, self.sensitive, kind).with_persistence_id(self.id))
    }
}

fn string_value(value: Value) -> Result<String> {
    match value {
        Value::String(str) => Ok(str),
        _ => Err(wrong_type(INPUT_VALUE, "string")),
    }
}

fn integer_value(value: Value) -> Result<i32> {
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| wrong_type(INPUT_VALUE, "32-bit integer"))
}

fn map_value(value: Value) -> Result<BTreeMap<String, String>> {
    let Value::Object(object) = value else {
        return Err(wrong_type(INPUT_VALUE, "object"));
    };
    object
        .into_iter()
        .map(|(k, v)| match v {
            Value::String(str) => Ok((k, str)),
            _ => Err(wrong_type(&format!("{INPUT_VALUE}.{k}"), "string")),
        })
        .collect()
}
