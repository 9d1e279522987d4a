//!
//! # JSON beans
//!
//! Every metadata type exchanged with clients has a bean: `extract` encodes
//! the in-memory model into a JSON object, `restore` builds a fresh bean from
//! one. Restoring never falls back to defaults; a missing or malformed key is
//! reported with its path.
//!

pub mod bundle;
pub mod error;
pub mod form;
pub mod framework;
pub mod submission;

mod util;

pub use error::JsonError;
pub use framework::FrameworkBean;
pub use submission::SubmissionBean;

use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;
pub type Result<T, E = JsonError> = std::result::Result<T, E>;

pub mod keys {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";

    // framework
    pub const FRAMEWORK_VERSION: &str = "frameworkVersion";
    pub const CON_FORMS: &str = "conForms";
    pub const JOB_FORMS: &str = "jobForms";
    pub const RESOURCES: &str = "resources";

    // forms
    pub const FORM_INPUTS: &str = "inputs";
    pub const INPUT_SENSITIVE: &str = "sensitive";
    pub const INPUT_SIZE: &str = "size";
    pub const INPUT_VALUES: &str = "values";
    pub const INPUT_VALUE: &str = "value";

    // submissions
    pub const ALL: &str = "all";
    pub const JOB: &str = "job";
    pub const STATUS: &str = "status";
    pub const EXTERNAL_ID: &str = "external-id";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const PROGRESS: &str = "progress";
    pub const CREATION_DATE: &str = "creation-date";
    pub const LAST_UPDATE_DATE: &str = "last-update-date";
    pub const EXCEPTION: &str = "exception";
}

/// Encode/decode pair between a metadata model and its wire object
pub trait JsonBean: Sized {
    /// encode held state; with `skip_sensitive` values of sensitive inputs are left out
    fn extract(&self, skip_sensitive: bool) -> JsonObject;

    /// build a new bean from a wire object
    fn restore(object: &JsonObject) -> Result<Self>;

    fn to_json_string(&self, skip_sensitive: bool) -> String {
        Value::Object(self.extract(skip_sensitive)).to_string()
    }

    fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).map_err(JsonError::Parse)?;
        match value {
            Value::Object(object) => Self::restore(&object),
            _ => Err(JsonError::WrongType {
                key: "$".to_owned(),
                expected: "object",
            }),
        }
    }
}
