#[derive(thiserror::Error, Debug)]
pub enum JsonError {
    #[error("missing key: {0}")]
    MissingKey(String),
    #[error("key '{key}' has wrong type, expected {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("key '{key}' is invalid: {reason}")]
    Invalid { key: String, reason: String },
    #[error("key '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },
    #[error("unable to parse JSON: {0}")]
    Parse(serde_json::Error),
}

impl JsonError {
    /// path of the offending key, if the error points at one
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingKey(key)
            | Self::WrongType { key, .. }
            | Self::Invalid { key, .. }
            | Self::Malformed { key, .. } => Some(key),
            Self::Parse(_) => None,
        }
    }

    /// prefix the key path with `parent`
    pub fn within(self, parent: &str) -> Self {
        let join = |key: String| {
            if key.is_empty() {
                parent.to_owned()
            } else if key.starts_with('[') {
                format!("{parent}{key}")
            } else {
                format!("{parent}.{key}")
            }
        };
        match self {
            Self::MissingKey(key) => Self::MissingKey(join(key)),
            Self::WrongType { key, expected } => Self::WrongType {
                key: join(key),
                expected,
            },
            Self::Invalid { key, reason } => Self::Invalid {
                key: join(key),
                reason,
            },
            Self::Malformed { key, source } => Self::Malformed {
                key: join(key),
                source,
            },
            Self::Parse(err) => Self::Parse(err),
        }
    }
}
