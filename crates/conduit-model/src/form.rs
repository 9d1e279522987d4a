//!
//! # Forms
//!
//! Typed groups of configuration inputs. The same model drives validation of
//! user supplied configuration and rendering in UI clients, where each input
//! name is resolved to a label through a [`ResourceBundle`](crate::ResourceBundle).
//!

use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{PERSISTENCE_ID_DEFAULT, PersistenceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormType {
    Connection,
    Job,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputType {
    String,
    Map,
    Integer,
    Boolean,
    Enum,
}

impl Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::Connection => "CONNECTION",
            Self::Job => "JOB",
        };
        write!(f, "{str}")
    }
}

impl Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::String => "STRING",
            Self::Map => "MAP",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Enum => "ENUM",
        };
        write!(f, "{str}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub persistence_id: PersistenceId,
    pub name: String,
    pub form_type: FormType,
    pub inputs: Vec<Input>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub persistence_id: PersistenceId,
    pub name: String,
    /// value must not leave the server in exported metadata (credentials)
    pub sensitive: bool,
    pub kind: InputKind,
}

/// Input type together with its current value, if any
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    String {
        size: i16,
        value: Option<String>,
    },
    Map {
        value: Option<BTreeMap<String, String>>,
    },
    Integer {
        value: Option<i32>,
    },
    Boolean {
        value: Option<bool>,
    },
    Enum {
        values: Vec<String>,
        value: Option<String>,
    },
}

impl Form {
    pub fn new<N: Into<String>>(name: N, form_type: FormType, inputs: Vec<Input>) -> Self {
        Self {
            persistence_id: PERSISTENCE_ID_DEFAULT,
            name: name.into(),
            form_type,
            inputs,
        }
    }

    pub fn with_persistence_id(mut self, id: PersistenceId) -> Self {
        self.persistence_id = id;
        self
    }

    pub fn input(&self, name: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn input_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.inputs.iter_mut().find(|input| input.name == name)
    }

    pub fn has_sensitive_inputs(&self) -> bool {
        self.inputs.iter().any(|input| input.sensitive)
    }
}

impl Input {
    pub fn new<N: Into<String>>(name: N, sensitive: bool, kind: InputKind) -> Self {
        Self {
            persistence_id: PERSISTENCE_ID_DEFAULT,
            name: name.into(),
            sensitive,
            kind,
        }
    }

    pub fn string<N: Into<String>>(name: N, sensitive: bool, size: i16) -> Self {
        Self::new(name, sensitive, InputKind::String { size, value: None })
    }

    pub fn map<N: Into<String>>(name: N, sensitive: bool) -> Self {
        Self::new(name, sensitive, InputKind::Map { value: None })
    }

    pub fn integer<N: Into<String>>(name: N, sensitive: bool) -> Self {
        Self::new(name, sensitive, InputKind::Integer { value: None })
    }

    pub fn boolean<N: Into<String>>(name: N, sensitive: bool) -> Self {
        Self::new(name, sensitive, InputKind::Boolean { value: None })
    }

    pub fn enumeration<N, V, S>(name: N, sensitive: bool, values: V) -> Self
    where
        N: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            sensitive,
            InputKind::Enum {
                values: values.into_iter().map(Into::into).collect(),
                value: None,
            },
        )
    }

    pub fn with_persistence_id(mut self, id: PersistenceId) -> Self {
        self.persistence_id = id;
        self
    }

    pub fn input_type(&self) -> InputType {
        self.kind.input_type()
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    pub fn clear_value(&mut self) {
        self.kind.clear_value()
    }
}

impl InputKind {
    pub fn input_type(&self) -> InputType {
        match self {
            Self::String { .. } => InputType::String,
            Self::Map { .. } => InputType::Map,
            Self::Integer { .. } => InputType::Integer,
            Self::Boolean { .. } => InputType::Boolean,
            Self::Enum { .. } => InputType::Enum,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::String { value, .. } | Self::Enum { value, .. } => value.is_none(),
            Self::Map { value } => value.is_none(),
            Self::Integer { value } => value.is_none(),
            Self::Boolean { value } => value.is_none(),
        }
    }

    pub fn clear_value(&mut self) {
        match self {
            Self::String { value, .. } | Self::Enum { value, .. } => *value = None,
            Self::Map { value } => *value = None,
            Self::Integer { value } => *value = None,
            Self::Boolean { value } => *value = None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionForms(Vec<Form>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForms(Vec<Form>);

impl ConnectionForms {
    pub fn new(forms: Vec<Form>) -> Self {
        Self(forms)
    }

    pub fn forms(&self) -> &[Form] {
        &self.0
    }
}

impl JobForms {
    pub fn new(forms: Vec<Form>) -> Self {
        Self(forms)
    }

    pub fn forms(&self) -> &[Form] {
        &self.0
    }
}

impl Deref for ConnectionForms {
    type Target = [Form];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for JobForms {
    type Target = [Form];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Form>> for ConnectionForms {
    fn from(forms: Vec<Form>) -> Self {
        Self(forms)
    }
}

impl From<Vec<Form>> for JobForms {
    fn from(forms: Vec<Form>) -> Self {
        Self(forms)
    }
}
