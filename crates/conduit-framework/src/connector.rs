use std::fmt::Debug;

use conduit_model::Direction;

/// Pluggable implementation reading from and/or writing to one external system
pub trait Connector: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn supported_directions(&self) -> &[Direction];

    /// strategy the connector runs for `direction`, None if unsupported
    fn callback(&self, direction: Direction) -> Option<Callback>;

    fn supports(&self, direction: Direction) -> bool {
        self.supported_directions().contains(&direction)
    }
}

/// Components the execution engine instantiates for one side of a transfer.
/// Each field names a component registered with the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback {
    From(FromCallback),
    To(ToCallback),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromCallback {
    pub initializer: String,
    pub partitioner: String,
    pub extractor: String,
    pub destroyer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToCallback {
    pub initializer: String,
    pub loader: String,
    pub destroyer: String,
}

impl Callback {
    pub fn direction(&self) -> Direction {
        match self {
            Self::From(_) => Direction::Source,
            Self::To(_) => Direction::Destination,
        }
    }

    pub fn initializer(&self) -> &str {
        match self {
            Self::From(from) => &from.initializer,
            Self::To(to) => &to.initializer,
        }
    }

    pub fn destroyer(&self) -> &str {
        match self {
            Self::From(from) => &from.destroyer,
            Self::To(to) => &to.destroyer,
        }
    }
}

impl From<FromCallback> for Callback {
    fn from(callback: FromCallback) -> Self {
        Self::From(callback)
    }
}

impl From<ToCallback> for Callback {
    fn from(callback: ToCallback) -> Self {
        Self::To(callback)
    }
}
