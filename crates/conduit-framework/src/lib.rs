pub mod classpath;
pub mod config;
pub mod connector;
pub mod format;
pub mod request;
pub mod settings;

pub use classpath::{ArtifactRegistry, ArtifactResolver, ResolveError};
pub use config::ConfigObject;
pub use connector::{Callback, Connector, FromCallback, ToCallback};
pub use format::{IntermediateDataFormat, IntermediateFormatSelector};
pub use request::SubmissionRequest;
pub use settings::{FrameworkSettings, LoadSettingsError, SubmissionDefaults};

pub use conduit_model::{Direction, MutableContext, PerDirection};
