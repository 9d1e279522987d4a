pub mod bundle;
pub mod context;
pub mod direction;
pub mod form;
pub mod framework;
pub mod submission;

pub use bundle::ResourceBundle;
pub use context::MutableContext;
pub use direction::{Direction, PerDirection};
pub use form::{ConnectionForms, Form, FormType, Input, InputKind, InputType, JobForms};
pub use framework::FrameworkDescriptor;
pub use submission::{Submission, SubmissionStatus};

//
// Types
//
pub type PersistenceId = i64;

// Time, milliseconds since epoch
pub type Timestamp = i64;

/// Id carried by entities that were never stored
pub const PERSISTENCE_ID_DEFAULT: PersistenceId = -1;
