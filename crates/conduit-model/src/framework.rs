use crate::{ConnectionForms, JobForms, PERSISTENCE_ID_DEFAULT, PersistenceId};

/// Framework level metadata: the forms every job and connection carries
/// regardless of which connectors it binds.
///
/// Connection forms are shared by both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkDescriptor {
    persistence_id: PersistenceId,
    version: String,
    connection_forms: ConnectionForms,
    job_forms: JobForms,
}

impl FrameworkDescriptor {
    pub fn new<V: Into<String>>(
        connection_forms: ConnectionForms,
        job_forms: JobForms,
        version: V,
    ) -> Self {
        Self {
            persistence_id: PERSISTENCE_ID_DEFAULT,
            version: version.into(),
            connection_forms,
            job_forms,
        }
    }

    pub fn persistence_id(&self) -> PersistenceId {
        self.persistence_id
    }

    pub fn set_persistence_id(&mut self, id: PersistenceId) {
        self.persistence_id = id;
    }

    pub fn has_persistence_id(&self) -> bool {
        self.persistence_id != PERSISTENCE_ID_DEFAULT
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn connection_forms(&self) -> &ConnectionForms {
        &self.connection_forms
    }

    pub fn job_forms(&self) -> &JobForms {
        &self.job_forms
    }
}
