use tracing::debug;

use conduit_model::{ConnectionForms, FrameworkDescriptor, JobForms, ResourceBundle};

use crate::bundle::{extract_resource_bundle, restore_resource_bundle};
use crate::form::{extract_forms, restore_forms};
use crate::keys::{CON_FORMS, FRAMEWORK_VERSION, ID, JOB_FORMS, RESOURCES};
use crate::util::{get, get_i64, get_str};
use crate::{JsonBean, JsonObject, Result};

/// Framework metadata together with the labels used to render its forms.
///
/// Only the shared connection forms travel on the wire; direction specific
/// connection forms are not part of this format.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkBean {
    framework: FrameworkDescriptor,
    bundle: ResourceBundle,
}

impl FrameworkBean {
    pub fn new(framework: FrameworkDescriptor, bundle: ResourceBundle) -> Self {
        Self { framework, bundle }
    }

    pub fn framework(&self) -> &FrameworkDescriptor {
        &self.framework
    }

    pub fn resource_bundle(&self) -> &ResourceBundle {
        &self.bundle
    }

    pub fn into_parts(self) -> (FrameworkDescriptor, ResourceBundle) {
        (self.framework, self.bundle)
    }
}

impl JsonBean for FrameworkBean {
    fn extract(&self, skip_sensitive: bool) -> JsonObject {
        let con_forms = extract_forms(self.framework.connection_forms(), skip_sensitive);
        let job_forms = extract_forms(self.framework.job_forms(), skip_sensitive);

        let mut result = JsonObject::new();
        result.insert(ID.into(), self.framework.persistence_id().into());
        result.insert(FRAMEWORK_VERSION.into(), self.framework.version().into());
        result.insert(CON_FORMS.into(), con_forms);
        result.insert(JOB_FORMS.into(), job_forms);
        result.insert(RESOURCES.into(), extract_resource_bundle(&self.bundle));
        result
    }

    fn restore(object: &JsonObject) -> Result<Self> {
        let id = get_i64(object, ID)?;
        let version = get_str(object, FRAMEWORK_VERSION)?;

        let con_forms =
            restore_forms(get(object, CON_FORMS)?).map_err(|err| err.within(CON_FORMS))?;
        let job_forms =
            restore_forms(get(object, JOB_FORMS)?).map_err(|err| err.within(JOB_FORMS))?;
        let bundle =
            restore_resource_bundle(get(object, RESOURCES)?).map_err(|err| err.within(RESOURCES))?;

        let mut framework = FrameworkDescriptor::new(
            ConnectionForms::new(con_forms),
            JobForms::new(job_forms),
            version,
        );
        framework.set_persistence_id(id);
        debug!(id, version, "restored framework metadata");

        Ok(Self { framework, bundle })
    }
}
