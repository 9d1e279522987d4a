use serde::Deserialize;
use serde_json::Value;

use conduit_model::{PersistenceId, Submission, SubmissionStatus, Timestamp};

use crate::keys::{
    ALL, CREATION_DATE, EXCEPTION, EXTERNAL_ID, EXTERNAL_LINK, JOB, LAST_UPDATE_DATE, PROGRESS,
    STATUS,
};
use crate::util::get;
use crate::{JsonBean, JsonError, JsonObject, Result};

/// List of submission records, as returned by submission status queries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionBean {
    submissions: Vec<Submission>,
}

impl SubmissionBean {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }

    pub fn single(submission: Submission) -> Self {
        Self::new(vec![submission])
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn into_submissions(self) -> Vec<Submission> {
        self.submissions
    }
}

impl JsonBean for SubmissionBean {
    /// submissions carry no sensitive values, `skip_sensitive` has no effect
    fn extract(&self, _skip_sensitive: bool) -> JsonObject {
        let all = self
            .submissions
            .iter()
            .map(|submission| Value::Object(extract_submission(submission)))
            .collect();

        let mut result = JsonObject::new();
        result.insert(ALL.into(), Value::Array(all));
        result
    }

    fn restore(object: &JsonObject) -> Result<Self> {
        let all = Vec::<SubmissionJson>::deserialize(get(object, ALL)?).map_err(|source| {
            JsonError::Malformed {
                key: ALL.into(),
                source,
            }
        })?;

        Ok(Self::new(all.into_iter().map(Submission::from).collect()))
    }
}

fn extract_submission(submission: &Submission) -> JsonObject {
    let mut object = JsonObject::new();
    object.insert(JOB.into(), submission.job_id.into());
    object.insert(STATUS.into(), submission.status.to_string().into());
    if let Some(external_id) = &submission.external_id {
        object.insert(EXTERNAL_ID.into(), external_id.clone().into());
    }
    if let Some(external_link) = &submission.external_link {
        object.insert(EXTERNAL_LINK.into(), external_link.clone().into());
    }
    // JSON has no NaN or infinity
    if let Some(progress) = submission.progress.filter(|p| p.is_finite()) {
        object.insert(PROGRESS.into(), progress.into());
    }
    object.insert(CREATION_DATE.into(), submission.creation_date.into());
    object.insert(LAST_UPDATE_DATE.into(), submission.last_update_date.into());
    if let Some(exception) = &submission.exception_info {
        object.insert(EXCEPTION.into(), exception.clone().into());
    }
    object
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SubmissionJson {
    job: PersistenceId,
    status: SubmissionStatus,
    #[serde(default)]
    external_id: Option<String>,
    #[serde(default)]
    external_link: Option<String>,
    #[serde(default)]
    progress: Option<f64>,
    creation_date: Timestamp,
    last_update_date: Timestamp,
    #[serde(default)]
    exception: Option<String>,
}

impl From<SubmissionJson> for Submission {
    fn from(json: SubmissionJson) -> Self {
        Self {
            job_id: json.job,
            status: json.status,
            external_id: json.external_id,
            external_link: json.external_link,
            progress: json.progress,
            creation_date: json.creation_date,
            last_update_date: json.last_update_date,
            exception_info: json.exception,
        }
    }
}
