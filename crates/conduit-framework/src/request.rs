//!
//! # Submission request
//!
//! Everything the execution engine needs to start one submission: the
//! connectors for both sides, their configuration objects, the classpath,
//! parallelism and the intermediate data format.
//!
//! The request is filled in by the submitting side and then moved to the
//! execution engine. After that handoff only the contexts are expected to
//! change, as the engine records runtime facts in them.
//!

use std::sync::Arc;

use tracing::{debug, trace};

use conduit_model::{Direction, MutableContext, PerDirection, PersistenceId, Submission};

use crate::classpath::{ArtifactResolver, ResolveError};
use crate::config::ConfigObject;
use crate::connector::{Callback, Connector};
use crate::format::IntermediateFormatSelector;
use crate::settings::SubmissionDefaults;

#[derive(Debug)]
pub struct SubmissionRequest {
    summary: Option<Submission>,

    /// name of the job this submission runs
    job_name: Option<String>,

    job_id: Option<PersistenceId>,

    connectors: PerDirection<Option<Arc<dyn Connector>>>,

    /// local jars required on the execution classpath, in insertion order
    jars: Vec<String>,

    callbacks: PerDirection<Option<Callback>>,

    connector_connection_configs: PerDirection<Option<ConfigObject>>,
    connector_job_configs: PerDirection<Option<ConfigObject>>,
    framework_connection_configs: PerDirection<Option<ConfigObject>>,
    framework_job_config: Option<ConfigObject>,

    /// submission specific connector configuration
    connector_contexts: PerDirection<MutableContext>,

    /// submission specific framework configuration
    framework_context: MutableContext,

    output_directory: Option<String>,

    /// called back with job progress
    notification_url: Option<String>,

    extractors: Option<i32>,
    loaders: Option<i32>,

    intermediate_format: Option<IntermediateFormatSelector>,
}

impl SubmissionRequest {
    pub fn new() -> Self {
        Self {
            summary: None,
            job_name: None,
            job_id: None,
            connectors: PerDirection::default(),
            jars: Vec::new(),
            callbacks: PerDirection::default(),
            connector_connection_configs: PerDirection::default(),
            connector_job_configs: PerDirection::default(),
            framework_connection_configs: PerDirection::default(),
            framework_job_config: None,
            connector_contexts: PerDirection::default(),
            framework_context: MutableContext::new(),
            output_directory: None,
            notification_url: None,
            extractors: None,
            loaders: None,
            intermediate_format: None,
        }
    }

    pub fn summary(&self) -> Option<&Submission> {
        self.summary.as_ref()
    }

    pub fn summary_mut(&mut self) -> Option<&mut Submission> {
        self.summary.as_mut()
    }

    pub fn set_summary(&mut self, summary: Submission) {
        self.summary = Some(summary);
    }

    pub fn job_name(&self) -> Option<&str> {
        self.job_name.as_deref()
    }

    pub fn set_job_name<N: Into<String>>(&mut self, job_name: N) {
        self.job_name = Some(job_name.into());
    }

    pub fn job_id(&self) -> Option<PersistenceId> {
        self.job_id
    }

    pub fn set_job_id(&mut self, job_id: PersistenceId) {
        self.job_id = Some(job_id);
    }

    pub fn connector(&self, direction: Direction) -> Option<&Arc<dyn Connector>> {
        self.connectors[direction].as_ref()
    }

    pub fn set_connector(&mut self, direction: Direction, connector: Arc<dyn Connector>) {
        debug!(%direction, connector = connector.name(), "binding connector");
        self.connectors[direction] = Some(connector);
    }

    pub fn jars(&self) -> &[String] {
        &self.jars
    }

    /// add `jar` unless already present, returns whether it was added
    pub fn add_jar<J: Into<String>>(&mut self, jar: J) -> bool {
        let jar = jar.into();
        if self.jars.contains(&jar) {
            return false;
        }
        trace!(%jar, "adding jar");
        self.jars.push(jar);
        true
    }

    /// add the jar shipping `T`, as located by `resolver`
    pub fn add_jar_for_type<T, R>(&mut self, resolver: &R) -> Result<(), ResolveError>
    where
        T: ?Sized,
        R: ArtifactResolver,
    {
        let jar = resolver.artifact_path_of::<T>()?;
        self.add_jar(jar);
        Ok(())
    }

    pub fn add_jars<I>(&mut self, jars: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for jar in jars {
            self.add_jar(jar);
        }
    }

    pub fn callback(&self, direction: Direction) -> Option<&Callback> {
        self.callbacks[direction].as_ref()
    }

    pub fn set_callback(&mut self, direction: Direction, callback: Callback) {
        self.callbacks[direction] = Some(callback);
    }

    pub fn connector_connection_config(&self, direction: Direction) -> Option<&ConfigObject> {
        self.connector_connection_configs[direction].as_ref()
    }

    pub fn set_connector_connection_config(&mut self, direction: Direction, config: ConfigObject) {
        self.connector_connection_configs[direction] = Some(config);
    }

    pub fn connector_job_config(&self, direction: Direction) -> Option<&ConfigObject> {
        self.connector_job_configs[direction].as_ref()
    }

    pub fn set_connector_job_config(&mut self, direction: Direction, config: ConfigObject) {
        self.connector_job_configs[direction] = Some(config);
    }

    pub fn framework_connection_config(&self, direction: Direction) -> Option<&ConfigObject> {
        self.framework_connection_configs[direction].as_ref()
    }

    pub fn set_framework_connection_config(&mut self, direction: Direction, config: ConfigObject) {
        self.framework_connection_configs[direction] = Some(config);
    }

    pub fn framework_job_config(&self) -> Option<&ConfigObject> {
        self.framework_job_config.as_ref()
    }

    pub fn set_framework_job_config(&mut self, config: ConfigObject) {
        self.framework_job_config = Some(config);
    }

    pub fn connector_context(&self, direction: Direction) -> &MutableContext {
        &self.connector_contexts[direction]
    }

    pub fn connector_context_mut(&mut self, direction: Direction) -> &mut MutableContext {
        &mut self.connector_contexts[direction]
    }

    pub fn framework_context(&self) -> &MutableContext {
        &self.framework_context
    }

    pub fn framework_context_mut(&mut self) -> &mut MutableContext {
        &mut self.framework_context
    }

    pub fn output_directory(&self) -> Option<&str> {
        self.output_directory.as_deref()
    }

    pub fn set_output_directory<D: Into<String>>(&mut self, output_directory: D) {
        self.output_directory = Some(output_directory.into());
    }

    pub fn notification_url(&self) -> Option<&str> {
        self.notification_url.as_deref()
    }

    pub fn set_notification_url<U: Into<String>>(&mut self, url: U) {
        self.notification_url = Some(url.into());
    }

    pub fn extractors(&self) -> Option<i32> {
        self.extractors
    }

    /// None leaves the choice to the execution engine; the value is not validated here
    pub fn set_extractors(&mut self, extractors: Option<i32>) {
        self.extractors = extractors;
    }

    pub fn loaders(&self) -> Option<i32> {
        self.loaders
    }

    /// None leaves the choice to the execution engine; the value is not validated here
    pub fn set_loaders(&mut self, loaders: Option<i32>) {
        self.loaders = loaders;
    }

    pub fn intermediate_format(&self) -> Option<&IntermediateFormatSelector> {
        self.intermediate_format.as_ref()
    }

    /// Expected to be called once per request. A later call replaces the
    /// earlier selection.
    pub fn set_intermediate_format(&mut self, format: IntermediateFormatSelector) {
        self.intermediate_format = Some(format);
    }

    /// Fill in values the caller left unset from framework settings.
    /// Values already present are kept; configured jars are appended.
    pub fn apply_settings(&mut self, defaults: &SubmissionDefaults) {
        if self.extractors.is_none() {
            self.extractors = defaults.extractors;
        }
        if self.loaders.is_none() {
            self.loaders = defaults.loaders;
        }
        if self.output_directory.is_none() {
            self.output_directory = defaults.output_directory.clone();
        }
        if self.notification_url.is_none() {
            self.notification_url = defaults.notification_url.clone();
        }
        self.add_jars(defaults.jars.iter().cloned());
        debug!(jars = self.jars.len(), "applied submission defaults");
    }
}

impl Default for SubmissionRequest {
    fn default() -> Self {
        Self::new()
    }
}
