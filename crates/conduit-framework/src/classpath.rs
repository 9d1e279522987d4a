use std::any::type_name;
use std::collections::BTreeMap;

use tracing::trace;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no artifact registered for type {0}")]
    UnknownType(String),
}

/// Finds the artifact (jar) that ships a given type, so it can be put on the
/// execution classpath
pub trait ArtifactResolver {
    fn artifact_path_for(&self, type_name: &str) -> Result<String, ResolveError>;

    fn artifact_path_of<T: ?Sized>(&self) -> Result<String, ResolveError>
    where
        Self: Sized,
    {
        self.artifact_path_for(type_name::<T>())
    }
}

/// Resolver backed by an explicit type -> artifact table
#[derive(Debug, Clone, Default)]
pub struct ArtifactRegistry {
    artifacts: BTreeMap<String, String>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: ?Sized>(&mut self, path: impl Into<String>) -> &mut Self {
        self.register_name(type_name::<T>(), path)
    }

    pub fn register_name(
        &mut self,
        type_name: impl Into<String>,
        path: impl Into<String>,
    ) -> &mut Self {
        self.artifacts.insert(type_name.into(), path.into());
        self
    }
}

impl ArtifactResolver for ArtifactRegistry {
    fn artifact_path_for(&self, type_name: &str) -> Result<String, ResolveError> {
        let path = self
            .artifacts
            .get(type_name)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownType(type_name.to_owned()))?;
        trace!(type_name, %path, "resolved artifact");
        Ok(path)
    }
}
