use std::any::{Any, type_name};
use std::fmt;

/// Configuration object owned by a connector or the framework.
///
/// The submission request only stores and hands it back; the concrete type
/// and its validation belong to whoever created it. Read it back with
/// [`downcast_ref`](Self::downcast_ref) using the same type.
pub struct ConfigObject {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl ConfigObject {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// None when the object is not a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ConfigObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // contents may hold credentials
        f.debug_struct("ConfigObject")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
