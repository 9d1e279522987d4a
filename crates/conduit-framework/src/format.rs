use std::fmt;

/// Representation records take between the source and destination connectors
pub trait IntermediateDataFormat: Send {
    /// record as a single line of text
    fn text_data(&self) -> Option<&str>;

    fn set_text_data(&mut self, data: String);
}

/// Selects an [`IntermediateDataFormat`] implementation without creating one.
///
/// The execution engine instantiates the format on its side through
/// [`instantiate`](Self::instantiate). Two selectors are equal when they name
/// the same implementation.
#[derive(Clone, Copy)]
pub struct IntermediateFormatSelector {
    name: &'static str,
    factory: fn() -> Box<dyn IntermediateDataFormat>,
}

impl IntermediateFormatSelector {
    pub fn of<F>() -> Self
    where
        F: IntermediateDataFormat + Default + 'static,
    {
        Self {
            name: std::any::type_name::<F>(),
            factory: create::<F>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn instantiate(&self) -> Box<dyn IntermediateDataFormat> {
        (self.factory)()
    }
}

fn create<F>() -> Box<dyn IntermediateDataFormat>
where
    F: IntermediateDataFormat + Default + 'static,
{
    Box::new(F::default())
}

impl PartialEq for IntermediateFormatSelector {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for IntermediateFormatSelector {}

impl fmt::Debug for IntermediateFormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntermediateFormatSelector")
            .field(&self.name)
            .finish()
    }
}
