/// Describes what a command returns.
/// Only used for documentation; the resolution of arguments never looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandReturn {
    documentation: Option<String>,
    type_name: Option<String>,
}

impl CommandReturn {
    /// Create an undocumented, untyped return descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document the returned value.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation.replace(documentation.into());
        self
    }

    /// Name the type of the returned value (ex: `i64`).
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name.replace(type_name.into());
        self
    }

    /// The return documentation, if any.
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// The return type name, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Whether there is nothing to say about the returned value.
    pub fn is_empty(&self) -> bool {
        self.documentation.is_none() && self.type_name.is_none()
    }
}
