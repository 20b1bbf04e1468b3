use crate::DirectiveAnnotation;
use crate::loc;

/// A single value defined on an [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            deprecation_reason: None,
            description: None,
            directives: vec![],
            name: name.as_ref().to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The reason given by a `@deprecated` annotation on this value, if any.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn directives_mut(&mut self) -> &mut Vec<DirectiveAnnotation> {
        &mut self.directives
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_deprecation_reason(&mut self, reason: Option<String>) {
        self.deprecation_reason = reason;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = name.as_ref().to_string();
    }
}
