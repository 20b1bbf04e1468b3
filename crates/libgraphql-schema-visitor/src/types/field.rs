use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            deprecation_reason: None,
            description: None,
            directives: vec![],
            name: name.as_ref().to_string(),
            parameters: IndexMap::new(),
            type_annotation,
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`Field`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The reason given by a `@deprecated` annotation on this field, if any.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`Field`] in the
    /// order they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn directives_mut(&mut self) -> &mut Vec<DirectiveAnnotation> {
        &mut self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments this [`Field`] accepts, in definition order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut IndexMap<String, Parameter> {
        &mut self.parameters
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

    pub fn set_type_annotation(&mut self, type_annotation: TypeAnnotation) {
        self.type_annotation = type_annotation;
    }

    /// The [`TypeAnnotation`] of the value this [`Field`] returns.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
