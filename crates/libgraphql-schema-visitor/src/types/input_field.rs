use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;

/// A field defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            default_value: None,
            deprecation_reason: None,
            description: None,
            directives: vec![],
            name: name.as_ref().to_string(),
            type_annotation,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_default_value(&mut self, default_value: Option<ast::Value>) {
        self.default_value = default_value;
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

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
