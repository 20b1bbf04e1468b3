use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;

/// An argument definition: either a parameter of a [`Field`](crate::types::Field)
/// or of a [`Directive`](crate::types::Directive) declaration.
///
/// The default value is kept as the literal AST node that was written so that
/// it can be coerced against whatever the parameter's type resolves to at the
/// time of coercion.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            default_value: None,
            description: None,
            directives: vec![],
            name: name.as_ref().to_string(),
            type_annotation,
        }
    }

    /// Builder-style variant of [`Parameter::set_default_value()`].
    pub fn with_default_value(mut self, default_value: ast::Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
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
