use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::InputField;
use crate::types::TypeExtension;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extensions: Vec<TypeExtension>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            description: None,
            directives: vec![],
            extensions: vec![],
            fields: IndexMap::new(),
            name: name.as_ref().to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
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

    pub fn extensions(&self) -> &Vec<TypeExtension> {
        &self.extensions
    }

    /// A map from FieldName -> [`InputField`] in definition order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut IndexMap<String, InputField> {
        &mut self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}
