use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::EnumValue;
use crate::types::TypeExtension;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined within
/// some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extensions: Vec<TypeExtension>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            description: None,
            directives: vec![],
            extensions: vec![],
            name: name.as_ref().to_string(),
            values: IndexMap::new(),
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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// A map from ValueName -> [`EnumValue`] in definition order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut IndexMap<String, EnumValue> {
        &mut self.values
    }

    /// A copy of this [`EnumType`] with every value replaced by `values`.
    /// Everything else (description, directives, extensions, source location)
    /// is carried over unchanged.
    pub(crate) fn with_values(&self, values: IndexMap<String, EnumValue>) -> Self {
        Self {
            def_location: self.def_location.clone(),
            description: self.description.clone(),
            directives: self.directives.clone(),
            extensions: self.extensions.clone(),
            name: self.name.clone(),
            values,
        }
    }
}
