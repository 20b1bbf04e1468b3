use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::TypeExtension;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// The built-in scalars (`Boolean`, `Float`, `ID`, `Int`, `String`) are also
/// represented as [`ScalarType`]s whose
/// [`def_location()`](ScalarType::def_location) is
/// [`SourceLocation::GraphQLBuiltIn`](loc::SourceLocation::GraphQLBuiltIn).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extensions: Vec<TypeExtension>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            description: None,
            directives: vec![],
            extensions: vec![],
            name: name.as_ref().to_string(),
        }
    }

    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            ..Self::new(name)
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

    /// Indicates whether this is one of the scalars every GraphQL schema
    /// defines implicitly.
    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SourceLocation::GraphQLBuiltIn)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}
