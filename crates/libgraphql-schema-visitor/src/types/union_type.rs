use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeExtension;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extensions: Vec<TypeExtension>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            description: None,
            directives: vec![],
            extensions: vec![],
            members: IndexMap::new(),
            name: name.as_ref().to_string(),
        }
    }

    /// Add the type named `type_name` as a member of this union.
    pub fn add_member(&mut self, type_name: impl AsRef<str>) {
        let type_name = type_name.as_ref();
        self.members.insert(
            type_name.to_string(),
            NamedGraphQLTypeRef::new(type_name, loc::SourceLocation::Synthetic),
        );
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`UnionType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The list of [`DirectiveAnnotation`]s written on the primary definition
    /// of this [`UnionType`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn directives_mut(&mut self) -> &mut Vec<DirectiveAnnotation> {
        &mut self.directives
    }

    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extensions(&self) -> &Vec<TypeExtension> {
        &self.extensions
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type in the schema. Members added from
    /// type extensions follow those of the primary definition.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of [`GraphQLType`]s defined as a member of this union.
    ///
    /// Members whose names no longer resolve in `schema` are skipped.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(schema).ok())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn remove_member(&mut self, type_name: &str) -> bool {
        self.members.shift_remove(type_name).is_some()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}
