use crate::DirectiveAnnotation;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// The root of a GraphQL type graph.
///
/// A [`Schema`] is an arena of named [`GraphQLType`]s keyed by name. Types
/// never hold pointers to one another, only
/// [`NamedGraphQLTypeRef`]s that are resolved against the arena on demand.
/// This is what allows a visitor to replace or remove a type while other
/// types still refer to it: after traversal, [`heal_schema()`](crate::heal_schema)
/// re-links or drops every reference whose target changed.
///
/// Build one with [`SchemaBuilder`](crate::schema::SchemaBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Every named type in this [`Schema`] (including the built-in scalars)
    /// in the order they were defined.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Every directive declaration in this [`Schema`] (including the built-in
    /// directives).
    pub fn directive_defs(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    pub fn directive_def(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// The [`DirectiveAnnotation`]s written on the `schema { ... }`
    /// definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        Self::root_object(self, self.mutation_type.as_ref())
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(|type_ref| type_ref.name())
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        Self::root_object(self, self.query_type.as_ref())
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_ref().map(|type_ref| type_ref.name())
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        Self::root_object(self, self.subscription_type.as_ref())
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_ref().map(|type_ref| type_ref.name())
    }

    fn root_object<'a>(
        &'a self,
        type_ref: Option<&NamedGraphQLTypeRef>,
    ) -> Option<&'a ObjectType> {
        type_ref?.deref(self).ok()?.as_object()
    }
}
