use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// A [`TypeAnnotation`](crate::types::TypeAnnotation) that refers to a named
/// [`GraphQLType`] (e.g. `String` or `User!`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    /// The [`GraphQLType`] this annotation refers to, if it still exists in
    /// `schema`.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_ref.deref(schema).ok()
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }

    pub(crate) fn type_ref_mut(&mut self) -> &mut NamedGraphQLTypeRef {
        &mut self.type_ref
    }
}
