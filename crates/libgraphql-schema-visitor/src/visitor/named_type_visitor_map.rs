use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::visitor::SchemaVisitError;
use crate::visitor::SchemaVisitor;
use crate::visitor::VisitOutcome;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaVisitError>;

type NamedTypeVisitorFn<'a> =
    Box<dyn FnMut(&GraphQLType, &Schema) -> Result<VisitOutcome<GraphQLType>> + 'a>;

/// A category of named types that a [`NamedTypeVisitorMap`] callback can be
/// registered for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VisitSchemaKind {
    /// Interface and union types.
    AbstractType,
    /// Object, interface and union types.
    CompositeType,
    EnumType,
    InputObjectType,
    InterfaceType,
    Mutation,
    ObjectType,
    Query,
    /// The query, mutation and subscription root object types.
    RootObject,
    ScalarType,
    Subscription,
    /// Every named type.
    Type,
    UnionType,
}

/// A [`SchemaVisitor`] assembled from closures, each registered for a
/// [`VisitSchemaKind`].
///
/// For every named type, only the closure registered for the most specific
/// kind that applies to it runs. For the query root type that is the first
/// registered of [`Query`](VisitSchemaKind::Query),
/// [`RootObject`](VisitSchemaKind::RootObject),
/// [`ObjectType`](VisitSchemaKind::ObjectType),
/// [`CompositeType`](VisitSchemaKind::CompositeType) and
/// [`Type`](VisitSchemaKind::Type).
///
/// ```
/// use libgraphql_schema_visitor::schema::SchemaBuilder;
/// use libgraphql_schema_visitor::visitor::NamedTypeVisitorMap;
/// use libgraphql_schema_visitor::visitor::VisitOutcome;
/// use libgraphql_schema_visitor::visitor::VisitSchemaKind;
/// use libgraphql_schema_visitor::visitor::visit_schema_with_visitors;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { a: Int }  scalar Legacy")?
///     .build()?;
///
/// let mut visitor = NamedTypeVisitorMap::new()
///     .on(VisitSchemaKind::ScalarType, |scalar, _schema| Ok(
///         if scalar.name() == "Legacy" {
///             VisitOutcome::Remove
///         } else {
///             VisitOutcome::Unchanged
///         }
///     ));
/// let schema = visit_schema_with_visitors(schema, &mut [&mut visitor])?;
///
/// assert!(schema.get_type("Legacy").is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct NamedTypeVisitorMap<'a> {
    callbacks: IndexMap<VisitSchemaKind, NamedTypeVisitorFn<'a>>,
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    subscription_type_name: Option<String>,
}
impl<'a> NamedTypeVisitorMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every named type of the given `kind`.
    /// Registering a second callback for the same kind replaces the first.
    pub fn on(
        mut self,
        kind: VisitSchemaKind,
        callback: impl FnMut(&GraphQLType, &Schema) -> Result<VisitOutcome<GraphQLType>> + 'a,
    ) -> Self {
        self.callbacks.insert(kind, Box::new(callback));
        self
    }

    /// Every [`VisitSchemaKind`] that applies to a type, least specific
    /// first.
    fn specifiers(&self, type_name: &str, kind: GraphQLTypeKind) -> Vec<VisitSchemaKind> {
        let mut specifiers = vec![VisitSchemaKind::Type];
        match kind {
            GraphQLTypeKind::Enum =>
                specifiers.push(VisitSchemaKind::EnumType),

            GraphQLTypeKind::InputObject =>
                specifiers.push(VisitSchemaKind::InputObjectType),

            GraphQLTypeKind::Interface => specifiers.extend([
                VisitSchemaKind::CompositeType,
                VisitSchemaKind::AbstractType,
                VisitSchemaKind::InterfaceType,
            ]),

            GraphQLTypeKind::Object => {
                specifiers.extend([
                    VisitSchemaKind::CompositeType,
                    VisitSchemaKind::ObjectType,
                ]);
                let is_named = |root_name: &Option<String>| {
                    root_name.as_deref() == Some(type_name)
                };
                if is_named(&self.query_type_name) {
                    specifiers.extend([VisitSchemaKind::RootObject, VisitSchemaKind::Query]);
                } else if is_named(&self.mutation_type_name) {
                    specifiers.extend([VisitSchemaKind::RootObject, VisitSchemaKind::Mutation]);
                } else if is_named(&self.subscription_type_name) {
                    specifiers.extend([VisitSchemaKind::RootObject, VisitSchemaKind::Subscription]);
                }
            },

            GraphQLTypeKind::Scalar =>
                specifiers.push(VisitSchemaKind::ScalarType),

            GraphQLTypeKind::Union => specifiers.extend([
                VisitSchemaKind::CompositeType,
                VisitSchemaKind::AbstractType,
                VisitSchemaKind::UnionType,
            ]),
        }
        specifiers
    }

    fn visit_typed<T: Clone>(
        &mut self,
        type_name: &str,
        kind: GraphQLTypeKind,
        original: &T,
        schema: &Schema,
        wrap: fn(T) -> GraphQLType,
        unwrap: fn(GraphQLType) -> Option<T>,
    ) -> Result<VisitOutcome<T>> {
        let Some(most_specific) = self.specifiers(type_name, kind)
            .into_iter()
            .rev()
            .find(|specifier| self.callbacks.contains_key(specifier)) else {
            return Ok(VisitOutcome::Unchanged);
        };
        let Some(callback) = self.callbacks.get_mut(&most_specific) else {
            return Ok(VisitOutcome::Unchanged);
        };

        Ok(match callback(&wrap(original.clone()), schema)? {
            VisitOutcome::Unchanged => VisitOutcome::Unchanged,
            VisitOutcome::Remove => VisitOutcome::Remove,
            VisitOutcome::Replace(new_type) => {
                let actual = new_type.kind();
                match unwrap(new_type) {
                    Some(new_type) => VisitOutcome::Replace(new_type),
                    None => return Err(SchemaVisitError::MismatchedReplacementKind {
                        type_name: type_name.to_string(),
                        expected: kind,
                        actual,
                    }),
                }
            },
        })
    }
}
impl SchemaVisitor for NamedTypeVisitorMap<'_> {
    fn visit_schema(&mut self, schema: &Schema) -> Result<VisitOutcome<Schema>> {
        self.mutation_type_name = schema.mutation_type_name().map(str::to_string);
        self.query_type_name = schema.query_type_name().map(str::to_string);
        self.subscription_type_name = schema.subscription_type_name().map(str::to_string);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_enum(
        &mut self,
        enum_type: &EnumType,
        schema: &Schema,
    ) -> Result<VisitOutcome<EnumType>> {
        self.visit_typed(
            enum_type.name(),
            GraphQLTypeKind::Enum,
            enum_type,
            schema,
            GraphQLType::Enum,
            |type_| match type_ {
                GraphQLType::Enum(type_) => Some(type_),
                _ => None,
            },
        )
    }

    fn visit_input_object(
        &mut self,
        input_object: &InputObjectType,
        schema: &Schema,
    ) -> Result<VisitOutcome<InputObjectType>> {
        self.visit_typed(
            input_object.name(),
            GraphQLTypeKind::InputObject,
            input_object,
            schema,
            GraphQLType::InputObject,
            |type_| match type_ {
                GraphQLType::InputObject(type_) => Some(type_),
                _ => None,
            },
        )
    }

    fn visit_interface(
        &mut self,
        interface: &InterfaceType,
        schema: &Schema,
    ) -> Result<VisitOutcome<InterfaceType>> {
        self.visit_typed(
            interface.name(),
            GraphQLTypeKind::Interface,
            interface,
            schema,
            GraphQLType::Interface,
            |type_| match type_ {
                GraphQLType::Interface(type_) => Some(type_),
                _ => None,
            },
        )
    }

    fn visit_object(
        &mut self,
        object: &ObjectType,
        schema: &Schema,
    ) -> Result<VisitOutcome<ObjectType>> {
        self.visit_typed(
            object.name(),
            GraphQLTypeKind::Object,
            object,
            schema,
            GraphQLType::Object,
            |type_| match type_ {
                GraphQLType::Object(type_) => Some(type_),
                _ => None,
            },
        )
    }

    fn visit_scalar(
        &mut self,
        scalar: &ScalarType,
        schema: &Schema,
    ) -> Result<VisitOutcome<ScalarType>> {
        self.visit_typed(
            scalar.name(),
            GraphQLTypeKind::Scalar,
            scalar,
            schema,
            GraphQLType::Scalar,
            |type_| match type_ {
                GraphQLType::Scalar(type_) => Some(type_),
                _ => None,
            },
        )
    }

    fn visit_union(
        &mut self,
        union: &UnionType,
        schema: &Schema,
    ) -> Result<VisitOutcome<UnionType>> {
        self.visit_typed(
            union.name(),
            GraphQLTypeKind::Union,
            union,
            schema,
            GraphQLType::Union,
            |type_| match type_ {
                GraphQLType::Union(type_) => Some(type_),
                _ => None,
            },
        )
    }
}
