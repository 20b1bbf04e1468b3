use crate::DirectiveAnnotation;
use crate::Value;
use crate::coerce_argument_values;
use crate::directive_visitors::CreatedDirectiveVisitor;
use crate::directive_visitors::DirectiveVisitorInstance;
use crate::directive_visitors::DirectiveVisitorKind;
use crate::directive_visitors::DirectiveVisitorRegistry;
use crate::schema::Schema;
use crate::types::Directive;
use crate::visitor::SchemaVisitError;
use crate::visitor::SchemaVisitor;
use crate::visitor::VisitableNode;
use crate::visitor::VisitorMethod;
use crate::visitor::VisitorSelector;
use crate::visitor::visit_schema;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaVisitError>;

type BoxedKind<'ctx, Ctx> = Box<dyn DirectiveVisitorKind<'ctx, Ctx> + 'ctx>;

/// A set of [`DirectiveVisitorKind`]s keyed by the directive name each one
/// handles.
///
/// ```
/// use libgraphql_schema_visitor::directive_visitors::DirectiveVisitorInstance;
/// use libgraphql_schema_visitor::directive_visitors::DirectiveVisitorKind;
/// use libgraphql_schema_visitor::directive_visitors::SchemaDirectiveVisitors;
/// use libgraphql_schema_visitor::schema::SchemaBuilder;
/// use libgraphql_schema_visitor::types::Field;
/// use libgraphql_schema_visitor::visitor::FieldParent;
/// use libgraphql_schema_visitor::visitor::SchemaVisitError;
/// use libgraphql_schema_visitor::visitor::SchemaVisitor;
/// use libgraphql_schema_visitor::visitor::VisitOutcome;
/// use libgraphql_schema_visitor::visitor::VisitorMethod;
/// use libgraphql_schema_visitor::visitor::VisitorMethodSet;
/// use libgraphql_schema_visitor::Schema;
///
/// struct Internal;
/// impl SchemaVisitor for Internal {
///     fn visit_field_definition(
///         &mut self,
///         _field: &Field,
///         _parent: FieldParent<'_>,
///         _schema: &Schema,
///     ) -> Result<VisitOutcome<Field>, SchemaVisitError> {
///         Ok(VisitOutcome::Remove)
///     }
/// }
///
/// struct InternalKind;
/// impl DirectiveVisitorKind<'static> for InternalKind {
///     fn implemented_methods(&self) -> VisitorMethodSet {
///         [VisitorMethod::FieldDefinition].into()
///     }
///
///     fn create_visitor(
///         &self,
///         _instance: DirectiveVisitorInstance<'static>,
///     ) -> Result<Box<dyn SchemaVisitor>, SchemaVisitError> {
///         Ok(Box::new(Internal))
///     }
/// }
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, concat!(
///         "directive @internal on FIELD_DEFINITION\n",
///         "type Query { public: Int, secret: Int @internal }",
///     ))?
///     .build()?;
///
/// let (schema, registry) = SchemaDirectiveVisitors::new()
///     .add("internal", InternalKind)
///     .visit_schema_directives(schema, &())?;
///
/// let query_fields = schema.query_type().unwrap().fields();
/// assert!(query_fields.contains_key("public"));
/// assert!(!query_fields.contains_key("secret"));
/// assert_eq!(registry.get("internal").unwrap().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SchemaDirectiveVisitors<'ctx, Ctx: ?Sized + 'ctx = ()> {
    kinds: Vec<(String, BoxedKind<'ctx, Ctx>)>,
    variables: IndexMap<String, Value>,
}
impl<'ctx, Ctx: ?Sized + 'ctx> SchemaDirectiveVisitors<'ctx, Ctx> {
    pub fn new() -> Self {
        Self {
            kinds: vec![],
            variables: IndexMap::new(),
        }
    }

    /// Register `kind` as a handler for `@directive_name`.
    ///
    /// More than one kind may be registered for the same name; their visitors
    /// are created (and run) in registration order.
    pub fn add(
        mut self,
        directive_name: impl AsRef<str>,
        kind: impl DirectiveVisitorKind<'ctx, Ctx> + 'ctx,
    ) -> Self {
        self.kinds.push((directive_name.as_ref().to_string(), Box::new(kind)));
        self
    }

    /// Variable bindings used to resolve `$variable` references in directive
    /// arguments. No variables are bound by default.
    pub fn set_variables(mut self, variables: IndexMap<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    /// Traverse `schema`, creating a visitor for every annotated occurrence of
    /// a registered directive and running it at the node it is annotated on.
    ///
    /// Returns the rewritten (and healed) [`Schema`] along with every visitor
    /// that was created, grouped by directive name.
    ///
    /// This is [`prepare()`](Self::prepare) followed by
    /// [`PreparedDirectiveVisitors::visit_schema_directives()`]. Call those
    /// two directly to keep ownership of `schema` when setup fails.
    pub fn visit_schema_directives(
        &self,
        schema: Schema,
        context: &'ctx Ctx,
    ) -> Result<(Schema, DirectiveVisitorRegistry<'ctx>)> {
        self.prepare(&schema)?.visit_schema_directives(schema, context)
    }

    /// Resolve each registered directive's declaration against `schema` (a
    /// kind-provided declaration wins over the schema's own) and check it
    /// against the callbacks its kinds implement.
    ///
    /// Fails with [`SchemaVisitError::DuplicateDirectiveDeclaration`] or
    /// [`SchemaVisitError::IncompleteDirectiveHandler`] without touching
    /// `schema`.
    pub fn prepare(&self, schema: &Schema) -> Result<PreparedDirectiveVisitors<'_, 'ctx, Ctx>> {
        let declarations = self.resolve_declarations(schema)?;
        self.check_implemented_methods(&declarations)?;
        Ok(PreparedDirectiveVisitors {
            declarations,
            visitors: self,
        })
    }

    fn check_implemented_methods(
        &self,
        declarations: &IndexMap<String, Directive>,
    ) -> Result<()> {
        for (directive_name, kind) in self.kinds.iter() {
            let Some(declaration) = declarations.get(directive_name) else {
                continue;
            };
            let implemented = kind.implemented_methods();
            for location in declaration.locations() {
                let Some(method) = location.visitor_method() else {
                    continue;
                };
                if !implemented.contains(method) {
                    return Err(SchemaVisitError::IncompleteDirectiveHandler {
                        directive_name: directive_name.to_string(),
                        location: *location,
                        method,
                    });
                }
            }
        }
        Ok(())
    }

    fn resolve_declarations(&self, schema: &Schema) -> Result<IndexMap<String, Directive>> {
        let mut declarations = IndexMap::new();
        let mut kind_declared: HashSet<&str> = HashSet::new();

        for (directive_name, kind) in self.kinds.iter() {
            match kind.directive_declaration(directive_name, schema) {
                Some(declaration) => {
                    if !kind_declared.insert(directive_name.as_str()) {
                        return Err(SchemaVisitError::DuplicateDirectiveDeclaration {
                            directive_name: directive_name.to_string(),
                        });
                    }
                    declarations.insert(directive_name.to_string(), declaration);
                },

                None => {
                    if kind_declared.contains(directive_name.as_str()) {
                        continue;
                    }
                    if let Some(declaration) = schema.directive_def(directive_name) {
                        declarations.insert(directive_name.to_string(), declaration.clone());
                    }
                },
            }
        }

        Ok(declarations)
    }
}
impl<'ctx, Ctx: ?Sized + 'ctx> std::default::Default for SchemaDirectiveVisitors<'ctx, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`SchemaDirectiveVisitors`] whose declarations have been resolved and
/// checked against a [`Schema`], ready to traverse it.
pub struct PreparedDirectiveVisitors<'v, 'ctx, Ctx: ?Sized + 'ctx = ()> {
    declarations: IndexMap<String, Directive>,
    visitors: &'v SchemaDirectiveVisitors<'ctx, Ctx>,
}
impl<'v, 'ctx, Ctx: ?Sized + 'ctx> PreparedDirectiveVisitors<'v, 'ctx, Ctx> {
    pub fn declarations(&self) -> &IndexMap<String, Directive> {
        &self.declarations
    }

    /// Traverse `schema`, which should be the [`Schema`] this was prepared
    /// against.
    pub fn visit_schema_directives(
        self,
        schema: Schema,
        context: &'ctx Ctx,
    ) -> Result<(Schema, DirectiveVisitorRegistry<'ctx>)> {
        let kinds = self.visitors.kinds.as_slice();
        let _span = tracing::debug_span!(
            "visit_schema_directives",
            kinds = kinds.len(),
        ).entered();

        let mut selector = DirectiveVisitorSelector {
            context,
            created: vec![],
            declarations: self.declarations,
            kinds,
            variables: &self.visitors.variables,
        };
        let schema = visit_schema(schema, &mut selector)?;

        let registry = DirectiveVisitorRegistry::new(
            kinds.iter().map(|(name, _)| name.as_str()),
            selector.created,
        );
        Ok((schema, registry))
    }
}

struct DirectiveVisitorSelector<'k, 'ctx, Ctx: ?Sized + 'ctx> {
    context: &'ctx Ctx,
    created: Vec<CreatedDirectiveVisitor<'ctx>>,
    declarations: IndexMap<String, Directive>,
    kinds: &'k [(String, BoxedKind<'ctx, Ctx>)],
    variables: &'k IndexMap<String, Value>,
}
impl<Ctx: ?Sized> DirectiveVisitorSelector<'_, '_, Ctx> {
    fn coerce_args(
        &self,
        schema: &Schema,
        annot: &DirectiveAnnotation,
    ) -> Result<IndexMap<String, Value>> {
        Ok(match self.declarations.get(annot.directive_name()) {
            Some(declaration) => coerce_argument_values(
                schema,
                declaration.params(),
                annot,
                self.variables,
            )?,

            // Undeclared directives pass their arguments through as written,
            // minus any that reference an unbound variable.
            None => annot.arguments()
                .iter()
                .filter_map(|(arg_name, ast_value)| {
                    Value::from_ast_untyped(ast_value, self.variables)
                        .map(|value| (arg_name.to_string(), value))
                })
                .collect(),
        })
    }
}
impl<Ctx: ?Sized> VisitorSelector for DirectiveVisitorSelector<'_, '_, Ctx> {
    fn select<'s>(
        &'s mut self,
        schema: &Schema,
        node: &VisitableNode<'_>,
        method: VisitorMethod,
    ) -> Result<Vec<&'s mut dyn SchemaVisitor>> {
        let first_created = self.created.len();
        let all_kinds = self.kinds;

        for annot in node.directives() {
            let directive_name = annot.directive_name();
            let kinds = all_kinds
                .iter()
                .filter(|(name, kind)| {
                    name == directive_name && kind.implemented_methods().contains(method)
                });

            for (_, kind) in kinds {
                let args = self.coerce_args(schema, annot)?;
                let visited_node = node.coordinate();
                tracing::debug!(
                    directive = directive_name,
                    node = %visited_node,
                    %method,
                    "creating directive visitor",
                );
                let visitor = kind.create_visitor(DirectiveVisitorInstance {
                    args: args.clone(),
                    context: self.context,
                    directive_name: directive_name.to_string(),
                    visited_node: visited_node.clone(),
                })?;
                self.created.push(CreatedDirectiveVisitor {
                    args,
                    directive_name: directive_name.to_string(),
                    visited_node,
                    visitor,
                });
            }
        }

        Ok(self.created[first_created..]
            .iter_mut()
            .map(|created| &mut *created.visitor as &mut dyn SchemaVisitor)
            .collect())
    }
}
