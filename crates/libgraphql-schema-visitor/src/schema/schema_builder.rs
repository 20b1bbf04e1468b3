use crate::DirectiveAnnotation;
use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypeExtension;
use crate::types::UnionType;
use crate::types::DEFAULT_DEPRECATION_REASON;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Where (and under what name) a root operation type was declared.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphQLOperationType {
    Mutation,
    Query,
    Subscription,
}
impl GraphQLOperationType {
    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for GraphQLOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}

/// Builds a [`Schema`] from one or more GraphQL schema documents.
///
/// ```
/// use libgraphql_schema_visitor::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")?
///     .build()?;
///
/// assert!(schema.query_type().is_some());
/// # Ok::<(), libgraphql_schema_visitor::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(loc::SourceLocation, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    schema_def_location: Option<loc::SourceLocation>,
    schema_directives: Vec<DirectiveAnnotation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: Directive::builtins()
                .into_iter()
                .map(|directive| (directive.name().to_string(), directive))
                .collect(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            schema_def_location: None,
            schema_directives: vec![],
            subscription_type: None,
            types: BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (
                    name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(name)),
                ))
                .collect(),
        }
    }

    /// Finish building: apply every type extension, resolve the root
    /// operation types and check that every type reference resolves.
    pub fn build(mut self) -> Result<Schema> {
        for (ext_srcloc, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(&ext_srcloc, ext)?;
        }

        let mutation_type = self.resolve_operation_type(
            GraphQLOperationType::Mutation,
            self.mutation_type.clone(),
        )?;
        let query_type = self.resolve_operation_type(
            GraphQLOperationType::Query,
            self.query_type.clone(),
        )?;
        let subscription_type = self.resolve_operation_type(
            GraphQLOperationType::Subscription,
            self.subscription_type.clone(),
        )?;

        let schema = Schema {
            directive_defs: self.directive_defs,
            directives: self.schema_directives,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        };
        check_type_references(&schema)?;

        tracing::debug!(
            types = schema.types.len(),
            directive_defs = schema.directive_defs.len(),
            "built schema",
        );
        Ok(schema)
    }

    /// Read the file at `file_path` and load it as a schema document.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            SchemaBuildError::SchemaFileReadError {
                file_path: file_path.to_path_buf(),
                err: err.to_string(),
            }
        })?;
        self.load_str(Some(file_path), content)
    }

    pub fn load_files<P: AsRef<Path>>(
        mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for file_path in file_paths {
            self = self.load_file(file_path)?;
        }
        Ok(self)
    }

    /// Parse `content` as a schema document and add its definitions.
    ///
    /// `file_path` is only used to attribute [`SourceLocation`](loc::SourceLocation)s.
    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let file_path = file_path
            .map(|path| path.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("<str>"));

        let ast_doc: ast::schema::Document =
            graphql_parser::schema::parse_schema::<String>(content.as_ref())
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.clone(),
                    err: err.to_string(),
                })?
                .into_static();

        let _span = tracing::debug_span!(
            "load_str",
            file = %file_path.display(),
        ).entered();

        for def in ast_doc.definitions {
            match def {
                ast::schema::Definition::DirectiveDefinition(def) =>
                    self.visit_directive_def(&file_path, def)?,
                ast::schema::Definition::SchemaDefinition(def) =>
                    self.visit_schema_def(&file_path, def)?,
                ast::schema::Definition::TypeDefinition(def) =>
                    self.visit_type_def(&file_path, def)?,
                ast::schema::Definition::TypeExtension(ext) => {
                    let ext_srcloc = loc::SourceLocation::from_pos(
                        &file_path,
                        type_extension_position(&ext),
                    );
                    self.pending_extensions.push((ext_srcloc, ext));
                },
            }
        }

        Ok(self)
    }

    fn add_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_.def_location().to_owned(),
                type_name,
            });
        }

        if let Some(conflicting_type) = self.types.get(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: conflicting_type.def_location().to_owned(),
                def2: type_.def_location().to_owned(),
            });
        }

        self.types.insert(type_name, type_);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        ext_srcloc: &loc::SourceLocation,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        let (type_name, ext_kind) = match &ext {
            ast::schema::TypeExtension::Enum(ext) => (&ext.name, GraphQLTypeKind::Enum),
            ast::schema::TypeExtension::InputObject(ext) => (&ext.name, GraphQLTypeKind::InputObject),
            ast::schema::TypeExtension::Interface(ext) => (&ext.name, GraphQLTypeKind::Interface),
            ast::schema::TypeExtension::Object(ext) => (&ext.name, GraphQLTypeKind::Object),
            ast::schema::TypeExtension::Scalar(ext) => (&ext.name, GraphQLTypeKind::Scalar),
            ast::schema::TypeExtension::Union(ext) => (&ext.name, GraphQLTypeKind::Union),
        };
        let type_name = type_name.to_string();

        let Some(type_) = self.types.get_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_location: ext_srcloc.to_owned(),
            });
        };

        if type_.kind() != ext_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: type_.kind(),
                extension_kind: ext_kind,
                extension_location: ext_srcloc.to_owned(),
            });
        }

        let ext_directives = match (type_, ext) {
            (GraphQLType::Enum(type_), ast::schema::TypeExtension::Enum(ext)) => {
                for value in ext.values {
                    insert_enum_value(type_, ext_srcloc, value)?;
                }
                ext.directives
            },

            (GraphQLType::InputObject(type_), ast::schema::TypeExtension::InputObject(ext)) => {
                for input_value in ext.fields {
                    let field = build_input_field(ext_srcloc, input_value);
                    insert_unique_field(
                        &mut type_.fields,
                        &type_.name,
                        field.name.to_string(),
                        field,
                        |field| &field.def_location,
                    )?;
                }
                ext.directives
            },

            (GraphQLType::Interface(InterfaceType(data)), ast::schema::TypeExtension::Interface(ext)) => {
                merge_object_or_interface_extension(
                    data,
                    ext_srcloc,
                    ext.implements_interfaces,
                    ext.fields,
                )?;
                ext.directives
            },

            (GraphQLType::Object(ObjectType(data)), ast::schema::TypeExtension::Object(ext)) => {
                merge_object_or_interface_extension(
                    data,
                    ext_srcloc,
                    ext.implements_interfaces,
                    ext.fields,
                )?;
                ext.directives
            },

            (GraphQLType::Scalar(_), ast::schema::TypeExtension::Scalar(ext)) =>
                ext.directives,

            (GraphQLType::Union(type_), ast::schema::TypeExtension::Union(ext)) => {
                for member_name in ext.types {
                    type_.members.insert(
                        member_name.to_string(),
                        NamedGraphQLTypeRef::new(&member_name, ext_srcloc.clone()),
                    );
                }
                ext.directives
            },

            // Kinds were compared above.
            _ => return Ok(()),
        };

        if let Some(type_) = self.types.get_mut(&type_name) {
            type_.extensions_mut().push(TypeExtension {
                def_location: ext_srcloc.to_owned(),
                directives: DirectiveAnnotation::from_ast(ext_srcloc, &ext_directives),
            });
        }
        Ok(())
    }

    fn resolve_operation_type(
        &self,
        operation: GraphQLOperationType,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        if let Some(NamedTypeDefLocation { def_location, type_name }) = explicit_def {
            return match self.types.get(&type_name) {
                Some(GraphQLType::Object(_)) =>
                    Ok(Some(NamedGraphQLTypeRef::new(type_name, def_location))),
                _ => Err(SchemaBuildError::UndefinedTypeReference {
                    type_name,
                    ref_location: def_location,
                }),
            };
        }

        // Without an explicit `schema { ... }` entry, fall back to the
        // conventionally-named object type (if there is one).
        if self.schema_def_location.is_some() {
            return Ok(None);
        }
        let default_name = operation.default_type_name();
        Ok(match self.types.get(default_name) {
            Some(type_ @ GraphQLType::Object(_)) => Some(NamedGraphQLTypeRef::new(
                default_name,
                type_.def_location().to_owned(),
            )),
            _ => None,
        })
    }

    fn visit_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);

        if let Some(existing_def) = self.directive_defs.get(&def.name) {
            if existing_def.is_builtin() {
                return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                    directive_name: def.name,
                    location: def_srcloc,
                });
            }
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                def1: existing_def.def_location().to_owned(),
                def2: def_srcloc,
            });
        }

        let params = build_parameters(
            &format!("@{}", def.name),
            &def_srcloc,
            def.arguments,
        )?;

        self.directive_defs.insert(def.name.to_string(), Directive {
            def_location: def_srcloc,
            description: def.description,
            locations: def.locations
                .iter()
                .filter_map(DirectiveLocation::from_ast)
                .collect(),
            name: def.name,
            params,
            repeatable: def.repeatable,
        });
        Ok(())
    }

    fn visit_schema_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);

        for (operation, type_name) in [
            (GraphQLOperationType::Mutation, def.mutation),
            (GraphQLOperationType::Query, def.query),
            (GraphQLOperationType::Subscription, def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match operation {
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing.def_location.to_owned(),
                    location2: def_srcloc,
                });
            }
            *slot = Some(NamedTypeDefLocation {
                def_location: def_srcloc.clone(),
                type_name,
            });
        }

        self.schema_directives.append(
            &mut DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
        );
        self.schema_def_location = Some(def_srcloc);
        Ok(())
    }

    fn visit_type_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let type_ = match def {
            ast::schema::TypeDefinition::Enum(def) => {
                let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);
                let mut type_ = EnumType {
                    def_location: def_srcloc.clone(),
                    description: def.description,
                    directives: DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
                    extensions: vec![],
                    name: def.name,
                    values: IndexMap::new(),
                };
                for value in def.values {
                    insert_enum_value(&mut type_, &def_srcloc, value)?;
                }
                GraphQLType::Enum(type_)
            },

            ast::schema::TypeDefinition::InputObject(def) => {
                let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);
                let mut fields = IndexMap::new();
                for input_value in def.fields {
                    let field = build_input_field(&def_srcloc, input_value);
                    insert_unique_field(
                        &mut fields,
                        &def.name,
                        field.name.to_string(),
                        field,
                        |field| &field.def_location,
                    )?;
                }
                GraphQLType::InputObject(InputObjectType {
                    def_location: def_srcloc.clone(),
                    description: def.description,
                    directives: DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
                    extensions: vec![],
                    fields,
                    name: def.name,
                })
            },

            ast::schema::TypeDefinition::Interface(def) => {
                let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_srcloc.clone(),
                    description: def.description,
                    directives: DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
                    extensions: vec![],
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name,
                };
                merge_object_or_interface_extension(
                    &mut data,
                    &def_srcloc,
                    def.implements_interfaces,
                    def.fields,
                )?;
                GraphQLType::Interface(InterfaceType(data))
            },

            ast::schema::TypeDefinition::Object(def) => {
                let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_srcloc.clone(),
                    description: def.description,
                    directives: DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
                    extensions: vec![],
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name,
                };
                merge_object_or_interface_extension(
                    &mut data,
                    &def_srcloc,
                    def.implements_interfaces,
                    def.fields,
                )?;
                GraphQLType::Object(ObjectType(data))
            },

            ast::schema::TypeDefinition::Scalar(def) => {
                let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);
                GraphQLType::Scalar(ScalarType {
                    def_location: def_srcloc.clone(),
                    description: def.description,
                    directives: DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
                    extensions: vec![],
                    name: def.name,
                })
            },

            ast::schema::TypeDefinition::Union(def) => {
                let def_srcloc = loc::SourceLocation::from_pos(file_path, def.position);
                GraphQLType::Union(UnionType {
                    def_location: def_srcloc.clone(),
                    description: def.description,
                    directives: DirectiveAnnotation::from_ast(&def_srcloc, &def.directives),
                    extensions: vec![],
                    members: def.types
                        .iter()
                        .map(|member_name| (
                            member_name.to_string(),
                            NamedGraphQLTypeRef::new(member_name, def_srcloc.clone()),
                        ))
                        .collect(),
                    name: def.name,
                })
            },
        };

        self.add_type(type_)
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_field(
    owner_name: &str,
    type_srcloc: &loc::SourceLocation,
    ast_field: ast::schema::Field,
) -> Result<Field> {
    let field_srcloc = type_srcloc.with_ast_position(&ast_field.position);
    let directives = DirectiveAnnotation::from_ast(&field_srcloc, &ast_field.directives);
    Ok(Field {
        deprecation_reason: deprecation_reason(&directives),
        description: ast_field.description,
        directives,
        parameters: build_parameters(
            &format!("{owner_name}.{}", ast_field.name),
            &field_srcloc,
            ast_field.arguments,
        )?,
        type_annotation: TypeAnnotation::from_ast_type(
            &field_srcloc,
            &ast_field.field_type,
        ),
        def_location: field_srcloc,
        name: ast_field.name,
    })
}

fn build_input_field(
    type_srcloc: &loc::SourceLocation,
    input_value: ast::schema::InputValue,
) -> InputField {
    let field_srcloc = type_srcloc.with_ast_position(&input_value.position);
    let directives = DirectiveAnnotation::from_ast(&field_srcloc, &input_value.directives);
    InputField {
        default_value: input_value.default_value,
        deprecation_reason: deprecation_reason(&directives),
        description: input_value.description,
        directives,
        type_annotation: TypeAnnotation::from_ast_type(
            &field_srcloc,
            &input_value.value_type,
        ),
        def_location: field_srcloc,
        name: input_value.name,
    }
}

fn build_parameters(
    owner: &str,
    owner_srcloc: &loc::SourceLocation,
    input_values: Vec<ast::schema::InputValue>,
) -> Result<IndexMap<String, Parameter>> {
    let mut params = IndexMap::new();
    for input_value in input_values {
        let param_srcloc = owner_srcloc.with_ast_position(&input_value.position);
        if params.contains_key(&input_value.name) {
            return Err(SchemaBuildError::DuplicateParameterDefinition {
                owner: owner.to_string(),
                param_name: input_value.name,
                def_location: param_srcloc,
            });
        }
        params.insert(input_value.name.to_string(), Parameter {
            default_value: input_value.default_value,
            description: input_value.description,
            directives: DirectiveAnnotation::from_ast(&param_srcloc, &input_value.directives),
            type_annotation: TypeAnnotation::from_ast_type(
                &param_srcloc,
                &input_value.value_type,
            ),
            def_location: param_srcloc,
            name: input_value.name,
        });
    }
    Ok(params)
}

/// Every by-name reference in `schema` must resolve to a type of a kind that
/// is legal in that position.
fn check_type_references(schema: &Schema) -> Result<()> {
    let undefined = |annot: &TypeAnnotation| {
        let named_annot = annot.innermost_named_type_annotation();
        if schema.types.contains_key(named_annot.graphql_type_name()) {
            Ok(())
        } else {
            Err(SchemaBuildError::UndefinedTypeReference {
                type_name: named_annot.graphql_type_name().to_string(),
                ref_location: named_annot.ref_location().to_owned(),
            })
        }
    };
    let check_ref = |type_ref: &NamedGraphQLTypeRef| {
        type_ref.deref(schema).map(|_| ()).map_err(|_| {
            SchemaBuildError::UndefinedTypeReference {
                type_name: type_ref.name().to_string(),
                ref_location: type_ref.ref_location().to_owned(),
            }
        })
    };

    for directive in schema.directive_defs.values() {
        for param in directive.params.values() {
            undefined(&param.type_annotation)?;
        }
    }

    for type_ in schema.types.values() {
        match type_ {
            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

            GraphQLType::InputObject(type_) => {
                for field in type_.fields.values() {
                    undefined(&field.type_annotation)?;
                }
            },

            GraphQLType::Interface(InterfaceType(data))
            | GraphQLType::Object(ObjectType(data)) => {
                for iface_ref in &data.interfaces {
                    check_ref(iface_ref)?;
                }
                for field in data.fields.values() {
                    undefined(&field.type_annotation)?;
                    for param in field.parameters.values() {
                        undefined(&param.type_annotation)?;
                    }
                }
            },

            GraphQLType::Union(type_) => {
                for member_ref in type_.members.values() {
                    check_ref(member_ref)?;
                }
            },
        }
    }

    Ok(())
}

/// The reason given by a `@deprecated` annotation in `directives`, if there
/// is one.
fn deprecation_reason(directives: &[DirectiveAnnotation]) -> Option<String> {
    let annot = directives.iter().find(|annot| annot.directive_name() == "deprecated")?;
    Some(match annot.argument("reason") {
        Some(ast::Value::String(reason)) => reason.to_string(),
        _ => DEFAULT_DEPRECATION_REASON.to_string(),
    })
}

fn insert_enum_value(
    enum_type: &mut EnumType,
    type_srcloc: &loc::SourceLocation,
    ast_value: ast::schema::EnumValue,
) -> Result<()> {
    let value_srcloc = type_srcloc.with_ast_position(&ast_value.position);
    if let Some(existing) = enum_type.values.get(&ast_value.name) {
        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
            enum_name: enum_type.name.to_string(),
            value_name: ast_value.name,
            value_def1: existing.def_location.to_owned(),
            value_def2: value_srcloc,
        });
    }

    let directives = DirectiveAnnotation::from_ast(&value_srcloc, &ast_value.directives);
    enum_type.values.insert(ast_value.name.to_string(), EnumValue {
        def_location: value_srcloc,
        deprecation_reason: deprecation_reason(&directives),
        description: ast_value.description,
        directives,
        name: ast_value.name,
    });
    Ok(())
}

fn insert_unique_field<T>(
    fields: &mut IndexMap<String, T>,
    type_name: &str,
    field_name: String,
    field: T,
    def_location: impl Fn(&T) -> &loc::SourceLocation,
) -> Result<()> {
    if let Some(existing) = fields.get(&field_name) {
        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
            type_name: type_name.to_string(),
            field_name,
            field_def1: def_location(existing).to_owned(),
            field_def2: def_location(&field).to_owned(),
        });
    }
    fields.insert(field_name, field);
    Ok(())
}

fn merge_object_or_interface_extension(
    data: &mut ObjectOrInterfaceTypeData,
    srcloc: &loc::SourceLocation,
    interfaces: Vec<String>,
    ast_fields: Vec<ast::schema::Field>,
) -> Result<()> {
    for iface_name in interfaces {
        if !data.interfaces.iter().any(|iface_ref| iface_ref.name() == iface_name) {
            data.interfaces.push(NamedGraphQLTypeRef::new(iface_name, srcloc.clone()));
        }
    }
    for ast_field in ast_fields {
        let field = build_field(&data.name, srcloc, ast_field)?;
        insert_unique_field(
            &mut data.fields,
            &data.name,
            field.name.to_string(),
            field,
            |field| &field.def_location,
        )?;
    }
    Ok(())
}

fn type_extension_position(ext: &ast::schema::TypeExtension) -> ast::Pos {
    match ext {
        ast::schema::TypeExtension::Enum(ext) => ext.position,
        ast::schema::TypeExtension::InputObject(ext) => ext.position,
        ast::schema::TypeExtension::Interface(ext) => ext.position,
        ast::schema::TypeExtension::Object(ext) => ext.position,
        ast::schema::TypeExtension::Scalar(ext) => ext.position,
        ast::schema::TypeExtension::Union(ext) => ext.position,
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the value `{value_name}` more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type defines the field `{field_name}` more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("`{owner}` defines the parameter `{param_name}` more than once")]
    DuplicateParameterDefinition {
        owner: String,
        param_name: String,
        def_location: loc::SourceLocation,
    },

    #[error("Multiple types were defined with the same name: `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Attempted to extend the undefined type `{type_name}`")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend the {type_kind} type `{type_name}` with an \
        extension of kind {extension_kind}"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
    },

    #[error("Type names starting with `__` are reserved: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Failed to parse `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Built-in directives cannot be redefined: `@{directive_name}`")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failed to read `{}`: {err}", file_path.display())]
    SchemaFileReadError {
        file_path: PathBuf,
        err: String,
    },

    #[error("Reference to undefined type `{type_name}` at {ref_location}")]
    UndefinedTypeReference {
        type_name: String,
        ref_location: loc::SourceLocation,
    },
}
