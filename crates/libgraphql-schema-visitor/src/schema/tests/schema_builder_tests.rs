use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::GraphQLOperationType;
use crate::types::GraphQLTypeKind;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn builtins_are_present_without_any_load() -> Result<()> {
        let schema = SchemaBuilder::new().build()?;

        assert_eq!(
            schema.all_types().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["Boolean", "Float", "ID", "Int", "String"],
        );
        assert_eq!(
            schema.directive_defs().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["deprecated", "include", "skip", "specifiedBy"],
        );
        assert!(schema.query_type().is_none());
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn types_keep_definition_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { user: User }\n",
                "type User implements Node { id: ID! }\n",
                "interface Node { id: ID! }\n",
                "enum Role { ADMIN USER }\n",
            ))?
            .build()?;

        let user_defined: Vec<(&str, GraphQLTypeKind)> = schema.all_types()
            .values()
            .filter(|type_| !type_.as_scalar().is_some_and(|scalar| scalar.is_builtin()))
            .map(|type_| (type_.name(), type_.kind()))
            .collect();
        assert_eq!(user_defined, vec![
            ("Query", GraphQLTypeKind::Object),
            ("User", GraphQLTypeKind::Object),
            ("Node", GraphQLTypeKind::Interface),
            ("Role", GraphQLTypeKind::Enum),
        ]);

        let user_type = schema.get_type("User").unwrap().as_object().unwrap();
        assert_eq!(user_type.interface_names(), vec!["Node"]);
        assert_eq!(user_type.interfaces(&schema).len(), 1);

        let role_type = schema.get_type("Role").unwrap().as_enum().unwrap();
        assert_eq!(
            role_type.values().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["ADMIN", "USER"],
        );

        Ok(())
    }

    #[test]
    fn locations_point_into_the_loaded_file() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(Some(Path::new("api.graphql")), "\ntype Query { f: Int }")?
            .build()?;

        let query_type = schema.get_type("Query").unwrap();
        let file_pos = query_type.def_location().file_position().unwrap();
        assert_eq!(file_pos.file, PathBuf::from("api.graphql"));
        assert_eq!(file_pos.line, 2);

        Ok(())
    }

    #[test]
    fn load_file_reports_unreadable_files() {
        let result = SchemaBuilder::new()
            .load_file("/definitely/not/a/real/path.graphql");

        assert!(matches!(
            result,
            Err(SchemaBuildError::SchemaFileReadError { .. }),
        ));
    }

    #[test]
    fn parse_errors_name_the_source() {
        let result = SchemaBuilder::new().load_str(None, "type Query {");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file, .. }) if file == PathBuf::from("<str>"),
        ));
    }
}

mod operation_types {
    use super::*;

    #[test]
    fn conventional_names_are_used_without_a_schema_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Int }\n",
                "type Mutation { b: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type_name(), Some("Query"));
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), None);

        Ok(())
    }

    #[test]
    fn explicit_schema_definition_wins() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery }\n",
                "type RootQuery { a: Int }\n",
                "type Mutation { b: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "RootQuery");
        // A schema definition that omits `mutation` means there isn't one
        assert!(schema.mutation_type().is_none());

        Ok(())
    }

    #[test]
    fn duplicate_operation_definition() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }  type A { a: Int }")?
            .load_str(None, "schema { query: A }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: GraphQLOperationType::Query,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn operation_type_must_be_a_defined_object() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Missing }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::UndefinedTypeReference { type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }
}

mod directives {
    use super::*;

    #[test]
    fn extension_directives_are_kept_separately() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @tag(name: String!) repeatable on OBJECT\n",
                "type Query @tag(name: \"a\") { f: Int }\n",
            ))?
            .load_str(None, "extend type Query @tag(name: \"b\")")?
            .build()?;

        let query_type = schema.get_type("Query").unwrap();
        assert_eq!(query_type.directives().len(), 1);
        assert_eq!(query_type.extensions().len(), 1);
        assert_eq!(query_type.extensions()[0].directives().len(), 1);
        assert_eq!(query_type.all_directives().len(), 2);
        assert!(schema.directive_def("tag").unwrap().is_repeatable());

        Ok(())
    }

    #[test]
    fn deprecation_reasons_are_read_from_annotations() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query {\n",
                "  a: Int @deprecated\n",
                "  b: Int @deprecated(reason: \"use c\")\n",
                "  c: Int\n",
                "}\n",
                "enum Color { RED @deprecated BLUE }\n",
            ))?
            .build()?;

        let fields = schema.query_type().unwrap().fields();
        assert_eq!(fields["a"].deprecation_reason(), Some("No longer supported"));
        assert_eq!(fields["b"].deprecation_reason(), Some("use c"));
        assert_eq!(fields["c"].deprecation_reason(), None);

        let color = schema.get_type("Color").unwrap().as_enum().unwrap();
        assert!(color.value("RED").unwrap().is_deprecated());
        assert!(!color.value("BLUE").unwrap().is_deprecated());

        Ok(())
    }

    #[test]
    fn builtin_directives_cannot_be_redefined() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @skip(if: Boolean!) on FIELD");

        assert!(matches!(
            result,
            Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. })
                if directive_name == "skip",
        ));
    }

    #[test]
    fn duplicate_directive_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @a on FIELD_DEFINITION\n",
                "directive @a on OBJECT\n",
            ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. })
                if directive_name == "a",
        ));
    }

    #[test]
    fn directive_annotations_keep_uncoerced_arguments() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @limit(max: Int) on FIELD_DEFINITION\n",
                "type Query { f: Int @limit(max: $cap) }\n",
            ))?
            .build()?;

        let annot = &schema.query_type().unwrap().fields()["f"].directives()[0];
        assert_eq!(annot.directive_name(), "limit");
        assert!(matches!(
            annot.argument("max"),
            Some(crate::ast::Value::Variable(var_name)) if var_name == "cap",
        ));
        assert!(matches!(annot.def_location(), loc::SourceLocation::Schema(_)));

        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn undefined_type_reference() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { user: User }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::UndefinedTypeReference { type_name, .. })
                if type_name == "User",
        ));

        Ok(())
    }

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }  type Query { b: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "extend type Missing { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_the_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }  extend enum Query { B }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                type_kind: GraphQLTypeKind::Object,
                extension_kind: GraphQLTypeKind::Enum,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn dunder_prefixed_type_names_are_reserved() {
        let result = SchemaBuilder::new()
            .load_str(None, "type __Secret { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
    }

    #[test]
    fn duplicate_field_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int  a: String }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a",
        ));
    }
}
