use crate::ArgumentCoercionError;
use crate::Schema;
use crate::Value;
use crate::ast;
use crate::directive_visitors::DirectiveVisitorInstance;
use crate::directive_visitors::DirectiveVisitorKind;
use crate::directive_visitors::SchemaDirectiveVisitors;
use crate::test_utils::build_schema;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::visitor::FieldParent;
use crate::visitor::SchemaVisitError;
use crate::visitor::SchemaVisitor;
use crate::visitor::VisitOutcome;
use crate::visitor::VisitedNode;
use crate::visitor::VisitorMethod;
use crate::visitor::VisitorMethodSet;
use indexmap::IndexMap;
use std::cell::RefCell;

type Result<T> = std::result::Result<T, SchemaVisitError>;

/// Shared across every visitor created during a run: one line per created
/// visitor.
type Log = RefCell<Vec<String>>;

/// Logs each visitor it creates to the shared [`Log`]. The visitors append
/// their directive's name to the description of the node they visit.
struct LoggingKind {
    declaration: Option<Directive>,
    methods: VisitorMethodSet,
}
impl LoggingKind {
    fn new(methods: impl Into<VisitorMethodSet>) -> Self {
        Self {
            declaration: None,
            methods: methods.into(),
        }
    }

    fn with_declaration(mut self, declaration: Directive) -> Self {
        self.declaration = Some(declaration);
        self
    }
}
impl<'ctx> DirectiveVisitorKind<'ctx, Log> for LoggingKind {
    fn implemented_methods(&self) -> VisitorMethodSet {
        self.methods
    }

    fn directive_declaration(&self, _directive_name: &str, _schema: &Schema) -> Option<Directive> {
        self.declaration.clone()
    }

    fn create_visitor(
        &self,
        instance: DirectiveVisitorInstance<'ctx, Log>,
    ) -> Result<Box<dyn SchemaVisitor + 'ctx>> {
        instance.context().borrow_mut().push(format!(
            "@{} on {}",
            instance.directive_name(),
            instance.visited_node(),
        ));
        Ok(Box::new(AppendName(instance.directive_name().to_string())))
    }
}

struct AppendName(String);
impl AppendName {
    fn appended(&self, description: Option<&str>) -> Option<String> {
        Some(format!("{}{}", description.unwrap_or_default(), self.0))
    }
}
impl SchemaVisitor for AppendName {
    fn visit_object(
        &mut self,
        object: &ObjectType,
        _schema: &Schema,
    ) -> Result<VisitOutcome<ObjectType>> {
        let mut object = object.clone();
        object.set_description(self.appended(object.description()));
        Ok(VisitOutcome::Replace(object))
    }

    fn visit_field_definition(
        &mut self,
        field: &Field,
        _parent: FieldParent<'_>,
        _schema: &Schema,
    ) -> Result<VisitOutcome<Field>> {
        let mut field = field.clone();
        field.set_description(self.appended(field.description()));
        Ok(VisitOutcome::Replace(field))
    }
}

fn field_description<'a>(schema: &'a Schema, field_name: &str) -> Option<&'a str> {
    schema.query_type().unwrap().fields()[field_name].description()
}

mod traversal {
    use super::*;

    #[test]
    fn visitors_run_only_where_annotated() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @upper on FIELD_DEFINITION\n",
            "type Query { a: Int @upper, b: Int }\n",
        ));

        let (schema, registry) = SchemaDirectiveVisitors::new()
            .add("upper", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(field_description(&schema, "a"), Some("upper"));
        assert_eq!(field_description(&schema, "b"), None);
        assert_eq!(log.borrow().as_slice(), ["@upper on Query.a"]);
        assert_eq!(registry.get("upper").map(|created| created.len()), Some(1));

        Ok(())
    }

    #[test]
    fn chains_follow_annotation_order() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @one on FIELD_DEFINITION\n",
            "directive @two on FIELD_DEFINITION\n",
            "type Query { a: Int @one @two, b: Int @two @one }\n",
        ));

        let (schema, _) = SchemaDirectiveVisitors::new()
            .add("one", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .add("two", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(field_description(&schema, "a"), Some("onetwo"));
        assert_eq!(field_description(&schema, "b"), Some("twoone"));

        Ok(())
    }

    #[test]
    fn kinds_sharing_a_name_run_in_registration_order() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @mark on FIELD_DEFINITION\n",
            "type Query { a: Int @mark }\n",
        ));

        let (schema, registry) = SchemaDirectiveVisitors::new()
            .add("mark", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .add("mark", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(field_description(&schema, "a"), Some("markmark"));
        assert_eq!(registry.get("mark").map(|created| created.len()), Some(2));

        Ok(())
    }

    #[test]
    fn extension_directives_run_after_primary_ones() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @first on OBJECT\n",
            "directive @second on OBJECT\n",
            "extend type Query @second\n",
            "type Query @first { a: Int }\n",
        ));

        let (schema, _) = SchemaDirectiveVisitors::new()
            .add("first", LoggingKind::new([VisitorMethod::Object]))
            .add("second", LoggingKind::new([VisitorMethod::Object]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(schema.query_type().unwrap().description(), Some("firstsecond"));
        assert_eq!(log.borrow().as_slice(), ["@first on Query", "@second on Query"]);

        Ok(())
    }

    #[test]
    fn only_nodes_visited_by_an_implemented_method_get_visitors() -> Result<()> {
        let log = Log::default();
        // `@mark` is not declared, so its locations can't be checked up front
        let schema = build_schema("type Query @mark { a: Int @mark }");

        let (_, registry) = SchemaDirectiveVisitors::new()
            .add("mark", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(log.borrow().as_slice(), ["@mark on Query.a"]);
        let visited: Vec<&VisitedNode> = registry.get("mark")
            .unwrap_or_default()
            .iter()
            .map(|created| created.visited_node())
            .collect();
        assert_eq!(visited, vec![&VisitedNode::Field {
            field_name: "a".to_string(),
            type_name: "Query".to_string(),
        }]);

        Ok(())
    }

    #[test]
    fn nested_locations_are_reached() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @seen on ARGUMENT_DEFINITION | ENUM_VALUE | INPUT_FIELD_DEFINITION | SCHEMA\n",
            "schema @seen { query: Query }\n",
            "type Query { f(x: Int @seen): Int }\n",
            "enum Color { RED @seen GREEN }\n",
            "input Filter { q: String @seen }\n",
        ));

        SchemaDirectiveVisitors::new()
            .add("seen", LoggingKind::new([
                VisitorMethod::ArgumentDefinition,
                VisitorMethod::EnumValue,
                VisitorMethod::InputFieldDefinition,
                VisitorMethod::Schema,
            ]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(log.borrow().as_slice(), [
            "@seen on schema",
            "@seen on Query.f(x:)",
            "@seen on Color.RED",
            "@seen on Filter.q",
        ]);

        Ok(())
    }

    #[test]
    fn removing_an_annotated_node() -> Result<()> {
        struct Hide;
        impl SchemaVisitor for Hide {
            fn visit_field_definition(
                &mut self,
                _field: &Field,
                _parent: FieldParent<'_>,
                _schema: &Schema,
            ) -> Result<VisitOutcome<Field>> {
                Ok(VisitOutcome::Remove)
            }
        }

        struct HideKind;
        impl DirectiveVisitorKind<'static> for HideKind {
            fn implemented_methods(&self) -> VisitorMethodSet {
                [VisitorMethod::FieldDefinition].into()
            }

            fn create_visitor(
                &self,
                _instance: DirectiveVisitorInstance<'static>,
            ) -> Result<Box<dyn SchemaVisitor>> {
                Ok(Box::new(Hide))
            }
        }

        let schema = build_schema(concat!(
            "directive @hide on FIELD_DEFINITION\n",
            "directive @log on FIELD_DEFINITION\n",
            "type Query { a: Int @hide, b: Int }\n",
        ));

        let (schema, _) = SchemaDirectiveVisitors::new()
            .add("hide", HideKind)
            .visit_schema_directives(schema, &())?;

        assert_eq!(
            schema.query_type().unwrap().fields().keys().collect::<Vec<_>>(),
            vec!["b"],
        );

        Ok(())
    }
}

mod declarations {
    use super::*;

    #[test]
    fn unimplemented_location_fails_before_traversal() {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @tag on FIELD_DEFINITION | OBJECT\n",
            "type Query @tag { a: Int @tag }\n",
        ));

        let original = schema.clone();
        let visitors = SchemaDirectiveVisitors::new()
            .add("tag", LoggingKind::new([VisitorMethod::FieldDefinition]));

        let result = visitors.prepare(&schema);

        assert!(matches!(
            result,
            Err(SchemaVisitError::IncompleteDirectiveHandler {
                directive_name,
                location: DirectiveLocation::Object,
                method: VisitorMethod::Object,
            }) if directive_name == "tag",
        ));
        assert!(log.borrow().is_empty());
        assert_eq!(schema, original);
    }

    #[test]
    fn unimplemented_location_fails_the_one_step_run() {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @tag on FIELD_DEFINITION | OBJECT\n",
            "type Query @tag { a: Int @tag }\n",
        ));

        let result = SchemaDirectiveVisitors::new()
            .add("tag", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log);

        assert!(matches!(
            result,
            Err(SchemaVisitError::IncompleteDirectiveHandler { .. }),
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn prepared_visitors_run_on_the_checked_schema() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @tag on FIELD_DEFINITION\n",
            "type Query { a: Int @tag, b: Int }\n",
        ));
        let visitors = SchemaDirectiveVisitors::new()
            .add("tag", LoggingKind::new([VisitorMethod::FieldDefinition]));

        let prepared = visitors.prepare(&schema)?;
        assert_eq!(prepared.declarations().keys().collect::<Vec<_>>(), vec!["tag"]);
        let (schema, registry) = prepared.visit_schema_directives(schema, &log)?;

        assert_eq!(field_description(&schema, "a"), Some("tag"));
        assert_eq!(field_description(&schema, "b"), None);
        assert_eq!(registry.get("tag").map(|created| created.len()), Some(1));

        Ok(())
    }

    #[test]
    fn executable_locations_need_no_callback() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @tag on FIELD | FIELD_DEFINITION\n",
            "type Query { a: Int @tag }\n",
        ));

        let (schema, _) = SchemaDirectiveVisitors::new()
            .add("tag", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(field_description(&schema, "a"), Some("tag"));

        Ok(())
    }

    #[test]
    fn two_kinds_declaring_one_directive_conflict() {
        let log = Log::default();
        let schema = build_schema("type Query { a: Int @cache }");
        let declaration = Directive::new("cache", [DirectiveLocation::FieldDefinition]);

        let original = schema.clone();
        let visitors = SchemaDirectiveVisitors::new()
            .add(
                "cache",
                LoggingKind::new([VisitorMethod::FieldDefinition])
                    .with_declaration(declaration.clone()),
            )
            .add(
                "cache",
                LoggingKind::new([VisitorMethod::FieldDefinition])
                    .with_declaration(declaration),
            );

        let result = visitors.prepare(&schema);

        assert!(matches!(
            result,
            Err(SchemaVisitError::DuplicateDirectiveDeclaration { directive_name })
                if directive_name == "cache",
        ));
        assert!(log.borrow().is_empty());
        assert_eq!(schema, original);
    }

    #[test]
    fn kind_declaration_overrides_schema_declaration() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @limit(max: Int) on FIELD_DEFINITION | OBJECT\n",
            "type Query { a: Int @limit }\n",
        ));
        let declaration = Directive::new("limit", [DirectiveLocation::FieldDefinition])
            .with_param(
                Parameter::new("max", TypeAnnotation::named("Int", false))
                    .with_default_value(ast::Value::Int(10.into())),
            );

        // The schema's declaration allows OBJECT, which this kind does not
        // handle; only the kind's own declaration is checked.
        let (_, registry) = SchemaDirectiveVisitors::new()
            .add(
                "limit",
                LoggingKind::new([VisitorMethod::FieldDefinition])
                    .with_declaration(declaration),
            )
            .visit_schema_directives(schema, &log)?;

        let created = &registry.get("limit").unwrap()[0];
        assert_eq!(created.args().get("max"), Some(&Value::Int(10)));

        Ok(())
    }
}

mod arguments {
    use super::*;

    #[test]
    fn declared_arguments_are_coerced() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @cost(weight: Float = 1.5, tags: [String]) on FIELD_DEFINITION\n",
            "type Query { a: Int @cost(tags: \"hot\"), b: Int @cost(weight: 3) }\n",
        ));

        let (_, registry) = SchemaDirectiveVisitors::new()
            .add("cost", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        let created = registry.get("cost").unwrap();
        assert_eq!(created[0].args().get("weight"), Some(&Value::Float(1.5)));
        assert_eq!(
            created[0].args().get("tags"),
            Some(&Value::List(vec![Value::from("hot")])),
        );
        assert_eq!(created[1].args().get("weight"), Some(&Value::Float(3.0)));
        assert!(!created[1].args().contains_key("tags"));

        Ok(())
    }

    #[test]
    fn coercion_errors_abort_the_run() {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @auth(requires: String!) on FIELD_DEFINITION\n",
            "type Query { a: Int @auth }\n",
        ));

        let result = SchemaDirectiveVisitors::new()
            .add("auth", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log);

        assert!(matches!(
            result,
            Err(SchemaVisitError::ArgumentCoercion(
                ArgumentCoercionError::MissingRequiredArgument { argument_name, .. },
            )) if argument_name == "requires",
        ));
    }

    #[test]
    fn undeclared_arguments_pass_through_untyped() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(
            "type Query { a: Int @note(text: \"hi\", level: 2, unbound: $nope) }",
        );

        let (_, registry) = SchemaDirectiveVisitors::new()
            .add("note", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        let args = registry.get("note").unwrap()[0].args();
        assert_eq!(args.get("text"), Some(&Value::from("hi")));
        assert_eq!(args.get("level"), Some(&Value::Int(2)));
        assert!(!args.contains_key("unbound"));

        Ok(())
    }

    #[test]
    fn variables_are_resolved() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @auth(requires: String!) on FIELD_DEFINITION\n",
            "type Query { a: Int @auth(requires: $role) }\n",
        ));

        let (_, registry) = SchemaDirectiveVisitors::new()
            .add("auth", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .set_variables(IndexMap::from([
                ("role".to_string(), Value::from("ADMIN")),
            ]))
            .visit_schema_directives(schema, &log)?;

        let args = registry.get("auth").unwrap()[0].args();
        assert_eq!(args.get("requires"), Some(&Value::from("ADMIN")));

        Ok(())
    }

    #[test]
    fn args_as_reads_typed_arguments() -> Result<()> {
        #[derive(serde::Deserialize)]
        struct LimitArgs {
            max: u32,
            unit: Option<String>,
        }

        struct Limit;
        impl SchemaVisitor for Limit {}

        struct LimitKind;
        impl<'ctx> DirectiveVisitorKind<'ctx, RefCell<Vec<u32>>> for LimitKind {
            fn implemented_methods(&self) -> VisitorMethodSet {
                [VisitorMethod::FieldDefinition].into()
            }

            fn create_visitor(
                &self,
                instance: DirectiveVisitorInstance<'ctx, RefCell<Vec<u32>>>,
            ) -> Result<Box<dyn SchemaVisitor + 'ctx>> {
                let args: LimitArgs = instance.args_as()?;
                assert!(args.unit.is_none());
                instance.context().borrow_mut().push(args.max);
                Ok(Box::new(Limit))
            }
        }

        let seen = RefCell::new(vec![]);
        let schema = build_schema(concat!(
            "directive @limit(max: Int!, unit: String) on FIELD_DEFINITION\n",
            "type Query { a: Int @limit(max: 5), b: Int @limit(max: 7) }\n",
        ));
        SchemaDirectiveVisitors::new()
            .add("limit", LimitKind)
            .visit_schema_directives(schema, &seen)?;

        assert_eq!(seen.into_inner(), vec![5, 7]);

        Ok(())
    }

    #[test]
    fn args_as_reports_mismatched_shapes() {
        #[derive(serde::Deserialize)]
        #[allow(dead_code)]
        struct Wrong {
            max: bool,
        }

        struct WrongKind;
        impl DirectiveVisitorKind<'static> for WrongKind {
            fn implemented_methods(&self) -> VisitorMethodSet {
                [VisitorMethod::FieldDefinition].into()
            }

            fn create_visitor(
                &self,
                instance: DirectiveVisitorInstance<'static>,
            ) -> Result<Box<dyn SchemaVisitor>> {
                instance.args_as::<Wrong>()?;
                unreachable!("`max` is an Int");
            }
        }

        let schema = build_schema(concat!(
            "directive @limit(max: Int!) on FIELD_DEFINITION\n",
            "type Query { a: Int @limit(max: 5) }\n",
        ));
        let result = SchemaDirectiveVisitors::new()
            .add("limit", WrongKind)
            .visit_schema_directives(schema, &());

        assert!(matches!(
            result,
            Err(SchemaVisitError::InvalidDirectiveArguments { directive_name, visited_node, .. })
                if directive_name == "limit" && visited_node.to_string() == "Query.a",
        ));
    }
}

mod registry {
    use super::*;

    #[test]
    fn every_registered_name_has_an_entry() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @used on FIELD_DEFINITION\n",
            "directive @unused on FIELD_DEFINITION\n",
            "type Query { a: Int @used, b: Int @used }\n",
        ));

        let (_, registry) = SchemaDirectiveVisitors::new()
            .add("used", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .add("unused", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        assert_eq!(registry.directive_names().collect::<Vec<_>>(), vec!["used", "unused"]);
        assert_eq!(registry.get("unused").map(|created| created.len()), Some(0));
        assert!(registry.get("unregistered").is_none());

        let coordinates: Vec<String> = registry.get("used")
            .unwrap()
            .iter()
            .map(|created| created.visited_node().to_string())
            .collect();
        assert_eq!(coordinates, vec!["Query.a", "Query.b"]);

        let mut inner = registry.into_inner();
        let used = inner.shift_remove("used").unwrap();
        assert!(used.into_iter().all(|created| created.directive_name() == "used"));

        Ok(())
    }

    #[test]
    fn created_visitors_stay_usable() -> Result<()> {
        let log = Log::default();
        let schema = build_schema(concat!(
            "directive @tag on FIELD_DEFINITION\n",
            "type Query { a: Int @tag }\n",
        ));

        let (schema, registry) = SchemaDirectiveVisitors::new()
            .add("tag", LoggingKind::new([VisitorMethod::FieldDefinition]))
            .visit_schema_directives(schema, &log)?;

        // Run the created visitor again, this time over every node
        let created = registry.into_inner().shift_remove("tag").unwrap();
        let mut visitor = created.into_iter().next().unwrap().into_visitor();
        let schema = crate::visitor::visit_schema_with_visitors(
            schema,
            &mut [&mut *visitor],
        )?;

        assert_eq!(field_description(&schema, "a"), Some("tagtag"));

        Ok(())
    }
}
