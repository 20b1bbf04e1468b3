use crate::test_utils::build_schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ScalarType;
use crate::visitor::NamedTypeVisitorMap;
use crate::visitor::SchemaVisitError;
use crate::visitor::VisitOutcome;
use crate::visitor::VisitSchemaKind;
use crate::visitor::visit_schema_with_visitors;
use std::cell::RefCell;

type Result<T> = std::result::Result<T, SchemaVisitError>;

const SDL: &str = concat!(
    "type Query { node: Node, search: SearchResult, color: Color }\n",
    "type Mutation { touch(input: TouchInput): Int }\n",
    "interface Node { id: ID! }\n",
    "type Item implements Node { id: ID! }\n",
    "union SearchResult = Item\n",
    "enum Color { RED }\n",
    "input TouchInput { id: ID! }\n",
    "scalar Date\n",
);

#[test]
fn only_the_most_specific_callback_runs() -> Result<()> {
    let handled: RefCell<Vec<(String, &str)>> = RefCell::new(vec![]);
    let record = |label: &'static str| {
        let handled = &handled;
        move |type_: &GraphQLType, _: &crate::Schema| {
            handled.borrow_mut().push((type_.name().to_string(), label));
            Ok(VisitOutcome::Unchanged)
        }
    };

    let mut visitor = NamedTypeVisitorMap::new()
        .on(VisitSchemaKind::Type, record("type"))
        .on(VisitSchemaKind::CompositeType, record("composite"))
        .on(VisitSchemaKind::ObjectType, record("object"))
        .on(VisitSchemaKind::RootObject, record("root"))
        .on(VisitSchemaKind::Query, record("query"))
        .on(VisitSchemaKind::UnionType, record("union"));
    visit_schema_with_visitors(build_schema(SDL), &mut [&mut visitor])?;
    drop(visitor);

    let handled = handled.into_inner();
    let label_for = |type_name: &str| {
        handled.iter()
            .find(|(name, _)| name == type_name)
            .map(|(_, label)| *label)
    };
    assert_eq!(label_for("Query"), Some("query"));
    assert_eq!(label_for("Mutation"), Some("root"));
    assert_eq!(label_for("Item"), Some("object"));
    assert_eq!(label_for("Node"), Some("composite"));
    assert_eq!(label_for("SearchResult"), Some("union"));
    assert_eq!(label_for("Color"), Some("type"));
    assert_eq!(label_for("TouchInput"), Some("type"));
    assert_eq!(label_for("Date"), Some("type"));
    // Each type is handled exactly once
    assert_eq!(handled.len(), 13);

    Ok(())
}

#[test]
fn unregistered_kinds_are_left_alone() -> Result<()> {
    let schema = build_schema(SDL);
    let mut visitor = NamedTypeVisitorMap::new()
        .on(VisitSchemaKind::EnumType, |_, _| Ok(VisitOutcome::Remove));
    let visited = visit_schema_with_visitors(schema, &mut [&mut visitor])?;

    assert!(visited.get_type("Color").is_none());
    assert!(visited.get_type("Date").is_some());
    // `Query.color` referred to the removed enum
    assert!(!visited.query_type().unwrap().fields().contains_key("color"));

    Ok(())
}

#[test]
fn renamed_types_are_rekeyed_and_references_redirected() -> Result<()> {
    let schema = build_schema(concat!(
        "type Query { a: A }\n",
        "type A { b: B }\n",
        "type B { a: A }\n",
    ));
    let position_before = schema.all_types().get_index_of("A");

    let mut visitor = NamedTypeVisitorMap::new()
        .on(VisitSchemaKind::ObjectType, |type_, _| {
            if type_.name() != "A" {
                return Ok(VisitOutcome::Unchanged);
            }
            let mut renamed = type_.clone();
            renamed.set_name("Alpha");
            Ok(VisitOutcome::Replace(renamed))
        });
    let visited = visit_schema_with_visitors(schema, &mut [&mut visitor])?;

    assert!(visited.get_type("A").is_none());
    assert_eq!(visited.all_types().get_index_of("Alpha"), position_before);

    let b_type = visited.get_type("B").unwrap().as_object().unwrap();
    assert_eq!(b_type.fields()["a"].type_annotation().to_string(), "Alpha");
    let query_type = visited.query_type().unwrap();
    assert_eq!(query_type.fields()["a"].type_annotation().to_string(), "Alpha");

    Ok(())
}

#[test]
fn replacing_with_another_kind_fails() {
    let mut visitor = NamedTypeVisitorMap::new()
        .on(VisitSchemaKind::EnumType, |type_, _| {
            Ok(VisitOutcome::Replace(GraphQLType::Scalar(ScalarType::new(type_.name()))))
        });
    let result = visit_schema_with_visitors(build_schema(SDL), &mut [&mut visitor]);

    assert!(matches!(
        result,
        Err(SchemaVisitError::MismatchedReplacementKind {
            type_name,
            expected: GraphQLTypeKind::Enum,
            actual: GraphQLTypeKind::Scalar,
        }) if type_name == "Color",
    ));
}

#[test]
fn later_registration_for_a_kind_replaces_earlier() -> Result<()> {
    let mut visitor = NamedTypeVisitorMap::new()
        .on(VisitSchemaKind::ScalarType, |_, _| Ok(VisitOutcome::Remove))
        .on(VisitSchemaKind::ScalarType, |_, _| Ok(VisitOutcome::Unchanged));
    let visited = visit_schema_with_visitors(build_schema(SDL), &mut [&mut visitor])?;

    assert!(visited.get_type("Date").is_some());

    Ok(())
}
