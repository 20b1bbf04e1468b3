use crate::loc;
use crate::test_utils::build_schema;
use crate::types::TypeAnnotation;

#[test]
fn display_renders_list_and_non_null_wrappers() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("Int", false), false);
    assert_eq!(annot.to_string(), "[Int!]!");

    let annot = TypeAnnotation::list(
        TypeAnnotation::list(TypeAnnotation::named("String", true), true),
        false,
    );
    assert_eq!(annot.to_string(), "[[String]]!");
}

#[test]
fn to_nullable_only_strips_the_outermost_non_null() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("ID", false), false);
    let nullable = annot.to_nullable();

    assert!(nullable.nullable());
    assert_eq!(nullable.to_string(), "[ID!]");
    // The original is untouched
    assert_eq!(annot.to_string(), "[ID!]!");
}

#[test]
fn innermost_named_type_annotation_unwraps_nested_lists() {
    let annot = TypeAnnotation::list(
        TypeAnnotation::list(TypeAnnotation::named("Float", false), true),
        true,
    );
    let named = annot.innermost_named_type_annotation();

    assert_eq!(named.graphql_type_name(), "Float");
    assert!(!named.nullable());
}

#[test]
fn parsed_annotations_resolve_against_schema() {
    let schema = build_schema("type Query { ids: [ID!]! }");
    let field = &schema.query_type().unwrap().fields()["ids"];
    let annot = field.type_annotation();

    assert_eq!(annot.to_string(), "[ID!]!");
    assert!(annot.as_list_annotation().is_some());
    assert!(matches!(
        annot.ref_location(),
        loc::SourceLocation::Schema(_),
    ));

    let named = annot.innermost_named_type_annotation();
    let id_type = named.graphql_type(&schema).unwrap();
    assert_eq!(id_type.name(), "ID");
}
