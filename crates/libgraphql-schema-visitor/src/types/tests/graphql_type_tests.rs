use crate::loc;
use crate::test_utils::build_schema;
use crate::types::GraphQLTypeKind;

#[test]
fn all_directives_lists_primary_before_extension_directives() {
    let schema = build_schema(concat!(
        "directive @a on OBJECT\n",
        "directive @b on OBJECT\n",
        "directive @c on OBJECT\n",
        "extend type Query @c\n",
        "type Query @a { f: Int }\n",
        "extend type Query @b\n",
    ));
    let query_type = schema.get_type("Query").unwrap();

    let names: Vec<&str> = query_type.all_directives()
        .into_iter()
        .map(|annot| annot.directive_name())
        .collect();
    assert_eq!(names, vec!["a", "c", "b"]);
    assert_eq!(query_type.directives().len(), 1);
    assert_eq!(query_type.extensions().len(), 2);
}

#[test]
fn builtin_scalars_are_marked_builtin() {
    let schema = build_schema("type Query { f: Int }  scalar Date");

    let int_type = schema.get_type("Int").unwrap();
    assert_eq!(int_type.kind(), GraphQLTypeKind::Scalar);
    assert_eq!(int_type.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
    assert!(int_type.as_scalar().unwrap().is_builtin());

    let date_type = schema.get_type("Date").unwrap();
    assert!(!date_type.as_scalar().unwrap().is_builtin());
    assert!(date_type.is_input_type());
    assert!(date_type.is_output_type());
}

#[test]
fn input_and_output_kinds() {
    let schema = build_schema(concat!(
        "type Query { f: Int }\n",
        "input Filter { q: String }\n",
        "union Anything = Query\n",
    ));

    let filter = schema.get_type("Filter").unwrap();
    assert!(filter.is_input_type());
    assert!(!filter.is_output_type());

    let anything = schema.get_type("Anything").unwrap();
    assert!(!anything.is_input_type());
    assert!(anything.is_output_type());
    assert_eq!(anything.as_union().unwrap().member_type_names(), vec!["Query"]);
}
