use crate::Value;
use crate::ast;
use crate::test_utils::build_schema;
use crate::types::TypeAnnotation;
use crate::value_from_ast;
use indexmap::IndexMap;
use std::collections::BTreeMap;

const SDL: &str = concat!(
    "type Query { f: Int }\n",
    "enum Color { RED GREEN }\n",
    "scalar Json\n",
    "input Page { size: Int = 20, after: String, first: Boolean! }\n",
);

fn int(num: i32) -> ast::Value {
    ast::Value::Int(num.into())
}

fn no_vars() -> IndexMap<String, Value> {
    IndexMap::new()
}

#[test]
fn int_must_fit_in_32_bits() {
    let schema = build_schema(SDL);
    let annot = TypeAnnotation::named("Int", true);

    assert_eq!(
        value_from_ast(&schema, &int(7), &annot, &no_vars()),
        Some(Value::Int(7)),
    );

    let largest = ast::Value::Int(ast::Number::from(i32::MAX));
    assert!(value_from_ast(&schema, &largest, &annot, &no_vars()).is_some());

    let parsed = build_schema(concat!(
        "directive @d(n: Int) on FIELD_DEFINITION\n",
        "type Query { f: Int @d(n: 3000000000) }",
    ));
    let ast_value = parsed.query_type().unwrap().fields()["f"].directives()[0]
        .argument("n")
        .unwrap()
        .clone();
    assert_eq!(value_from_ast(&parsed, &ast_value, &annot, &no_vars()), None);
}

#[test]
fn id_accepts_strings_and_ints() {
    let schema = build_schema(SDL);
    let annot = TypeAnnotation::named("ID", false);

    assert_eq!(
        value_from_ast(&schema, &int(42), &annot, &no_vars()),
        Some(Value::String("42".to_string())),
    );
    assert_eq!(
        value_from_ast(&schema, &ast::Value::String("abc".to_string()), &annot, &no_vars()),
        Some(Value::String("abc".to_string())),
    );
    assert_eq!(
        value_from_ast(&schema, &ast::Value::Boolean(true), &annot, &no_vars()),
        None,
    );
}

#[test]
fn null_respects_nullability() {
    let schema = build_schema(SDL);

    assert_eq!(
        value_from_ast(&schema, &ast::Value::Null, &TypeAnnotation::named("String", true), &no_vars()),
        Some(Value::Null),
    );
    assert_eq!(
        value_from_ast(&schema, &ast::Value::Null, &TypeAnnotation::named("String", false), &no_vars()),
        None,
    );
}

#[test]
fn enum_values_must_be_defined() {
    let schema = build_schema(SDL);
    let annot = TypeAnnotation::named("Color", true);

    assert_eq!(
        value_from_ast(&schema, &ast::Value::Enum("RED".to_string()), &annot, &no_vars()),
        Some(Value::Enum("RED".to_string())),
    );
    assert_eq!(
        value_from_ast(&schema, &ast::Value::Enum("BLUE".to_string()), &annot, &no_vars()),
        None,
    );
    // String literals are not enum values
    assert_eq!(
        value_from_ast(&schema, &ast::Value::String("RED".to_string()), &annot, &no_vars()),
        None,
    );
}

#[test]
fn input_objects_fill_defaults_and_reject_unknown_fields() {
    let schema = build_schema(SDL);
    let annot = TypeAnnotation::named("Page", true);

    let ast_value = ast::Value::Object(BTreeMap::from([
        ("first".to_string(), ast::Value::Boolean(true)),
    ]));
    let coerced = value_from_ast(&schema, &ast_value, &annot, &no_vars()).unwrap();
    let fields = coerced.as_object().unwrap();
    assert_eq!(fields.get("size"), Some(&Value::Int(20)));
    assert_eq!(fields.get("first"), Some(&Value::Boolean(true)));
    // Optional fields without a default stay absent
    assert!(!fields.contains_key("after"));

    let unknown_field = ast::Value::Object(BTreeMap::from([
        ("first".to_string(), ast::Value::Boolean(true)),
        ("last".to_string(), int(1)),
    ]));
    assert_eq!(value_from_ast(&schema, &unknown_field, &annot, &no_vars()), None);

    let missing_required = ast::Value::Object(BTreeMap::new());
    assert_eq!(value_from_ast(&schema, &missing_required, &annot, &no_vars()), None);
}

#[test]
fn list_items_are_coerced_individually() {
    let schema = build_schema(SDL);
    let annot = TypeAnnotation::list(TypeAnnotation::named("Int", true), true);

    let ast_value = ast::Value::List(vec![
        int(1),
        ast::Value::Variable("missing".to_string()),
        ast::Value::Variable("two".to_string()),
    ]);
    let variables = IndexMap::from([("two".to_string(), Value::Int(2))]);
    assert_eq!(
        value_from_ast(&schema, &ast_value, &annot, &variables),
        Some(Value::List(vec![Value::Int(1), Value::Null, Value::Int(2)])),
    );

    let non_null_items = TypeAnnotation::list(TypeAnnotation::named("Int", false), true);
    assert_eq!(value_from_ast(&schema, &ast_value, &non_null_items, &variables), None);
}

#[test]
fn custom_scalars_take_any_literal() {
    let schema = build_schema(SDL);
    let annot = TypeAnnotation::named("Json", true);

    let ast_value = ast::Value::Object(BTreeMap::from([
        ("a".to_string(), ast::Value::List(vec![int(1), ast::Value::Boolean(false)])),
    ]));
    let coerced = value_from_ast(&schema, &ast_value, &annot, &no_vars()).unwrap();
    assert_eq!(
        coerced.as_object().unwrap().get("a"),
        Some(&Value::List(vec![Value::Int(1), Value::Boolean(false)])),
    );
}

#[test]
fn output_types_have_no_input_values() {
    let schema = build_schema(SDL);

    assert_eq!(
        value_from_ast(&schema, &int(1), &TypeAnnotation::named("Query", true), &no_vars()),
        None,
    );
}
