use crate::Value;
use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Coerce an AST value node into a [`Value`] of the type described by
/// `type_annotation`.
///
/// Variables referenced by `ast_value` are looked up in `variables`; their
/// bound values are assumed to already be coerced. Returns `None` when
/// `ast_value` has no valid representation for the type. This includes
/// references to unbound variables, `null` where the type is non-null,
/// enum values the enum does not define, input objects missing a required
/// field (or providing one the type does not define) and any literal whose
/// target type is an output-only (object, interface or union) type.
pub fn value_from_ast(
    schema: &Schema,
    ast_value: &ast::Value,
    type_annotation: &TypeAnnotation,
    variables: &IndexMap<String, Value>,
) -> Option<Value> {
    if let ast::Value::Variable(var_name) = ast_value {
        let value = variables.get(var_name)?;
        if value.is_null() && !type_annotation.nullable() {
            return None;
        }
        return Some(value.clone());
    }

    if let ast::Value::Null = ast_value {
        return type_annotation.nullable().then_some(Value::Null);
    }

    match type_annotation {
        TypeAnnotation::List(list_annot) => {
            let item_annot = list_annot.inner_type_annotation();
            if let ast::Value::List(items) = ast_value {
                items.iter()
                    .map(|item| {
                        if is_missing_variable(item, variables) {
                            item_annot.nullable().then_some(Value::Null)
                        } else {
                            value_from_ast(schema, item, item_annot, variables)
                        }
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(Value::List)
            } else {
                // A lone item is coerced to a one-item list.
                value_from_ast(schema, ast_value, item_annot, variables)
                    .map(|item| Value::List(vec![item]))
            }
        },

        TypeAnnotation::Named(named_annot) => match named_annot.graphql_type(schema)? {
            GraphQLType::Enum(enum_type) => match ast_value {
                ast::Value::Enum(value_name) if enum_type.values.contains_key(value_name) =>
                    Some(Value::Enum(value_name.to_string())),
                _ => None,
            },

            GraphQLType::InputObject(input_type) =>
                input_object_from_ast(schema, ast_value, input_type, variables),

            GraphQLType::Scalar(scalar_type) =>
                scalar_from_ast(scalar_type.name(), ast_value, variables),

            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_)
                => None,
        },
    }
}

fn input_object_from_ast(
    schema: &Schema,
    ast_value: &ast::Value,
    input_type: &InputObjectType,
    variables: &IndexMap<String, Value>,
) -> Option<Value> {
    let ast::Value::Object(ast_fields) = ast_value else {
        return None;
    };

    if ast_fields.keys().any(|field_name| !input_type.fields.contains_key(field_name)) {
        return None;
    }

    let mut coerced = IndexMap::new();
    for (field_name, field) in input_type.fields.iter() {
        let field_value = ast_fields
            .get(field_name)
            .filter(|field_value| !is_missing_variable(field_value, variables));

        let Some(field_value) = field_value else {
            if let Some(default_value) = &field.default_value {
                coerced.insert(
                    field_name.to_string(),
                    value_from_ast(schema, default_value, &field.type_annotation, variables)?,
                );
            } else if !field.type_annotation.nullable() {
                return None;
            }
            continue;
        };

        coerced.insert(
            field_name.to_string(),
            value_from_ast(schema, field_value, &field.type_annotation, variables)?,
        );
    }

    Some(Value::Object(coerced))
}

fn is_missing_variable(
    ast_value: &ast::Value,
    variables: &IndexMap<String, Value>,
) -> bool {
    matches!(
        ast_value,
        ast::Value::Variable(var_name) if !variables.contains_key(var_name),
    )
}

fn scalar_from_ast(
    scalar_name: &str,
    ast_value: &ast::Value,
    variables: &IndexMap<String, Value>,
) -> Option<Value> {
    match (scalar_name, ast_value) {
        ("Boolean", ast::Value::Boolean(bool)) =>
            Some(Value::Boolean(*bool)),

        ("Float", ast::Value::Float(num)) =>
            Some(Value::Float(*num)),
        ("Float", ast::Value::Int(num)) =>
            num.as_i64().map(|num| Value::Float(num as f64)),

        ("ID", ast::Value::Int(num)) =>
            num.as_i64().map(|num| Value::String(num.to_string())),
        ("ID", ast::Value::String(str)) =>
            Some(Value::String(str.to_string())),

        ("Int", ast::Value::Int(num)) =>
            num.as_i64()
                .filter(|num| i32::try_from(*num).is_ok())
                .map(Value::Int),

        ("String", ast::Value::String(str)) =>
            Some(Value::String(str.to_string())),

        ("Boolean" | "Float" | "ID" | "Int" | "String", _) =>
            None,

        (_, _) =>
            Value::from_ast_untyped(ast_value, variables),
    }
}
