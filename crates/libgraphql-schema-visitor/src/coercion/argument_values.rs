use crate::DirectiveAnnotation;
use crate::Value;
use crate::ast;
use crate::coercion::value_from_ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Parameter;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ArgumentCoercionError>;

/// Coerce the arguments passed to one directive occurrence (`annotation`)
/// against the formal `params` of the directive's declaration.
///
/// For each formal parameter, in declaration order:
///
/// * An argument that was not passed (or that references a variable with no
///   binding in `variables`) takes the parameter's default value if it has
///   one. Otherwise it is an error for a non-null parameter and simply
///   omitted for a nullable one.
/// * `null` (written literally or bound to a variable) is an error for a
///   non-null parameter.
/// * Anything else is coerced with [`value_from_ast()`]; a value with no
///   valid representation for the parameter's type is an error.
///
/// The returned map never contains an entry for an optional argument that
/// was not specified, so absence remains distinguishable from an explicit
/// `null`. Neither the declaration nor the annotation is modified.
pub fn coerce_argument_values(
    schema: &Schema,
    params: &IndexMap<String, Parameter>,
    annotation: &DirectiveAnnotation,
    variables: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>> {
    let mut coerced = IndexMap::new();

    for (param_name, param) in params.iter() {
        let Some(ast_value) = annotation.argument(param_name) else {
            if let Some(value) = default_or_missing(schema, annotation, param, None, variables)? {
                coerced.insert(param_name.to_string(), value);
            }
            continue;
        };

        let mut is_null = matches!(ast_value, ast::Value::Null);
        if let ast::Value::Variable(var_name) = ast_value {
            match variables.get(var_name) {
                Some(bound_value) => is_null = bound_value.is_null(),
                None => {
                    if let Some(value) = default_or_missing(
                        schema,
                        annotation,
                        param,
                        Some(var_name),
                        variables,
                    )? {
                        coerced.insert(param_name.to_string(), value);
                    }
                    continue;
                },
            }
        }

        if is_null && !param.type_annotation.nullable() {
            return Err(ArgumentCoercionError::NullAssignedToNonNull {
                argument_name: param_name.to_string(),
                argument_type: param.type_annotation.to_string(),
                directive_name: annotation.directive_name().to_string(),
                location: annotation.def_location().to_owned(),
            });
        }

        let Some(value) = value_from_ast(schema, ast_value, &param.type_annotation, variables) else {
            return Err(invalid_value(annotation, param, ast_value));
        };
        coerced.insert(param_name.to_string(), value);
    }

    Ok(coerced)
}

fn default_or_missing(
    schema: &Schema,
    annotation: &DirectiveAnnotation,
    param: &Parameter,
    unresolved_variable: Option<&String>,
    variables: &IndexMap<String, Value>,
) -> Result<Option<Value>> {
    if let Some(default_value) = &param.default_value {
        return match value_from_ast(schema, default_value, &param.type_annotation, variables) {
            Some(value) => Ok(Some(value)),
            None => Err(invalid_value(annotation, param, default_value)),
        };
    }

    if !param.type_annotation.nullable() {
        return Err(ArgumentCoercionError::MissingRequiredArgument {
            argument_name: param.name.to_string(),
            argument_type: param.type_annotation.to_string(),
            directive_name: annotation.directive_name().to_string(),
            location: annotation.def_location().to_owned(),
            unresolved_variable: unresolved_variable.cloned(),
        });
    }

    Ok(None)
}

fn invalid_value(
    annotation: &DirectiveAnnotation,
    param: &Parameter,
    ast_value: &ast::Value,
) -> ArgumentCoercionError {
    ArgumentCoercionError::InvalidArgumentValue {
        argument_name: param.name.to_string(),
        argument_type: param.type_annotation.to_string(),
        directive_name: annotation.directive_name().to_string(),
        location: annotation.def_location().to_owned(),
        value_source: ast::print_value(ast_value),
    }
}

fn missing_argument_detail(unresolved_variable: &Option<String>) -> String {
    match unresolved_variable {
        Some(var_name) => format!(
            "was provided the variable \"${var_name}\" which was not provided a \
            runtime value."
        ),
        None => "was not provided.".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArgumentCoercionError {
    #[error("Argument \"{argument_name}\" of @{directive_name} has invalid value {value_source}.")]
    InvalidArgumentValue {
        argument_name: String,
        argument_type: String,
        directive_name: String,
        location: loc::SourceLocation,
        value_source: String,
    },

    #[error(
        "Argument \"{argument_name}\" of @{directive_name} of required type \
        \"{argument_type}\" {}",
        missing_argument_detail(.unresolved_variable),
    )]
    MissingRequiredArgument {
        argument_name: String,
        argument_type: String,
        directive_name: String,
        location: loc::SourceLocation,
        unresolved_variable: Option<String>,
    },

    #[error(
        "Argument \"{argument_name}\" of @{directive_name} of non-null type \
        \"{argument_type}\" must not be null."
    )]
    NullAssignedToNonNull {
        argument_name: String,
        argument_type: String,
        directive_name: String,
        location: loc::SourceLocation,
    },
}
