use crate::ast;
use indexmap::IndexMap;

/// A concrete, coerced input value.
///
/// [`Value`]s are what a directive occurrence's AST arguments become once
/// they have been coerced against the directive's declaration (see
/// [`coerce_argument_values()`](crate::coerce_argument_values)), and what
/// callers bind variables to.
///
/// [`Value`] serializes to its natural JSON shape (enum values serialize as
/// strings) so coerced arguments can be read into a `serde`-deserializable
/// struct.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(bool) = self {
            Some(*bool)
        } else {
            None
        }
    }

    pub fn as_enum_value(&self) -> Option<&str> {
        if let Self::Enum(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Self::Float(num) = self {
            Some(*num)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Self::Int(num) = self {
            Some(*num)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Self::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert an AST value to a [`Value`] without any type information.
    ///
    /// Variables are looked up in `variables`. Returns `None` if `ast_value`
    /// (or anything nested within it) references a variable that has no
    /// binding, or if an integer literal does not fit in an `i64`.
    pub fn from_ast_untyped(
        ast_value: &ast::Value,
        variables: &IndexMap<String, Value>,
    ) -> Option<Self> {
        Some(match ast_value {
            ast::Value::Variable(var_name) =>
                variables.get(var_name)?.clone(),

            ast::Value::Int(num) =>
                Value::Int(num.as_i64()?),

            ast::Value::Float(num) =>
                Value::Float(*num),

            ast::Value::String(str) =>
                Value::String(str.clone()),

            ast::Value::Boolean(bool) =>
                Value::Boolean(*bool),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(name) =>
                Value::Enum(name.clone()),

            ast::Value::List(items) =>
                Value::List(
                    items.iter()
                        .map(|item| Value::from_ast_untyped(item, variables))
                        .collect::<Option<Vec<_>>>()?,
                ),

            ast::Value::Object(fields) =>
                Value::Object(
                    fields.iter()
                        .map(|(name, field_value)| {
                            Value::from_ast_untyped(field_value, variables)
                                .map(|value| (name.clone(), value))
                        })
                        .collect::<Option<IndexMap<_, _>>>()?,
                ),
        })
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
