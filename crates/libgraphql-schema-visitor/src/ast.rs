//! `'static`, `String`-backed aliases for the [`graphql_parser`] AST nodes
//! consumed while building and rewriting a [`Schema`](crate::Schema).

pub use graphql_parser::Pos;

pub mod schema {
    pub use graphql_parser::schema::DirectiveLocation;
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;
}

pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Number = graphql_parser::query::Number;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;

/// Render an AST [`Value`] back into GraphQL source text.
///
/// Object fields are printed in the order the parser retained them (sorted by
/// name).
pub fn print_value(value: &Value) -> String {
    match value {
        Value::Variable(name) => format!("${name}"),
        Value::Int(num) => match num.as_i64() {
            Some(num) => num.to_string(),
            None => "<invalid int>".to_string(),
        },
        Value::Float(num) => num.to_string(),
        Value::String(str) => print_string(str),
        Value::Boolean(bool) => bool.to_string(),
        Value::Null => "null".to_string(),
        Value::Enum(name) => name.to_string(),
        Value::List(items) => format!(
            "[{}]",
            items.iter()
                .map(print_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!("{name}: {}", print_value(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

fn print_string(str: &str) -> String {
    let mut printed = String::with_capacity(str.len() + 2);
    printed.push('"');
    for ch in str.chars() {
        match ch {
            '"' => printed.push_str("\\\""),
            '\\' => printed.push_str("\\\\"),
            '\n' => printed.push_str("\\n"),
            '\r' => printed.push_str("\\r"),
            '\t' => printed.push_str("\\t"),
            ch => printed.push(ch),
        }
    }
    printed.push('"');
    printed
}
