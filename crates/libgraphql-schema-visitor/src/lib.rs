pub mod ast;
mod coercion;
mod directive_annotation;
pub mod directive_visitors;
mod heal;
pub mod loc;
mod named_ref;
pub mod schema;
pub mod types;
mod value;
pub mod visitor;

#[cfg(test)]
mod test_utils;

pub use coercion::ArgumentCoercionError;
pub use coercion::coerce_argument_values;
pub use coercion::value_from_ast;
pub use directive_annotation::DirectiveAnnotation;
pub use heal::SchemaHealError;
pub use heal::heal_schema;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use schema::Schema;
pub use value::Value;
