mod argument_values;
mod value_from_ast;

pub use argument_values::ArgumentCoercionError;
pub use argument_values::coerce_argument_values;
pub use value_from_ast::value_from_ast;

#[cfg(test)]
mod tests;
