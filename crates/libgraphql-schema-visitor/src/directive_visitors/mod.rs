//! Visitors that run only where a particular directive is annotated.
//!
//! Register a [`DirectiveVisitorKind`] per directive name on a
//! [`SchemaDirectiveVisitors`] and run it over a [`Schema`](crate::Schema).
//! Every time the traversal reaches a node annotated with a registered
//! directive, the kind is asked to create a fresh visitor for that one
//! occurrence, carrying its coerced arguments and the shared context.

mod directive_visitor_instance;
mod directive_visitor_kind;
mod directive_visitor_registry;
mod schema_directive_visitors;

pub use directive_visitor_instance::DirectiveVisitorInstance;
pub use directive_visitor_kind::DirectiveVisitorKind;
pub use directive_visitor_registry::CreatedDirectiveVisitor;
pub use directive_visitor_registry::DirectiveVisitorRegistry;
pub use schema_directive_visitors::PreparedDirectiveVisitors;
pub use schema_directive_visitors::SchemaDirectiveVisitors;

#[cfg(test)]
mod tests;
