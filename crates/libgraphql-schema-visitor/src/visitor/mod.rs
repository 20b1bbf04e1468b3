//! A single-pass, depth-first rewrite engine over a [`Schema`](crate::Schema).
//!
//! Visitors implement [`SchemaVisitor`], overriding only the callbacks for the
//! node kinds they care about. Each callback either leaves its node alone,
//! replaces it, or removes it (see [`VisitOutcome`]). Which visitors run at
//! which node is decided by a [`VisitorSelector`]; a plain slice of visitors
//! runs every visitor everywhere, while
//! [`SchemaDirectiveVisitors`](crate::directive_visitors::SchemaDirectiveVisitors)
//! runs visitors only where their directive is annotated.

mod error;
mod named_type_visitor_map;
mod schema_visitor;
mod visit_schema;
mod visitable_node;
mod visitor_method;

pub use error::SchemaVisitError;
pub use named_type_visitor_map::NamedTypeVisitorMap;
pub use named_type_visitor_map::VisitSchemaKind;
pub use schema_visitor::FieldParent;
pub use schema_visitor::SchemaVisitor;
pub use schema_visitor::VisitOutcome;
pub use schema_visitor::VisitorSelector;
pub use visit_schema::visit_schema;
pub use visit_schema::visit_schema_with_visitors;
pub use visitable_node::VisitableNode;
pub use visitable_node::VisitedNode;
pub use visitor_method::VisitorMethod;
pub use visitor_method::VisitorMethodSet;

#[cfg(test)]
mod tests;
