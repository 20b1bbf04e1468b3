use crate::schema::Schema;
use crate::directive_visitors::DirectiveVisitorInstance;
use crate::types::Directive;
use crate::visitor::SchemaVisitError;
use crate::visitor::SchemaVisitor;
use crate::visitor::VisitorMethodSet;

/// A reusable handler for one directive name: a factory of
/// [`SchemaVisitor`]s, one per annotated occurrence.
///
/// `Ctx` is the type of the context value shared (by reference) with every
/// visitor created during a run.
pub trait DirectiveVisitorKind<'ctx, Ctx: ?Sized + 'ctx = ()> {
    /// The callbacks that visitors created by this kind implement.
    ///
    /// Visitors are only created for (and invoked at) nodes visited by one of
    /// these callbacks. Every location the directive's declaration allows must
    /// be covered; this is checked before traversal starts.
    fn implemented_methods(&self) -> VisitorMethodSet;

    /// A declaration for `directive_name` to use instead of the one found in
    /// `schema` (if any) when coercing arguments and checking locations.
    fn directive_declaration(
        &self,
        directive_name: &str,
        schema: &Schema,
    ) -> Option<Directive> {
        let _ = (directive_name, schema);
        None
    }

    /// Create the visitor for one directive occurrence.
    fn create_visitor(
        &self,
        instance: DirectiveVisitorInstance<'ctx, Ctx>,
    ) -> Result<Box<dyn SchemaVisitor + 'ctx>, SchemaVisitError>;
}
