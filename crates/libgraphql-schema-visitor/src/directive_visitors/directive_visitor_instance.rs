use crate::Value;
use crate::visitor::SchemaVisitError;
use crate::visitor::VisitedNode;
use indexmap::IndexMap;

/// Everything a [`DirectiveVisitorKind`](crate::directive_visitors::DirectiveVisitorKind)
/// is given when asked to create a visitor for one directive occurrence.
#[derive(Debug)]
pub struct DirectiveVisitorInstance<'ctx, Ctx: ?Sized = ()> {
    pub(super) args: IndexMap<String, Value>,
    pub(super) context: &'ctx Ctx,
    pub(super) directive_name: String,
    pub(super) visited_node: VisitedNode,
}
impl<'ctx, Ctx: ?Sized> DirectiveVisitorInstance<'ctx, Ctx> {
    /// The coerced arguments of this occurrence. Optional arguments that
    /// were not passed (and have no default) are absent.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    /// Read the coerced arguments into `T`.
    ///
    /// ```
    /// # use libgraphql_schema_visitor::directive_visitors::DirectiveVisitorInstance;
    /// #[derive(serde::Deserialize)]
    /// struct AuthArgs {
    ///     requires: String,
    /// }
    ///
    /// fn requires(instance: &DirectiveVisitorInstance<'_>) -> String {
    ///     instance.args_as::<AuthArgs>()
    ///         .map(|args| args.requires)
    ///         .unwrap_or_default()
    /// }
    /// ```
    pub fn args_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, SchemaVisitError> {
        serde_json::to_value(&self.args)
            .and_then(serde_json::from_value)
            .map_err(|err| SchemaVisitError::InvalidDirectiveArguments {
                directive_name: self.directive_name.to_string(),
                visited_node: self.visited_node.clone(),
                err: err.to_string(),
            })
    }

    /// The context value shared by every visitor created during one run.
    pub fn context(&self) -> &'ctx Ctx {
        self.context
    }

    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    /// The coordinate of the node the directive is annotated on.
    ///
    /// The node itself is handed to the created visitor's callback, which
    /// sees it as rewritten by any visitor that ran before it. The instance
    /// (and the visitor built from it) outlive the traversal, so only the
    /// coordinate is kept here.
    pub fn visited_node(&self) -> &VisitedNode {
        &self.visited_node
    }
}
