use crate::Value;
use crate::visitor::SchemaVisitor;
use crate::visitor::VisitedNode;
use indexmap::IndexMap;

/// A visitor created for one directive occurrence during a run, along with
/// what it was created from.
pub struct CreatedDirectiveVisitor<'ctx> {
    pub(super) args: IndexMap<String, Value>,
    pub(super) directive_name: String,
    pub(super) visited_node: VisitedNode,
    pub(super) visitor: Box<dyn SchemaVisitor + 'ctx>,
}
impl<'ctx> CreatedDirectiveVisitor<'ctx> {
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub fn into_visitor(self) -> Box<dyn SchemaVisitor + 'ctx> {
        self.visitor
    }

    pub fn visited_node(&self) -> &VisitedNode {
        &self.visited_node
    }

    pub fn visitor(&self) -> &(dyn SchemaVisitor + 'ctx) {
        self.visitor.as_ref()
    }
}
impl std::fmt::Debug for CreatedDirectiveVisitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatedDirectiveVisitor")
            .field("args", &self.args)
            .field("directive_name", &self.directive_name)
            .field("visited_node", &self.visited_node)
            .finish_non_exhaustive()
    }
}

/// Every visitor created during a run, grouped by directive name.
///
/// Every registered directive name has an entry (possibly empty), and each
/// entry lists its visitors in the order they were created.
#[derive(Debug, Default)]
pub struct DirectiveVisitorRegistry<'ctx> {
    visitors: IndexMap<String, Vec<CreatedDirectiveVisitor<'ctx>>>,
}
impl<'ctx> DirectiveVisitorRegistry<'ctx> {
    pub(super) fn new<'a>(
        directive_names: impl IntoIterator<Item = &'a str>,
        created: Vec<CreatedDirectiveVisitor<'ctx>>,
    ) -> Self {
        let mut visitors: IndexMap<String, Vec<CreatedDirectiveVisitor<'ctx>>> =
            directive_names
                .into_iter()
                .map(|name| (name.to_string(), vec![]))
                .collect();
        for created_visitor in created {
            visitors
                .entry(created_visitor.directive_name.to_string())
                .or_default()
                .push(created_visitor);
        }
        Self { visitors }
    }

    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.visitors.keys().map(|name| name.as_str())
    }

    /// The visitors created for `directive_name`, or `None` if no kind was
    /// registered under that name.
    pub fn get(&self, directive_name: &str) -> Option<&[CreatedDirectiveVisitor<'ctx>]> {
        self.visitors.get(directive_name).map(|visitors| visitors.as_slice())
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<CreatedDirectiveVisitor<'ctx>>> {
        self.visitors
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CreatedDirectiveVisitor<'ctx>])> {
        self.visitors
            .iter()
            .map(|(name, visitors)| (name.as_str(), visitors.as_slice()))
    }
}
