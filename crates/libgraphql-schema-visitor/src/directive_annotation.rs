use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::NamedDirectiveRef;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// (a *directive occurrence*) placed at exactly one position of a
/// [`Schema`]: the schema definition itself, a named type (or one of its
/// extensions), a field, an argument, an input field or an enum value.
///
/// A [`DirectiveAnnotation`] can be thought of as a "pointer" to some
/// [`Directive`] declaration paired with the *uncoerced* AST values passed as
/// its arguments. The declaration is never consulted or mutated while the
/// annotation is built; coercion happens per occurrence via
/// [`coerce_argument_values()`](crate::coerce_argument_values).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: Vec<(String, ast::Value)>,
    pub(crate) directive_ref: NamedDirectiveRef,
}
impl DirectiveAnnotation {
    /// Build an annotation programmatically (e.g. to attach it to a
    /// replacement node returned from a visitor callback).
    pub fn new(directive_name: impl AsRef<str>) -> Self {
        Self {
            arguments: vec![],
            directive_ref: NamedDirectiveRef::new(
                directive_name,
                loc::SourceLocation::Synthetic,
            ),
        }
    }

    /// Append an argument to this annotation.
    pub fn with_argument(
        mut self,
        name: impl AsRef<str>,
        value: ast::Value,
    ) -> Self {
        self.arguments.push((name.as_ref().to_string(), value));
        self
    }

    /// The AST value passed for the argument named `name`, if any.
    ///
    /// If the same argument was (invalidly) passed more than once, the last
    /// one wins.
    pub fn argument(&self, name: &str) -> Option<&ast::Value> {
        self.arguments.iter()
            .rev()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, value)| value)
    }

    /// The (argument name, AST value) pairs exactly as they were written.
    pub fn arguments(&self) -> &[(String, ast::Value)] {
        self.arguments.as_slice()
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// annotation was written.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.directive_ref.ref_location()
    }

    /// The [`Directive`] declaration this annotation refers to, if the
    /// [`Schema`] declares one.
    pub fn directive_declaration<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema Directive> {
        self.directive_ref.deref(schema).ok()
    }

    /// The name of the [`Directive`] this annotation refers to.
    pub fn directive_name(&self) -> &str {
        self.directive_ref.name()
    }

    pub(crate) fn from_ast(
        annotated_item_srcloc: &loc::SourceLocation,
        ast_annots: &[ast::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| {
            DirectiveAnnotation {
                arguments: ast_annot.arguments.clone(),
                directive_ref: NamedDirectiveRef::new(
                    &ast_annot.name,
                    annotated_item_srcloc.with_ast_position(&ast_annot.position),
                ),
            }
        }).collect()
    }
}
