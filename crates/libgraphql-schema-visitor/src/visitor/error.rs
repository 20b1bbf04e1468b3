use crate::ArgumentCoercionError;
use crate::SchemaHealError;
use crate::types::DirectiveLocation;
use crate::types::GraphQLTypeKind;
use crate::visitor::VisitedNode;
use crate::visitor::VisitorMethod;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaVisitError {
    #[error(transparent)]
    ArgumentCoercion(#[from] ArgumentCoercionError),

    #[error(
        "A visitor renamed a child of `{parent}` to `{name}`, but `{parent}` \
        already has a child with that name"
    )]
    DuplicateChildName {
        parent: VisitedNode,
        name: String,
    },

    #[error(
        "`@{directive_name}` is declared by more than one registered directive \
        visitor kind"
    )]
    DuplicateDirectiveDeclaration {
        directive_name: String,
    },

    #[error(transparent)]
    Heal(#[from] SchemaHealError),

    #[error("The schema root cannot be replaced or removed by a visitor")]
    IllegalRootReplacement,

    #[error(
        "`@{directive_name}` may be annotated at {location}, but the visitor \
        kind registered for it does not implement `{method}`"
    )]
    IncompleteDirectiveHandler {
        directive_name: String,
        location: DirectiveLocation,
        method: VisitorMethod,
    },

    #[error("Failed to read the arguments of `@{directive_name}` on `{visited_node}`: {err}")]
    InvalidDirectiveArguments {
        directive_name: String,
        visited_node: VisitedNode,
        err: String,
    },

    #[error(
        "A visitor replaced the {expected} type `{type_name}` with a type of \
        kind {actual}"
    )]
    MismatchedReplacementKind {
        type_name: String,
        expected: GraphQLTypeKind,
        actual: GraphQLTypeKind,
    },

    #[error("{0}")]
    VisitorFailure(String),
}
