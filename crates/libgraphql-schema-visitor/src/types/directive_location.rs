use crate::ast;
use crate::visitor::VisitorMethod;

/// A position in a GraphQL document at which a [`Directive`](crate::types::Directive)
/// may legally be annotated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}
impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    pub(crate) fn from_ast(ast_loc: &ast::schema::DirectiveLocation) -> Option<Self> {
        ast_loc.as_str().parse().ok()
    }

    /// The [`VisitorMethod`] invoked for nodes at this location, if the
    /// location is part of the type system (rather than an executable
    /// document).
    pub fn visitor_method(&self) -> Option<VisitorMethod> {
        Some(match self {
            Self::ArgumentDefinition => VisitorMethod::ArgumentDefinition,
            Self::Enum => VisitorMethod::Enum,
            Self::EnumValue => VisitorMethod::EnumValue,
            Self::FieldDefinition => VisitorMethod::FieldDefinition,
            Self::InputFieldDefinition => VisitorMethod::InputFieldDefinition,
            Self::InputObject => VisitorMethod::InputObject,
            Self::Interface => VisitorMethod::Interface,
            Self::Object => VisitorMethod::Object,
            Self::Scalar => VisitorMethod::Scalar,
            Self::Schema => VisitorMethod::Schema,
            Self::Union => VisitorMethod::Union,

            Self::Field
            | Self::FragmentDefinition
            | Self::FragmentSpread
            | Self::InlineFragment
            | Self::Mutation
            | Self::Query
            | Self::Subscription
            | Self::VariableDefinition
                => return None,
        })
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for DirectiveLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ARGUMENT_DEFINITION" => Self::ArgumentDefinition,
            "ENUM" => Self::Enum,
            "ENUM_VALUE" => Self::EnumValue,
            "FIELD" => Self::Field,
            "FIELD_DEFINITION" => Self::FieldDefinition,
            "FRAGMENT_DEFINITION" => Self::FragmentDefinition,
            "FRAGMENT_SPREAD" => Self::FragmentSpread,
            "INLINE_FRAGMENT" => Self::InlineFragment,
            "INPUT_FIELD_DEFINITION" => Self::InputFieldDefinition,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "MUTATION" => Self::Mutation,
            "OBJECT" => Self::Object,
            "QUERY" => Self::Query,
            "SCALAR" => Self::Scalar,
            "SCHEMA" => Self::Schema,
            "SUBSCRIPTION" => Self::Subscription,
            "UNION" => Self::Union,
            "VARIABLE_DEFINITION" => Self::VariableDefinition,
            _ => return Err(format!("Unknown directive location: `{s}`")),
        })
    }
}
