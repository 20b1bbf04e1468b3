use crate::DirectiveAnnotation;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeExtension;
use crate::types::UnionType;
use crate::visitor::FieldParent;

/// A borrowed view of the node a [`VisitorSelector`](crate::visitor::VisitorSelector)
/// is being asked to select visitors for.
#[derive(Clone, Copy, Debug)]
pub enum VisitableNode<'a> {
    Argument {
        argument: &'a Parameter,
        field: &'a Field,
        parent: FieldParent<'a>,
    },
    Enum(&'a EnumType),
    EnumValue {
        value: &'a EnumValue,
        enum_type: &'a EnumType,
    },
    Field {
        field: &'a Field,
        parent: FieldParent<'a>,
    },
    InputField {
        field: &'a InputField,
        input_object: &'a InputObjectType,
    },
    InputObject(&'a InputObjectType),
    Interface(&'a InterfaceType),
    Object(&'a ObjectType),
    Scalar(&'a ScalarType),
    Schema(&'a Schema),
    Union(&'a UnionType),
}
impl<'a> VisitableNode<'a> {
    /// The owned coordinate of this node (e.g. `Query.user(id:)`).
    pub fn coordinate(&self) -> VisitedNode {
        match self {
            Self::Argument { argument, field, parent } => VisitedNode::Argument {
                argument_name: argument.name().to_string(),
                field_name: field.name().to_string(),
                type_name: parent.name().to_string(),
            },
            Self::Enum(type_) => VisitedNode::Type {
                type_name: type_.name().to_string(),
            },
            Self::EnumValue { value, enum_type } => VisitedNode::EnumValue {
                type_name: enum_type.name().to_string(),
                value_name: value.name().to_string(),
            },
            Self::Field { field, parent } => VisitedNode::Field {
                field_name: field.name().to_string(),
                type_name: parent.name().to_string(),
            },
            Self::InputField { field, input_object } => VisitedNode::InputField {
                field_name: field.name().to_string(),
                type_name: input_object.name().to_string(),
            },
            Self::InputObject(type_) => VisitedNode::Type {
                type_name: type_.name().to_string(),
            },
            Self::Interface(type_) => VisitedNode::Type {
                type_name: type_.name().to_string(),
            },
            Self::Object(type_) => VisitedNode::Type {
                type_name: type_.name().to_string(),
            },
            Self::Scalar(type_) => VisitedNode::Type {
                type_name: type_.name().to_string(),
            },
            Self::Schema(_) => VisitedNode::Schema,
            Self::Union(type_) => VisitedNode::Type {
                type_name: type_.name().to_string(),
            },
        }
    }

    /// Every [`DirectiveAnnotation`] attached to this node, in the order they
    /// were written. For named types, annotations written on the primary
    /// definition come first, followed by those written on each type
    /// extension.
    pub fn directives(&self) -> Vec<&'a DirectiveAnnotation> {
        match self {
            Self::Argument { argument, .. } => argument.directives().iter().collect(),
            Self::Enum(type_) => with_extensions(type_.directives(), type_.extensions()),
            Self::EnumValue { value, .. } => value.directives().iter().collect(),
            Self::Field { field, .. } => field.directives().iter().collect(),
            Self::InputField { field, .. } => field.directives().iter().collect(),
            Self::InputObject(type_) => with_extensions(type_.directives(), type_.extensions()),
            Self::Interface(type_) => with_extensions(type_.directives(), type_.extensions()),
            Self::Object(type_) => with_extensions(type_.directives(), type_.extensions()),
            Self::Scalar(type_) => with_extensions(type_.directives(), type_.extensions()),
            Self::Schema(schema) => schema.directives().iter().collect(),
            Self::Union(type_) => with_extensions(type_.directives(), type_.extensions()),
        }
    }

    /// The [`DirectiveLocation`] a directive annotated on this node occupies.
    pub fn location(&self) -> DirectiveLocation {
        match self {
            Self::Argument { .. } => DirectiveLocation::ArgumentDefinition,
            Self::Enum(_) => DirectiveLocation::Enum,
            Self::EnumValue { .. } => DirectiveLocation::EnumValue,
            Self::Field { .. } => DirectiveLocation::FieldDefinition,
            Self::InputField { .. } => DirectiveLocation::InputFieldDefinition,
            Self::InputObject(_) => DirectiveLocation::InputObject,
            Self::Interface(_) => DirectiveLocation::Interface,
            Self::Object(_) => DirectiveLocation::Object,
            Self::Scalar(_) => DirectiveLocation::Scalar,
            Self::Schema(_) => DirectiveLocation::Schema,
            Self::Union(_) => DirectiveLocation::Union,
        }
    }
}

fn with_extensions<'a>(
    directives: &'a [DirectiveAnnotation],
    extensions: &'a [TypeExtension],
) -> Vec<&'a DirectiveAnnotation> {
    directives.iter()
        .chain(extensions.iter().flat_map(|ext| ext.directives().iter()))
        .collect()
}

/// An owned coordinate identifying a node of a [`Schema`], recorded alongside
/// each directive visitor that was created for it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum VisitedNode {
    Argument {
        argument_name: String,
        field_name: String,
        type_name: String,
    },
    EnumValue {
        type_name: String,
        value_name: String,
    },
    Field {
        field_name: String,
        type_name: String,
    },
    InputField {
        field_name: String,
        type_name: String,
    },
    Schema,
    Type {
        type_name: String,
    },
}
impl std::fmt::Display for VisitedNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument { argument_name, field_name, type_name } =>
                write!(f, "{type_name}.{field_name}({argument_name}:)"),
            Self::EnumValue { type_name, value_name } =>
                write!(f, "{type_name}.{value_name}"),
            Self::Field { field_name, type_name }
            | Self::InputField { field_name, type_name } =>
                write!(f, "{type_name}.{field_name}"),
            Self::Schema =>
                write!(f, "schema"),
            Self::Type { type_name } =>
                write!(f, "{type_name}"),
        }
    }
}
