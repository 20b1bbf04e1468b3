use crate::DirectiveAnnotation;
use crate::DerefByName;
use crate::DerefByNameError;
use crate::NamedRef;
use crate::loc;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeExtension;
use crate::types::UnionType;

/// Represents a named GraphQL type defined within some [`Schema`].
///
/// This is a closed set: every piece of code that needs to treat kinds
/// differently matches on it exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    /// Every [`DirectiveAnnotation`] applied to this type: first those written
    /// on the primary definition, then those written on each
    /// [`TypeExtension`] in the order the extensions were loaded.
    pub fn all_directives(&self) -> Vec<&DirectiveAnnotation> {
        self.directives()
            .iter()
            .chain(
                self.extensions()
                    .iter()
                    .flat_map(|ext| ext.directives().iter())
            )
            .collect()
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_enum_mut(&mut self) -> Option<&mut EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object_mut(&mut self) -> Option<&mut InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface_mut(&mut self) -> Option<&mut InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union_mut(&mut self) -> Option<&mut UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this type
    /// was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(type_) => type_.def_location(),
            Self::InputObject(type_) => type_.def_location(),
            Self::Interface(type_) => type_.def_location(),
            Self::Object(type_) => type_.def_location(),
            Self::Scalar(type_) => type_.def_location(),
            Self::Union(type_) => type_.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(type_) => type_.description(),
            Self::InputObject(type_) => type_.description(),
            Self::Interface(type_) => type_.description(),
            Self::Object(type_) => type_.description(),
            Self::Scalar(type_) => type_.description(),
            Self::Union(type_) => type_.description(),
        }
    }

    /// The [`DirectiveAnnotation`]s written on the primary definition of this
    /// type. See [`GraphQLType::all_directives()`] to include those written on
    /// type extensions.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        match self {
            Self::Enum(type_) => type_.directives(),
            Self::InputObject(type_) => type_.directives(),
            Self::Interface(type_) => type_.directives(),
            Self::Object(type_) => type_.directives(),
            Self::Scalar(type_) => type_.directives(),
            Self::Union(type_) => type_.directives(),
        }
    }

    pub fn extensions(&self) -> &Vec<TypeExtension> {
        match self {
            Self::Enum(type_) => type_.extensions(),
            Self::InputObject(type_) => type_.extensions(),
            Self::Interface(type_) => type_.extensions(),
            Self::Object(type_) => type_.extensions(),
            Self::Scalar(type_) => type_.extensions(),
            Self::Union(type_) => type_.extensions(),
        }
    }

    pub(crate) fn extensions_mut(&mut self) -> &mut Vec<TypeExtension> {
        match self {
            Self::Enum(type_) => &mut type_.extensions,
            Self::InputObject(type_) => &mut type_.extensions,
            Self::Interface(type_) => &mut type_.0.extensions,
            Self::Object(type_) => &mut type_.0.extensions,
            Self::Scalar(type_) => &mut type_.extensions,
            Self::Union(type_) => &mut type_.extensions,
        }
    }

    /// Indicates whether values of this type may be used as arguments or
    /// input fields.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    /// Indicates whether this type may be returned by a field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
            Self::Union(type_) => type_.name(),
        }
    }

    /// Rename this type.
    ///
    /// When a renamed type is returned as a replacement from a visitor, the
    /// type map entry is re-keyed and every reference to the old name is
    /// redirected when the [`Schema`] is healed.
    pub fn set_name(&mut self, name: impl AsRef<str>) {
        let name = name.as_ref().to_string();
        match self {
            Self::Enum(type_) => type_.name = name,
            Self::InputObject(type_) => type_.name = name,
            Self::Interface(type_) => type_.0.name = name,
            Self::Object(type_) => type_.0.name = name,
            Self::Scalar(type_) => type_.name = name,
            Self::Union(type_) => type_.name = name,
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}

pub type NamedGraphQLTypeRef = NamedRef<Schema, loc::SourceLocation, GraphQLType>;
