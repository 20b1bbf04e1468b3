/// Names one callback of [`SchemaVisitor`](crate::visitor::SchemaVisitor).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VisitorMethod {
    ArgumentDefinition,
    Enum,
    EnumValue,
    FieldDefinition,
    InputFieldDefinition,
    InputObject,
    Interface,
    Object,
    Scalar,
    Schema,
    Union,
}
impl VisitorMethod {
    pub const ALL: [VisitorMethod; 11] = [
        Self::ArgumentDefinition,
        Self::Enum,
        Self::EnumValue,
        Self::FieldDefinition,
        Self::InputFieldDefinition,
        Self::InputObject,
        Self::Interface,
        Self::Object,
        Self::Scalar,
        Self::Schema,
        Self::Union,
    ];

    /// The name of the [`SchemaVisitor`](crate::visitor::SchemaVisitor)
    /// method this refers to.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "visit_argument_definition",
            Self::Enum => "visit_enum",
            Self::EnumValue => "visit_enum_value",
            Self::FieldDefinition => "visit_field_definition",
            Self::InputFieldDefinition => "visit_input_field_definition",
            Self::InputObject => "visit_input_object",
            Self::Interface => "visit_interface",
            Self::Object => "visit_object",
            Self::Scalar => "visit_scalar",
            Self::Schema => "visit_schema",
            Self::Union => "visit_union",
        }
    }

    fn bit(&self) -> u16 {
        1 << (*self as u16)
    }
}
impl std::fmt::Display for VisitorMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method_name())
    }
}

/// A set of [`VisitorMethod`]s, used by a directive visitor kind to declare
/// which callbacks it implements.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct VisitorMethodSet(u16);
impl VisitorMethodSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn contains(&self, method: VisitorMethod) -> bool {
        self.0 & method.bit() != 0
    }

    pub fn insert(&mut self, method: VisitorMethod) {
        self.0 |= method.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = VisitorMethod> + '_ {
        VisitorMethod::ALL
            .into_iter()
            .filter(|method| self.contains(*method))
    }
}
impl std::iter::FromIterator<VisitorMethod> for VisitorMethodSet {
    fn from_iter<I: IntoIterator<Item = VisitorMethod>>(iter: I) -> Self {
        let mut set = Self::new();
        for method in iter {
            set.insert(method);
        }
        set
    }
}
impl<const N: usize> std::convert::From<[VisitorMethod; N]> for VisitorMethodSet {
    fn from(value: [VisitorMethod; N]) -> Self {
        value.into_iter().collect()
    }
}
