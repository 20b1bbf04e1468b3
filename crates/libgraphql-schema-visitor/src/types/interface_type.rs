use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeExtension;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.as_ref()))
    }

    /// Declare that this interface itself implements the interface named
    /// `iface_name`.
    pub fn add_interface(&mut self, iface_name: impl AsRef<str>) {
        self.0.add_interface(iface_name.as_ref())
    }

    pub fn directives_mut(&mut self) -> &mut Vec<DirectiveAnnotation> {
        &mut self.0.directives
    }

    /// Mutable access to the fields of this type, e.g. to add, remove or
    /// modify fields on a copy being returned as a replacement.
    pub fn fields_mut(&mut self) -> &mut IndexMap<String, Field> {
        &mut self.0.fields
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.0.description = description;
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InterfaceType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The list of [`DirectiveAnnotation`]s written on the primary definition
    /// of this [`InterfaceType`], in the order they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    pub fn extensions(&self) -> &Vec<TypeExtension> {
        self.0.extensions()
    }

    /// Fields of this [`InterfaceType`] in definition order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The list of [`InterfaceType`]s implemented by this [`InterfaceType`].
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
