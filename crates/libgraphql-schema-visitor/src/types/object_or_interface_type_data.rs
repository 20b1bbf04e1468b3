use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeExtension;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extensions: Vec<TypeExtension>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            description: None,
            directives: vec![],
            extensions: vec![],
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.to_string(),
        }
    }

    pub(crate) fn add_interface(&mut self, name: &str) {
        if !self.interfaces.iter().any(|iface_ref| iface_ref.name() == name) {
            self.interfaces.push(NamedGraphQLTypeRef::new(
                name,
                loc::SourceLocation::Synthetic,
            ));
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn extensions(&self) -> &Vec<TypeExtension> {
        &self.extensions
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Interfaces whose names no longer resolve (or resolve to a type that is
    /// not an interface) are skipped.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| {
                iface_ref.deref(schema)
                    .ok()
                    .and_then(|type_| type_.as_interface())
            })
            .collect()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
