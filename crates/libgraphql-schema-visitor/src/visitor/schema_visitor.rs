use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::visitor::SchemaVisitError;
use crate::visitor::VisitableNode;
use crate::visitor::VisitorMethod;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaVisitError>;

/// What a [`SchemaVisitor`] callback decided to do with the node it was
/// given.
#[derive(Clone, Debug, PartialEq)]
pub enum VisitOutcome<T> {
    /// No opinion: keep the node as it is.
    Unchanged,

    /// Replace the node. Children of the node are visited on the
    /// replacement.
    Replace(T),

    /// Remove the node from its container. Its children are not visited.
    Remove,
}
impl<T> VisitOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> VisitOutcome<U> {
        match self {
            Self::Unchanged => VisitOutcome::Unchanged,
            Self::Replace(value) => VisitOutcome::Replace(f(value)),
            Self::Remove => VisitOutcome::Remove,
        }
    }
}

/// The type that owns a [`Field`] being visited.
#[derive(Clone, Copy, Debug)]
pub enum FieldParent<'a> {
    Interface(&'a InterfaceType),
    Object(&'a ObjectType),
}
impl<'a> FieldParent<'a> {
    pub fn fields(&self) -> &'a IndexMap<String, Field> {
        match self {
            Self::Interface(iface) => iface.fields(),
            Self::Object(obj) => obj.fields(),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Interface(iface) => iface.name(),
            Self::Object(obj) => obj.name(),
        }
    }
}

/// A set of callbacks invoked while a [`Schema`] is traversed by
/// [`visit_schema()`](crate::visitor::visit_schema).
///
/// Every callback defaults to [`VisitOutcome::Unchanged`], so a visitor only
/// implements the ones for the node kinds it cares about. Each callback also
/// receives the [`Schema`] as it stands at that point of the traversal.
///
/// A callback that fails (returns `Err`) aborts the traversal.
pub trait SchemaVisitor {
    /// Called once, before any type is visited. The schema root itself can
    /// never be replaced or removed; anything other than
    /// [`VisitOutcome::Unchanged`] fails the traversal with
    /// [`SchemaVisitError::IllegalRootReplacement`].
    fn visit_schema(&mut self, schema: &Schema) -> Result<VisitOutcome<Schema>> {
        let _ = schema;
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_scalar(
        &mut self,
        scalar: &ScalarType,
        schema: &Schema,
    ) -> Result<VisitOutcome<ScalarType>> {
        let _ = (scalar, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_object(
        &mut self,
        object: &ObjectType,
        schema: &Schema,
    ) -> Result<VisitOutcome<ObjectType>> {
        let _ = (object, schema);
        Ok(VisitOutcome::Unchanged)
    }

    /// `parent` is the (possibly already replaced) type that owns `field`.
    fn visit_field_definition(
        &mut self,
        field: &Field,
        parent: FieldParent<'_>,
        schema: &Schema,
    ) -> Result<VisitOutcome<Field>> {
        let _ = (field, parent, schema);
        Ok(VisitOutcome::Unchanged)
    }

    /// `field` and `parent` are the (possibly already replaced) field that
    /// owns `argument` and the type that owns `field`.
    fn visit_argument_definition(
        &mut self,
        argument: &Parameter,
        field: &Field,
        parent: FieldParent<'_>,
        schema: &Schema,
    ) -> Result<VisitOutcome<Parameter>> {
        let _ = (argument, field, parent, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_interface(
        &mut self,
        interface: &InterfaceType,
        schema: &Schema,
    ) -> Result<VisitOutcome<InterfaceType>> {
        let _ = (interface, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_union(
        &mut self,
        union: &UnionType,
        schema: &Schema,
    ) -> Result<VisitOutcome<UnionType>> {
        let _ = (union, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_enum(
        &mut self,
        enum_type: &EnumType,
        schema: &Schema,
    ) -> Result<VisitOutcome<EnumType>> {
        let _ = (enum_type, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_enum_value(
        &mut self,
        value: &EnumValue,
        enum_type: &EnumType,
        schema: &Schema,
    ) -> Result<VisitOutcome<EnumValue>> {
        let _ = (value, enum_type, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_input_object(
        &mut self,
        input_object: &InputObjectType,
        schema: &Schema,
    ) -> Result<VisitOutcome<InputObjectType>> {
        let _ = (input_object, schema);
        Ok(VisitOutcome::Unchanged)
    }

    fn visit_input_field_definition(
        &mut self,
        field: &InputField,
        input_object: &InputObjectType,
        schema: &Schema,
    ) -> Result<VisitOutcome<InputField>> {
        let _ = (field, input_object, schema);
        Ok(VisitOutcome::Unchanged)
    }
}

/// Decides which visitors run for a given node and callback.
///
/// The returned visitors are applied to the node as a chain, in the order
/// returned: each one receives the previous one's replacement (if any), and
/// the first to return [`VisitOutcome::Remove`] ends the chain.
pub trait VisitorSelector {
    fn select<'s>(
        &'s mut self,
        schema: &Schema,
        node: &VisitableNode<'_>,
        method: VisitorMethod,
    ) -> Result<Vec<&'s mut dyn SchemaVisitor>>;
}

/// Every visitor in the slice runs at every node, in slice order.
impl<'v> VisitorSelector for [&'v mut dyn SchemaVisitor] {
    fn select<'s>(
        &'s mut self,
        _schema: &Schema,
        _node: &VisitableNode<'_>,
        _method: VisitorMethod,
    ) -> Result<Vec<&'s mut dyn SchemaVisitor>> {
        Ok(self.iter_mut()
            .map(|visitor| &mut **visitor as &mut dyn SchemaVisitor)
            .collect())
    }
}
