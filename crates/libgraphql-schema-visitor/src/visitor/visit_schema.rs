use crate::heal_schema;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::visitor::FieldParent;
use crate::visitor::SchemaVisitError;
use crate::visitor::SchemaVisitor;
use crate::visitor::VisitOutcome;
use crate::visitor::VisitableNode;
use crate::visitor::VisitedNode;
use crate::visitor::VisitorMethod;
use crate::visitor::VisitorSelector;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaVisitError>;

/// Traverse `schema` depth-first, applying the visitors chosen by `selector`
/// at every node, then heal the result.
///
/// Traversal order is: the schema root, then each named type in type-map
/// order (skipping `__`-prefixed names) and, after each type's own
/// callbacks have resolved, its children: fields and then each field's
/// arguments for objects and interfaces, input fields for input objects and
/// values for enums. Children are visited on a replaced node rather than the
/// original, and are not visited at all for a removed node.
///
/// Once the walk completes, [`heal_schema()`](crate::heal_schema) runs once
/// so that every remaining reference resolves.
///
/// The [`Schema`] is taken by value: on failure it is dropped along with
/// whatever partial changes had been applied to it.
pub fn visit_schema<S: VisitorSelector + ?Sized>(
    mut schema: Schema,
    selector: &mut S,
) -> Result<Schema> {
    let _span = tracing::debug_span!(
        "visit_schema",
        types = schema.types.len(),
    ).entered();

    let root_node = VisitableNode::Schema(&schema);
    for visitor in selector.select(&schema, &root_node, VisitorMethod::Schema)? {
        match visitor.visit_schema(&schema)? {
            VisitOutcome::Unchanged => (),
            VisitOutcome::Replace(_) | VisitOutcome::Remove =>
                return Err(SchemaVisitError::IllegalRootReplacement),
        }
    }

    let type_names: Vec<String> = schema.types
        .keys()
        .filter(|type_name| !type_name.starts_with("__"))
        .cloned()
        .collect();

    for type_name in type_names {
        let Some(type_) = schema.types.get(&type_name) else {
            continue;
        };

        match visit_named_type(&schema, type_, selector)? {
            VisitOutcome::Unchanged => (),
            VisitOutcome::Replace(new_type) => {
                tracing::trace!(type_name = type_name.as_str(), "replaced type");
                if let Some(slot) = schema.types.get_mut(&type_name) {
                    *slot = new_type;
                }
            },
            VisitOutcome::Remove => {
                tracing::trace!(type_name = type_name.as_str(), "removed type");
                schema.types.shift_remove(&type_name);
            },
        }
    }

    heal_schema(&mut schema)?;
    Ok(schema)
}

/// Convenience wrapper around [`visit_schema()`] that runs every visitor in
/// `visitors` at every node.
pub fn visit_schema_with_visitors(
    schema: Schema,
    visitors: &mut [&mut dyn SchemaVisitor],
) -> Result<Schema> {
    visit_schema(schema, visitors)
}

/// Run the chain of visitors selected for `node`.
fn call_method<S, T, F>(
    selector: &mut S,
    schema: &Schema,
    node: &VisitableNode<'_>,
    method: VisitorMethod,
    original: &T,
    mut invoke: F,
) -> Result<VisitOutcome<T>>
where
    S: VisitorSelector + ?Sized,
    F: FnMut(&mut dyn SchemaVisitor, &T) -> Result<VisitOutcome<T>>,
{
    let mut replacement: Option<T> = None;
    for visitor in selector.select(schema, node, method)? {
        let input = replacement.as_ref().unwrap_or(original);
        match invoke(visitor, input)? {
            VisitOutcome::Unchanged => (),
            VisitOutcome::Replace(new_node) => replacement = Some(new_node),
            VisitOutcome::Remove => {
                tracing::trace!(node = %node.coordinate(), %method, "removed");
                return Ok(VisitOutcome::Remove);
            },
        }
    }

    Ok(match replacement {
        Some(new_node) => {
            tracing::trace!(node = %node.coordinate(), %method, "replaced");
            VisitOutcome::Replace(new_node)
        },
        None => VisitOutcome::Unchanged,
    })
}

/// The node children should be visited on: the replacement if there is one,
/// the original if the node was left alone, nothing if it was removed.
fn surviving<'a, T>(outcome: &'a VisitOutcome<T>, original: &'a T) -> Option<&'a T> {
    match outcome {
        VisitOutcome::Unchanged => Some(original),
        VisitOutcome::Replace(new_node) => Some(new_node),
        VisitOutcome::Remove => None,
    }
}

/// Add `child` to the rebuilt children of a node under `name`. Child names
/// stay unique within their owner, so a rename onto a name that is already
/// taken fails instead of replacing the earlier entry.
fn insert_child<C>(
    children: &mut IndexMap<String, C>,
    owner: impl FnOnce() -> VisitedNode,
    name: &str,
    child: C,
) -> Result<()> {
    if children.contains_key(name) {
        return Err(SchemaVisitError::DuplicateChildName {
            parent: owner(),
            name: name.to_string(),
        });
    }
    children.insert(name.to_string(), child);
    Ok(())
}

/// Fold changed children (if any) into the outcome of the node's own visit.
fn rebuild<T: Clone, C>(
    original: &T,
    outcome: VisitOutcome<T>,
    changed_children: Option<C>,
    set_children: impl FnOnce(&mut T, C),
) -> VisitOutcome<T> {
    match (outcome, changed_children) {
        (VisitOutcome::Remove, _) =>
            VisitOutcome::Remove,
        (outcome, None) =>
            outcome,
        (VisitOutcome::Replace(mut new_node), Some(children)) => {
            set_children(&mut new_node, children);
            VisitOutcome::Replace(new_node)
        },
        (VisitOutcome::Unchanged, Some(children)) => {
            let mut new_node = original.clone();
            set_children(&mut new_node, children);
            VisitOutcome::Replace(new_node)
        },
    }
}

fn visit_named_type<S: VisitorSelector + ?Sized>(
    schema: &Schema,
    type_: &GraphQLType,
    selector: &mut S,
) -> Result<VisitOutcome<GraphQLType>> {
    Ok(match type_ {
        GraphQLType::Enum(enum_type) => {
            let outcome = call_method(
                selector,
                schema,
                &VisitableNode::Enum(enum_type),
                VisitorMethod::Enum,
                enum_type,
                |visitor, enum_type| visitor.visit_enum(enum_type, schema),
            )?;
            let values = match surviving(&outcome, enum_type) {
                Some(current) => visit_enum_values(schema, current, selector)?,
                None => None,
            };
            // Enum values are never patched in place: any change produces a
            // freshly built enum carrying over everything but its values.
            rebuild(enum_type, outcome, values, |enum_type, values| {
                *enum_type = enum_type.with_values(values);
            }).map(GraphQLType::Enum)
        },

        GraphQLType::InputObject(input_type) => {
            let outcome = call_method(
                selector,
                schema,
                &VisitableNode::InputObject(input_type),
                VisitorMethod::InputObject,
                input_type,
                |visitor, input_type| visitor.visit_input_object(input_type, schema),
            )?;
            let fields = match surviving(&outcome, input_type) {
                Some(current) => visit_input_fields(schema, current, selector)?,
                None => None,
            };
            rebuild(input_type, outcome, fields, |input_type, fields| {
                input_type.fields = fields;
            }).map(GraphQLType::InputObject)
        },

        GraphQLType::Interface(iface_type) => {
            let outcome = call_method(
                selector,
                schema,
                &VisitableNode::Interface(iface_type),
                VisitorMethod::Interface,
                iface_type,
                |visitor, iface_type| visitor.visit_interface(iface_type, schema),
            )?;
            let fields = match surviving(&outcome, iface_type) {
                Some(current) => visit_fields(schema, FieldParent::Interface(current), selector)?,
                None => None,
            };
            rebuild(iface_type, outcome, fields, |iface_type: &mut InterfaceType, fields| {
                iface_type.0.fields = fields;
            }).map(GraphQLType::Interface)
        },

        GraphQLType::Object(obj_type) => {
            let outcome = call_method(
                selector,
                schema,
                &VisitableNode::Object(obj_type),
                VisitorMethod::Object,
                obj_type,
                |visitor, obj_type| visitor.visit_object(obj_type, schema),
            )?;
            let fields = match surviving(&outcome, obj_type) {
                Some(current) => visit_fields(schema, FieldParent::Object(current), selector)?,
                None => None,
            };
            rebuild(obj_type, outcome, fields, |obj_type: &mut ObjectType, fields| {
                obj_type.0.fields = fields;
            }).map(GraphQLType::Object)
        },

        GraphQLType::Scalar(scalar_type) => call_method(
            selector,
            schema,
            &VisitableNode::Scalar(scalar_type),
            VisitorMethod::Scalar,
            scalar_type,
            |visitor, scalar_type| visitor.visit_scalar(scalar_type, schema),
        )?.map(GraphQLType::Scalar),

        GraphQLType::Union(union_type) => call_method(
            selector,
            schema,
            &VisitableNode::Union(union_type),
            VisitorMethod::Union,
            union_type,
            |visitor, union_type| visitor.visit_union(union_type, schema),
        )?.map(GraphQLType::Union),
    })
}

/// Visit each argument of `field`. Returns `None` if every argument was left
/// unchanged, otherwise the complete new argument map.
fn visit_arguments<S: VisitorSelector + ?Sized>(
    schema: &Schema,
    field: &Field,
    parent: FieldParent<'_>,
    selector: &mut S,
) -> Result<Option<IndexMap<String, Parameter>>> {
    let mut changed = false;
    let mut new_params = IndexMap::with_capacity(field.parameters.len());
    let owner = || VisitableNode::Field { field, parent }.coordinate();
    for param in field.parameters.values() {
        let outcome = call_method(
            selector,
            schema,
            &VisitableNode::Argument { argument: param, field, parent },
            VisitorMethod::ArgumentDefinition,
            param,
            |visitor, param| visitor.visit_argument_definition(param, field, parent, schema),
        )?;
        match outcome {
            VisitOutcome::Unchanged =>
                insert_child(&mut new_params, owner, param.name(), param.clone())?,
            VisitOutcome::Replace(new_param) => {
                changed = true;
                let name = new_param.name().to_string();
                insert_child(&mut new_params, owner, &name, new_param)?;
            },
            VisitOutcome::Remove => changed = true,
        }
    }
    Ok(changed.then_some(new_params))
}

/// Visit each value of `enum_type`. Returns `None` if every value was left
/// unchanged, otherwise the complete new value map.
fn visit_enum_values<S: VisitorSelector + ?Sized>(
    schema: &Schema,
    enum_type: &EnumType,
    selector: &mut S,
) -> Result<Option<IndexMap<String, EnumValue>>> {
    let mut changed = false;
    let mut new_values = IndexMap::with_capacity(enum_type.values.len());
    let owner = || VisitableNode::Enum(enum_type).coordinate();
    for value in enum_type.values.values() {
        let outcome = call_method(
            selector,
            schema,
            &VisitableNode::EnumValue { value, enum_type },
            VisitorMethod::EnumValue,
            value,
            |visitor, value| visitor.visit_enum_value(value, enum_type, schema),
        )?;
        match outcome {
            VisitOutcome::Unchanged =>
                insert_child(&mut new_values, owner, value.name(), value.clone())?,
            VisitOutcome::Replace(new_value) => {
                changed = true;
                let name = new_value.name().to_string();
                insert_child(&mut new_values, owner, &name, new_value)?;
            },
            VisitOutcome::Remove => changed = true,
        }
    }
    Ok(changed.then_some(new_values))
}

/// Visit each field of `parent` and then each argument of the (possibly
/// replaced) field. Returns `None` if nothing changed, otherwise the complete
/// new field map.
fn visit_fields<S: VisitorSelector + ?Sized>(
    schema: &Schema,
    parent: FieldParent<'_>,
    selector: &mut S,
) -> Result<Option<IndexMap<String, Field>>> {
    let fields = parent.fields();
    let mut changed = false;
    let mut new_fields = IndexMap::with_capacity(fields.len());
    let owner = || VisitedNode::Type { type_name: parent.name().to_string() };
    for field in fields.values() {
        let outcome = call_method(
            selector,
            schema,
            &VisitableNode::Field { field, parent },
            VisitorMethod::FieldDefinition,
            field,
            |visitor, field| visitor.visit_field_definition(field, parent, schema),
        )?;
        let params = match surviving(&outcome, field) {
            Some(current) => visit_arguments(schema, current, parent, selector)?,
            None => None,
        };

        if !matches!(outcome, VisitOutcome::Unchanged) || params.is_some() {
            changed = true;
        }
        match rebuild(field, outcome, params, |field, params| field.parameters = params) {
            VisitOutcome::Unchanged =>
                insert_child(&mut new_fields, owner, field.name(), field.clone())?,
            VisitOutcome::Replace(new_field) => {
                let name = new_field.name().to_string();
                insert_child(&mut new_fields, owner, &name, new_field)?;
            },
            VisitOutcome::Remove => (),
        }
    }
    Ok(changed.then_some(new_fields))
}

/// Visit each input field of `input_type`. Returns `None` if every field was
/// left unchanged, otherwise the complete new field map.
fn visit_input_fields<S: VisitorSelector + ?Sized>(
    schema: &Schema,
    input_type: &InputObjectType,
    selector: &mut S,
) -> Result<Option<IndexMap<String, InputField>>> {
    let mut changed = false;
    let mut new_fields = IndexMap::with_capacity(input_type.fields.len());
    let owner = || VisitableNode::InputObject(input_type).coordinate();
    for field in input_type.fields.values() {
        let outcome = call_method(
            selector,
            schema,
            &VisitableNode::InputField { field, input_object: input_type },
            VisitorMethod::InputFieldDefinition,
            field,
            |visitor, field| visitor.visit_input_field_definition(field, input_type, schema),
        )?;
        match outcome {
            VisitOutcome::Unchanged =>
                insert_child(&mut new_fields, owner, field.name(), field.clone())?,
            VisitOutcome::Replace(new_field) => {
                changed = true;
                let name = new_field.name().to_string();
                insert_child(&mut new_fields, owner, &name, new_field)?;
            },
            VisitOutcome::Remove => changed = true,
        }
    }
    Ok(changed.then_some(new_fields))
}
