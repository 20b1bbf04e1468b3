//! Re-linking of by-name references after a [`Schema`] has been rewritten.

use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaHealError>;

/// Bring every by-name reference in `schema` back in line with the current
/// contents of its type map.
///
/// This runs in two phases:
///
/// 1. Any type-map entry whose type now carries a different name (because a
///    visitor returned a renamed replacement) is re-keyed under its new
///    name, keeping its position in the map. Every reference to the old
///    name is redirected to the new one.
/// 2. Every reference whose name no longer resolves is dropped along with
///    the node holding it. Fields, arguments and input fields of a removed
///    type are removed; removed union members and implemented interfaces
///    are filtered out; a removed root operation type is unset.
///
/// Only reference resolution is restored. Whether the result is otherwise
/// valid (e.g. whether an object still satisfies its interfaces) is not
/// checked.
pub fn heal_schema(schema: &mut Schema) -> Result<()> {
    let renames = rekey_types(schema)?;
    if !renames.is_empty() {
        redirect_references(schema, &renames);
    }
    drop_dangling_references(schema);
    Ok(())
}

fn rekey_types(schema: &mut Schema) -> Result<HashMap<String, String>> {
    if schema.types.iter().all(|(key, type_)| key == type_.name()) {
        return Ok(HashMap::new());
    }

    let mut renames = HashMap::new();
    let mut rekeyed = IndexMap::with_capacity(schema.types.len());
    for (old_name, type_) in std::mem::take(&mut schema.types) {
        let new_name = type_.name().to_string();
        if rekeyed.contains_key(&new_name) {
            return Err(SchemaHealError::DuplicateTypeName {
                type_name: new_name,
            });
        }
        if old_name != new_name {
            tracing::debug!(
                old_name = old_name.as_str(),
                new_name = new_name.as_str(),
                "re-keyed renamed type",
            );
            renames.insert(old_name, new_name.to_string());
        }
        rekeyed.insert(new_name, type_);
    }
    schema.types = rekeyed;

    Ok(renames)
}

fn redirect_annotation(
    annot: &mut TypeAnnotation,
    renames: &HashMap<String, String>,
) {
    redirect_ref(annot.innermost_named_type_annotation_mut().type_ref_mut(), renames);
}

fn redirect_ref(
    type_ref: &mut NamedGraphQLTypeRef,
    renames: &HashMap<String, String>,
) {
    if let Some(new_name) = renames.get(type_ref.name()) {
        tracing::debug!(
            old_name = type_ref.name(),
            new_name = new_name.as_str(),
            "redirected type reference",
        );
        type_ref.retarget(new_name);
    }
}

fn redirect_references(schema: &mut Schema, renames: &HashMap<String, String>) {
    for root_ref in [
        &mut schema.mutation_type,
        &mut schema.query_type,
        &mut schema.subscription_type,
    ].into_iter().flatten() {
        redirect_ref(root_ref, renames);
    }

    for directive in schema.directive_defs.values_mut() {
        for param in directive.params.values_mut() {
            redirect_annotation(&mut param.type_annotation, renames);
        }
    }

    for type_ in schema.types.values_mut() {
        match type_ {
            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

            GraphQLType::InputObject(input_type) => {
                for field in input_type.fields.values_mut() {
                    redirect_annotation(&mut field.type_annotation, renames);
                }
            },

            GraphQLType::Interface(InterfaceType(data))
            | GraphQLType::Object(ObjectType(data)) => {
                for iface_ref in data.interfaces.iter_mut() {
                    redirect_ref(iface_ref, renames);
                }
                for field in data.fields.values_mut() {
                    redirect_annotation(&mut field.type_annotation, renames);
                    for param in field.parameters.values_mut() {
                        redirect_annotation(&mut param.type_annotation, renames);
                    }
                }
            },

            GraphQLType::Union(union_type) => {
                union_type.members = std::mem::take(&mut union_type.members)
                    .into_iter()
                    .map(|(_, mut member_ref)| {
                        redirect_ref(&mut member_ref, renames);
                        (member_ref.name().to_string(), member_ref)
                    })
                    .collect();
            },
        }
    }
}

fn drop_dangling_references(schema: &mut Schema) {
    let type_names: HashSet<String> = schema.types.keys().cloned().collect();
    let resolves = |annot: &TypeAnnotation| {
        type_names.contains(annot.innermost_named_type_annotation().graphql_type_name())
    };

    for root_ref in [
        &mut schema.mutation_type,
        &mut schema.query_type,
        &mut schema.subscription_type,
    ] {
        if root_ref.as_ref().is_some_and(|type_ref| !type_names.contains(type_ref.name())) {
            tracing::debug!(
                type_name = root_ref.as_ref().map(|type_ref| type_ref.name()),
                "unset removed root operation type",
            );
            *root_ref = None;
        }
    }

    for directive in schema.directive_defs.values_mut() {
        directive.params.retain(|param_name, param| {
            let keep = resolves(&param.type_annotation);
            if !keep {
                tracing::debug!(
                    directive = directive.name.as_str(),
                    param = param_name.as_str(),
                    "dropped directive parameter of removed type",
                );
            }
            keep
        });
    }

    for type_ in schema.types.values_mut() {
        let type_name = type_.name().to_string();
        match type_ {
            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

            GraphQLType::InputObject(input_type) => {
                input_type.fields.retain(|field_name, field| {
                    let keep = resolves(&field.type_annotation);
                    if !keep {
                        tracing::debug!(
                            type_name = type_name.as_str(),
                            field = field_name.as_str(),
                            "dropped input field of removed type",
                        );
                    }
                    keep
                });
            },

            GraphQLType::Interface(InterfaceType(data))
            | GraphQLType::Object(ObjectType(data)) => {
                data.interfaces.retain(|iface_ref| type_names.contains(iface_ref.name()));
                data.fields.retain(|field_name, field| {
                    let keep = resolves(&field.type_annotation);
                    if !keep {
                        tracing::debug!(
                            type_name = type_name.as_str(),
                            field = field_name.as_str(),
                            "dropped field of removed type",
                        );
                    }
                    keep
                });
                for field in data.fields.values_mut() {
                    field.parameters.retain(|_, param| resolves(&param.type_annotation));
                }
            },

            GraphQLType::Union(union_type) => {
                union_type.members.retain(|member_name, _| type_names.contains(member_name));
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaHealError {
    #[error(
        "A type was renamed to `{type_name}` but another type with that name \
        already exists"
    )]
    DuplicateTypeName {
        type_name: String,
    },
}
